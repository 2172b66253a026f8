// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Shared helper utilities reused by UI and business logic.

pub mod ids;
pub mod progress;

/// Generate a fresh record id.
pub use ids::new_id;
/// Rounded integer percentage of `filled` over `total`.
pub use progress::percent;
