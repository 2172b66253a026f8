// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! View components structured for MVU-style updates.

pub mod applications;
pub mod auth;
pub mod dashboard;
pub mod messages;
pub mod profile;
pub mod universities;
