// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Business logic: listing queries, deadline math, mock directory/auth,
//! session persistence, and seed data.

pub mod auth;
pub mod deadlines;
pub mod query;
pub mod seed;
pub mod session;
