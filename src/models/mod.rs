// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Domain layer: pure data types and validation helpers shared between UI and logic.

pub mod application;
pub mod message;
pub mod notification;
pub mod profile;
pub mod university;
pub mod user;
