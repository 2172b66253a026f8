// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! In-app notifications shown behind the bell icon.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    Deadline,
    Document,
    Decision,
    Message,
}

impl NotificationKind {
    /// Phosphor icon glyph for the notification list.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Deadline => egui_phosphor::regular::CLOCK,
            NotificationKind::Document => egui_phosphor::regular::UPLOAD_SIMPLE,
            NotificationKind::Decision => egui_phosphor::regular::SEAL_CHECK,
            NotificationKind::Message => egui_phosphor::regular::CHAT_CIRCLE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub body: String,
    pub kind: NotificationKind,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}
