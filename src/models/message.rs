// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Messages exchanged between students and admissions offices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sender or recipient descriptor. Not a full account: admissions offices
/// are not users of this app.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

/// Which side of the mailbox a message belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Sent,
    Received,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub from: Contact,
    pub to: Contact,
    pub subject: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub direction: Direction,
}

impl Message {
    /// Flip to read. The read flag only ever moves unread → read; there is
    /// deliberately no way back.
    pub fn mark_read(&mut self) {
        self.read = true;
    }

    /// Name shown in the list row: the sender for received mail, the
    /// recipient for sent mail.
    pub fn counterpart_name(&self) -> String {
        match self.direction {
            Direction::Received => self.from.name.clone(),
            Direction::Sent => format!("To: {}", self.to.name),
        }
    }
}
