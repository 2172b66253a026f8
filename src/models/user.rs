// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Account domain model shared by the auth flow and the session store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Role attached to every account; drives which sidebar menu is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[default]
    Student,
    Recommender,
    Admin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Recommender => "Recommender",
            Role::Admin => "University Administrator",
        }
    }
}

/// A signed-in (or registrable) account. Serialized as-is into the session file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub created_at: NaiveDate,
}

impl User {
    /// Display name used in the top bar and as the sender of composed messages.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_record_round_trips_through_json() {
        let user = User {
            id: "1".into(),
            email: "student@example.com".into(),
            role: Role::Student,
            first_name: "John".into(),
            last_name: "Smith".into(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();

        assert_eq!(back, user);
        assert!(json.contains("\"student\""));
    }
}
