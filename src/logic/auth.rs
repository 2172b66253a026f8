// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Mock authentication against a fixed in-memory directory.
//!
//! Stand-in for a real credential service: every demo account shares the
//! same password and nothing is hashed. The functions here are pure; the
//! simulated network latency lives in the command worker.

use anyhow::{Result, bail};
use chrono::NaiveDate;

use crate::models::user::{Role, User};
use crate::utils::new_id;

/// Shared password for all demo accounts.
pub const DEMO_PASSWORD: &str = "password123";

/// Error message for any failed sign-in. Deliberately generic: the form
/// never reveals whether the email or the password was wrong.
pub const LOGIN_FAILED: &str = "Invalid email or password";

/// The fixed demo directory.
pub fn directory() -> Vec<User> {
    let created = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    vec![
        User {
            id: "1".into(),
            email: "student@example.com".into(),
            role: Role::Student,
            first_name: "John".into(),
            last_name: "Smith".into(),
            created_at: created,
        },
        User {
            id: "2".into(),
            email: "recommender@example.com".into(),
            role: Role::Recommender,
            first_name: "Dr. Jane".into(),
            last_name: "Johnson".into(),
            created_at: created,
        },
        User {
            id: "3".into(),
            email: "admin@university.edu".into(),
            role: Role::Admin,
            first_name: "Sarah".into(),
            last_name: "Wilson".into(),
            created_at: created,
        },
    ]
}

/// Check credentials against the directory.
pub fn authenticate(email: &str, password: &str) -> Result<User> {
    let found = directory().into_iter().find(|user| user.email == email);
    match found {
        Some(user) if password == DEMO_PASSWORD => Ok(user),
        _ => bail!(LOGIN_FAILED),
    }
}

/// Fields collected by the registration form, already field-validated by
/// the auth view before they reach this point.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Create an account from a validated registration form.
pub fn register(form: &RegistrationForm, today: NaiveDate) -> Result<User> {
    if directory().iter().any(|user| user.email == form.email) {
        bail!("Registration failed. Please try again.");
    }
    Ok(User {
        id: new_id(),
        email: form.email.clone(),
        role: form.role,
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        created_at: today,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_login_succeeds_with_demo_password() {
        let user = authenticate("student@example.com", "password123").unwrap();
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.first_name, "John");
    }

    #[test]
    fn wrong_password_fails_with_generic_message() {
        for email in ["student@example.com", "nobody@example.com"] {
            let err = authenticate(email, "wrongpass").unwrap_err();
            assert_eq!(err.to_string(), LOGIN_FAILED);
        }
    }

    #[test]
    fn registration_creates_account_with_requested_role() {
        let form = RegistrationForm {
            first_name: "Amara".into(),
            last_name: "Moyo".into(),
            email: "amara@example.com".into(),
            password: "secret1".into(),
            role: Role::Recommender,
        };
        let today = NaiveDate::from_ymd_opt(2025, 8, 30).unwrap();

        let user = register(&form, today).unwrap();
        assert_eq!(user.role, Role::Recommender);
        assert_eq!(user.created_at, today);
        assert!(!user.id.is_empty());
    }

    #[test]
    fn registration_rejects_directory_emails() {
        let form = RegistrationForm {
            email: "student@example.com".into(),
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 8, 30).unwrap();
        assert!(register(&form, today).is_err());
    }
}
