// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Session persistence: the one durable artifact of the app.
//!
//! The signed-in user is serialized as JSON into a single file under the
//! platform data directory, read back at startup, and deleted on logout.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::models::user::User;

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted at the platform data dir, e.g.
    /// `~/.local/share/applyiq/session.json` on Linux.
    pub fn open_default() -> Result<Self> {
        let base = dirs::data_dir().ok_or_else(|| anyhow!("No platform data directory"))?;
        Ok(Self::new(base.join("applyiq").join("session.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored session, if any. A missing file is simply "signed out".
    pub fn load(&self) -> Result<Option<User>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file {:?}", self.path))?;
        let user = serde_json::from_str(&raw)
            .with_context(|| format!("Corrupt session file {:?}", self.path))?;
        Ok(Some(user))
    }

    pub fn save(&self, user: &User) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create session directory {:?}", parent))?;
        }
        let raw = serde_json::to_string_pretty(user).context("Failed to serialize session")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write session file {:?}", self.path))?;
        Ok(())
    }

    /// Remove the session file. Clearing an absent session is not an error.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove session file {:?}", self.path))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Role;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn user() -> User {
        User {
            id: "1".into(),
            email: "student@example.com".into(),
            role: Role::Student,
            first_name: "John".into(),
            last_name: "Smith".into(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn session_round_trips_and_clears() {
        let tmp = TempDir::new().unwrap();
        let store = SessionStore::new(tmp.path().join("nested").join("session.json"));

        assert_eq!(store.load().unwrap(), None);

        store.save(&user()).unwrap();
        assert_eq!(store.load().unwrap(), Some(user()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // Clearing again stays fine.
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_session_surfaces_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = SessionStore::new(path);
        assert!(store.load().is_err());
    }
}
