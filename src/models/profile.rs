// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Student profile: personal info, education history, activities, and essays.
//!
//! The profile is split into four sections; completion is the share of
//! sections that have real content, not a stored number.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::percent;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Citizenship {
    #[default]
    UsCitizen,
    PermanentResident,
    International,
}

impl Citizenship {
    pub const ALL: [Citizenship; 3] = [
        Citizenship::UsCitizen,
        Citizenship::PermanentResident,
        Citizenship::International,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Citizenship::UsCitizen => "US Citizen",
            Citizenship::PermanentResident => "Permanent Resident",
            Citizenship::International => "International Student",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub citizenship: Citizenship,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            // Placeholder until the student picks their own date.
            date_of_birth: NaiveDate::from_ymd_opt(2005, 1, 1).expect("valid date"),
            address: String::new(),
            citizenship: Citizenship::default(),
        }
    }
}

impl PersonalInfo {
    /// Every free-text field filled in. The date and citizenship selectors
    /// always hold a value, so they do not gate completeness.
    pub fn is_complete(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.address,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: String,
    pub school_name: String,
    pub location: String,
    /// Month strings as entered, e.g. `2021-08`.
    pub start: String,
    pub end: String,
    pub gpa: f32,
    pub max_gpa: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub role: String,
    pub description: String,
    pub start: String,
    /// Empty while the activity is ongoing.
    pub end: Option<String>,
    pub hours_per_week: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Essay {
    pub id: String,
    pub prompt: String,
    pub content: String,
    pub max_words: u32,
}

impl Essay {
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    pub fn over_limit(&self) -> bool {
        self.word_count() > self.max_words as usize
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub personal: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub activities: Vec<Activity>,
    pub essays: Vec<Essay>,
}

/// The four sections that feed the completion bar.
pub const SECTION_COUNT: usize = 4;

impl StudentProfile {
    /// Number of sections with real content: completed personal info, at
    /// least one school, at least one activity, at least one essay with text.
    pub fn sections_complete(&self) -> usize {
        let mut done = 0;
        if self.personal.is_complete() {
            done += 1;
        }
        if self
            .education
            .iter()
            .any(|e| !e.school_name.trim().is_empty())
        {
            done += 1;
        }
        if self.activities.iter().any(|a| !a.name.trim().is_empty()) {
            done += 1;
        }
        if self.essays.iter().any(|e| !e.content.trim().is_empty()) {
            done += 1;
        }
        done
    }

    /// Completion as a rounded percentage of filled sections.
    pub fn completion_percent(&self) -> u8 {
        percent(self.sections_complete(), SECTION_COUNT)
    }
}
