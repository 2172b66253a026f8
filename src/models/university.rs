// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! University catalog entries: requirements, supplemental questions, and deadlines.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One item on a university's application checklist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Short machine-ish name, e.g. `transcript` or `sat-score`.
    pub kind: String,
    pub required: bool,
    pub description: String,
}

/// Expected answer shape for a supplemental question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerKind {
    Essay,
    ShortAnswer,
    MultipleChoice,
}

/// A university-specific prompt answered inside an application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementalQuestion {
    pub id: String,
    pub prompt: String,
    pub kind: AnswerKind,
    pub max_words: Option<u32>,
    pub required: bool,
}

/// Deadline set. Regular decision is always present; the early rounds are optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deadlines {
    pub early_decision: Option<NaiveDate>,
    pub early_action: Option<NaiveDate>,
    pub regular: NaiveDate,
}

impl Deadlines {
    /// All deadlines with their display labels, in round order.
    pub fn rounds(&self) -> Vec<(&'static str, NaiveDate)> {
        let mut rounds = Vec::new();
        if let Some(date) = self.early_decision {
            rounds.push(("Early Decision", date));
        }
        if let Some(date) = self.early_action {
            rounds.push(("Early Action", date));
        }
        rounds.push(("Regular Decision", self.regular));
        rounds
    }

    /// The next deadline on or after `today`, falling back to the regular
    /// deadline when every round has passed.
    pub fn next(&self, today: NaiveDate) -> (&'static str, NaiveDate) {
        self.rounds()
            .into_iter()
            .filter(|(_, date)| *date >= today)
            .min_by_key(|(_, date)| *date)
            .unwrap_or(("Regular Decision", self.regular))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: String,
    pub requirements: Vec<Requirement>,
    pub supplemental_questions: Vec<SupplementalQuestion>,
    pub deadlines: Deadlines,
    /// Application fee in whole dollars.
    pub application_fee: u32,
    /// Acceptance rate in percent.
    pub acceptance_rate: f32,
    pub ranking: Option<u32>,
}

impl University {
    /// Sort key for the ranking column: unranked entries order after every
    /// ranked one.
    pub fn rank_key(&self) -> u32 {
        self.ranking.unwrap_or(u32::MAX)
    }

    /// Requirements that must be fulfilled, in catalog order.
    pub fn required_requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter().filter(|req| req.required)
    }
}
