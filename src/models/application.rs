// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Application lifecycle: status transitions and derived completion.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::university::SupplementalQuestion;
use crate::utils::percent;

/// Where an application sits in its lifecycle.
///
/// Legal transitions: `Draft → Submitted → UnderReview → {Accepted,
/// Rejected, Waitlisted}`. Decisions are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationStatus {
    #[default]
    Draft,
    Submitted,
    UnderReview,
    Accepted,
    Rejected,
    Waitlisted,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 6] = [
        ApplicationStatus::Draft,
        ApplicationStatus::Submitted,
        ApplicationStatus::UnderReview,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
        ApplicationStatus::Waitlisted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Draft => "Draft",
            ApplicationStatus::Submitted => "Submitted",
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Waitlisted => "Waitlisted",
        }
    }

    /// Whether moving to `next` follows the legal lifecycle order.
    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        use ApplicationStatus::*;
        matches!(
            (self, next),
            (Draft, Submitted)
                | (Submitted, UnderReview)
                | (UnderReview, Accepted)
                | (UnderReview, Rejected)
                | (UnderReview, Waitlisted)
        )
    }

    /// A decision has been reached; no further transitions are possible.
    pub fn is_decided(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Accepted
                | ApplicationStatus::Rejected
                | ApplicationStatus::Waitlisted
        )
    }
}

/// A student's application to one university.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub student_id: String,
    pub university_id: String,
    pub status: ApplicationStatus,
    pub submitted_at: Option<NaiveDate>,
    /// Document names the university expects for this application.
    pub required_documents: Vec<String>,
    /// Document names the student has provided so far.
    pub submitted_documents: Vec<String>,
    /// Supplemental question id → answer text.
    pub supplemental_answers: BTreeMap<String, String>,
}

impl Application {
    /// A fresh draft with nothing filled in yet.
    pub fn draft(
        id: String,
        student_id: String,
        university_id: String,
        required_documents: Vec<String>,
    ) -> Self {
        Self {
            id,
            student_id,
            university_id,
            status: ApplicationStatus::Draft,
            submitted_at: None,
            required_documents,
            submitted_documents: Vec::new(),
            supplemental_answers: BTreeMap::new(),
        }
    }

    /// Move to `next`, enforcing the lifecycle order. Records the submission
    /// date when entering `Submitted`.
    pub fn transition(&mut self, next: ApplicationStatus, today: NaiveDate) -> Result<()> {
        if !self.status.can_transition_to(next) {
            bail!(
                "Cannot move application from {} to {}",
                self.status.label(),
                next.label()
            );
        }
        if next == ApplicationStatus::Submitted {
            self.submitted_at = Some(today);
        }
        self.status = next;
        Ok(())
    }

    /// Record a provided document. Duplicates are ignored.
    pub fn add_document(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() || self.submitted_documents.iter().any(|d| d == name) {
            return;
        }
        self.submitted_documents.push(name.to_string());
    }

    pub fn remove_document(&mut self, name: &str) {
        self.submitted_documents.retain(|d| d != name);
    }

    /// Required documents not yet provided.
    pub fn missing_documents(&self) -> Vec<&str> {
        self.required_documents
            .iter()
            .filter(|req| !self.submitted_documents.contains(req))
            .map(String::as_str)
            .collect()
    }

    /// Completion derived from actual field state: provided required
    /// documents plus answered required supplemental questions, over the
    /// total count of both. An application with no requirements is complete.
    pub fn completion_percent(&self, questions: &[SupplementalQuestion]) -> u8 {
        let required_questions: Vec<_> = questions.iter().filter(|q| q.required).collect();
        let total = self.required_documents.len() + required_questions.len();

        let documents_done = self
            .required_documents
            .iter()
            .filter(|req| self.submitted_documents.contains(req))
            .count();
        let answers_done = required_questions
            .iter()
            .filter(|q| {
                self.supplemental_answers
                    .get(&q.id)
                    .is_some_and(|a| !a.trim().is_empty())
            })
            .count();

        if total == 0 {
            return 100;
        }
        percent(documents_done + answers_done, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::university::AnswerKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 30).unwrap()
    }

    fn question(id: &str, required: bool) -> SupplementalQuestion {
        SupplementalQuestion {
            id: id.into(),
            prompt: "Why here?".into(),
            kind: AnswerKind::Essay,
            max_words: Some(150),
            required,
        }
    }

    fn draft() -> Application {
        Application::draft(
            "a1".into(),
            "s1".into(),
            "u1".into(),
            vec!["transcript".into(), "essay".into()],
        )
    }

    #[test]
    fn lifecycle_follows_legal_order() {
        let mut app = draft();

        app.transition(ApplicationStatus::Submitted, today()).unwrap();
        assert_eq!(app.submitted_at, Some(today()));
        app.transition(ApplicationStatus::UnderReview, today()).unwrap();
        app.transition(ApplicationStatus::Accepted, today()).unwrap();
        assert!(app.status.is_decided());
    }

    #[test]
    fn illegal_transitions_are_rejected() {
        let mut app = draft();

        assert!(app.transition(ApplicationStatus::Accepted, today()).is_err());
        assert!(
            app.transition(ApplicationStatus::UnderReview, today())
                .is_err()
        );
        assert_eq!(app.status, ApplicationStatus::Draft);
        assert_eq!(app.submitted_at, None);

        app.transition(ApplicationStatus::Submitted, today()).unwrap();
        assert!(app.transition(ApplicationStatus::Draft, today()).is_err());
    }

    #[test]
    fn decisions_are_terminal() {
        for decided in [
            ApplicationStatus::Accepted,
            ApplicationStatus::Rejected,
            ApplicationStatus::Waitlisted,
        ] {
            for next in ApplicationStatus::ALL {
                assert!(!decided.can_transition_to(next));
            }
        }
    }

    #[test]
    fn completion_counts_documents_and_required_answers() {
        let questions = [question("q1", true), question("q2", false)];
        let mut app = draft();

        // 0 of 3 required parts (2 documents + 1 required question).
        assert_eq!(app.completion_percent(&questions), 0);

        app.add_document("transcript");
        assert_eq!(app.completion_percent(&questions), 33);

        app.supplemental_answers
            .insert("q1".into(), "Because of the faculty.".into());
        assert_eq!(app.completion_percent(&questions), 67);

        // Blank answers and optional questions do not count.
        app.supplemental_answers.insert("q2".into(), "   ".into());
        assert_eq!(app.completion_percent(&questions), 67);

        app.add_document("essay");
        assert_eq!(app.completion_percent(&questions), 100);
    }

    #[test]
    fn completion_is_full_when_nothing_is_required() {
        let app = Application::draft("a1".into(), "s1".into(), "u1".into(), Vec::new());
        assert_eq!(app.completion_percent(&[]), 100);
    }

    #[test]
    fn documents_deduplicate_and_trim() {
        let mut app = draft();
        app.add_document(" transcript ");
        app.add_document("transcript");
        app.add_document("  ");

        assert_eq!(app.submitted_documents, vec!["transcript"]);
        assert_eq!(app.missing_documents(), vec!["essay"]);

        app.remove_document("transcript");
        assert!(app.submitted_documents.is_empty());
    }
}
