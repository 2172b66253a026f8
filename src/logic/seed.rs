// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Hand-coded seed data. Everything here lives in memory only and resets
//! on every launch; the session file is the sole persisted artifact.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::application::{Application, ApplicationStatus};
use crate::models::message::{Contact, Direction, Message};
use crate::models::notification::{Notification, NotificationKind};
use crate::models::profile::{
    Activity, Citizenship, EducationEntry, Essay, PersonalInfo, StudentProfile,
};
use crate::models::university::{
    AnswerKind, Deadlines, Requirement, SupplementalQuestion, University,
};
use crate::models::user::User;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("seed timestamps are valid RFC 3339")
}

fn requirement(kind: &str, required: bool, description: &str) -> Requirement {
    Requirement {
        kind: kind.into(),
        required,
        description: description.into(),
    }
}

fn essay_question(id: &str, prompt: &str, max_words: u32) -> SupplementalQuestion {
    SupplementalQuestion {
        id: id.into(),
        prompt: prompt.into(),
        kind: AnswerKind::Essay,
        max_words: Some(max_words),
        required: true,
    }
}

/// The browsable university catalog.
pub fn universities() -> Vec<University> {
    vec![
        University {
            id: "1".into(),
            name: "Harvard University".into(),
            location: "Cambridge, MA".into(),
            description: "Harvard University is a private Ivy League research university \
                          in Cambridge, Massachusetts."
                .into(),
            requirements: vec![
                requirement("transcript", true, "Official high school transcript"),
                requirement("sat-score", true, "SAT or ACT scores"),
                requirement("recommendation", true, "2 teacher recommendations"),
                requirement("essay", true, "Personal statement"),
            ],
            supplemental_questions: vec![
                essay_question(
                    "harvard-1",
                    "What would you want your future college roommate to know about you?",
                    150,
                ),
                essay_question(
                    "harvard-2",
                    "How do you hope to use your college education?",
                    200,
                ),
            ],
            deadlines: Deadlines {
                early_decision: Some(date(2024, 11, 1)),
                early_action: None,
                regular: date(2025, 1, 1),
            },
            application_fee: 85,
            acceptance_rate: 3.4,
            ranking: Some(2),
        },
        University {
            id: "2".into(),
            name: "Stanford University".into(),
            location: "Stanford, CA".into(),
            description: "Stanford University is a private research university in \
                          Stanford, California."
                .into(),
            requirements: vec![
                requirement("transcript", true, "Official high school transcript"),
                requirement("sat-score", false, "SAT or ACT scores (test-optional)"),
                requirement("recommendation", true, "3 teacher recommendations"),
                requirement("essay", true, "Personal statement and supplemental essays"),
            ],
            supplemental_questions: vec![
                essay_question("stanford-1", "What matters to you, and why?", 250),
                SupplementalQuestion {
                    id: "stanford-2".into(),
                    prompt: "Tell us about something that is meaningful to you and why.".into(),
                    kind: AnswerKind::ShortAnswer,
                    max_words: Some(100),
                    required: true,
                },
            ],
            deadlines: Deadlines {
                early_decision: None,
                early_action: Some(date(2024, 11, 1)),
                regular: date(2025, 1, 5),
            },
            application_fee: 90,
            acceptance_rate: 3.9,
            ranking: Some(6),
        },
        University {
            id: "3".into(),
            name: "Massachusetts Institute of Technology".into(),
            location: "Cambridge, MA".into(),
            description: "MIT is a private research university in Cambridge, Massachusetts."
                .into(),
            requirements: vec![
                requirement("transcript", true, "Official high school transcript"),
                requirement("sat-score", true, "SAT Subject Tests recommended"),
                requirement(
                    "recommendation",
                    true,
                    "2 teacher recommendations + 1 counselor",
                ),
                requirement("essay", true, "Personal statement and short answers"),
            ],
            supplemental_questions: vec![essay_question(
                "mit-1",
                "Describe the world you come from; for example, your family, clubs, school, \
                 community, city, or town.",
                300,
            )],
            deadlines: Deadlines {
                early_decision: None,
                early_action: Some(date(2024, 11, 1)),
                regular: date(2025, 1, 1),
            },
            application_fee: 75,
            acceptance_rate: 4.1,
            ranking: Some(2),
        },
        // Zimbabwe Polytechnic is the unranked-by-US-lists entry that keeps
        // the ranking sort honest.
        University {
            id: "polytech".into(),
            name: "Zimbabwe Polytechnic".into(),
            location: "Harare".into(),
            description: "Leading technical university offering engineering and applied \
                          sciences."
                .into(),
            requirements: vec![
                requirement(
                    "high-school-transcript",
                    true,
                    "Certified secondary school transcript",
                ),
                requirement("recommendation-letter", true, "One recommendation letter"),
                requirement("personal-statement", false, "Optional personal statement"),
            ],
            supplemental_questions: Vec::new(),
            deadlines: Deadlines {
                early_decision: Some(date(2025, 8, 15)),
                early_action: Some(date(2025, 8, 30)),
                regular: date(2025, 9, 15),
            },
            application_fee: 20,
            acceptance_rate: 70.0,
            ranking: None,
        },
    ]
}

/// A starting set of applications for the signed-in student, referencing
/// the seeded universities.
pub fn applications(student_id: &str) -> Vec<Application> {
    let submitted_answers: BTreeMap<String, String> = [
        (
            "harvard-1".to_string(),
            "I keep odd hours and a tidy desk, and I will always share my notes.".to_string(),
        ),
        (
            "harvard-2".to_string(),
            "To build tools that make education accessible back home.".to_string(),
        ),
    ]
    .into_iter()
    .collect();

    vec![
        Application {
            id: "app-1".into(),
            student_id: student_id.into(),
            university_id: "1".into(),
            status: ApplicationStatus::Submitted,
            submitted_at: Some(date(2024, 10, 15)),
            required_documents: vec![
                "transcript".into(),
                "sat-score".into(),
                "recommendation".into(),
                "essay".into(),
            ],
            submitted_documents: vec![
                "transcript".into(),
                "sat-score".into(),
                "recommendation".into(),
                "essay".into(),
            ],
            supplemental_answers: submitted_answers,
        },
        Application {
            id: "app-2".into(),
            student_id: student_id.into(),
            university_id: "2".into(),
            status: ApplicationStatus::Draft,
            submitted_at: None,
            required_documents: vec![
                "transcript".into(),
                "recommendation".into(),
                "essay".into(),
            ],
            submitted_documents: vec!["transcript".into()],
            supplemental_answers: BTreeMap::new(),
        },
        Application {
            id: "app-3".into(),
            student_id: student_id.into(),
            university_id: "3".into(),
            status: ApplicationStatus::UnderReview,
            submitted_at: Some(date(2024, 10, 18)),
            required_documents: vec![
                "transcript".into(),
                "sat-score".into(),
                "recommendation".into(),
                "essay".into(),
            ],
            submitted_documents: vec![
                "transcript".into(),
                "sat-score".into(),
                "recommendation".into(),
                "essay".into(),
            ],
            supplemental_answers: [(
                "mit-1".to_string(),
                "A small town where the library doubled as the computer lab.".to_string(),
            )]
            .into_iter()
            .collect(),
        },
    ]
}

/// Mailbox seed for the signed-in user.
pub fn messages(user: &User) -> Vec<Message> {
    let me = Contact::new(user.full_name(), user.email.clone(), user.role.label());
    vec![
        Message {
            id: "msg-1".into(),
            from: Contact::new(
                "Harvard Admissions",
                "admissions@harvard.edu",
                "University",
            ),
            to: me.clone(),
            subject: "Application Status Update".into(),
            body: "Dear John,\n\nWe wanted to update you on the status of your Early Decision \
                   application. We have received all of your required materials and your \
                   application is now under review.\n\nOur admissions committee will be \
                   reviewing applications over the next few weeks. You can expect to receive \
                   our decision by December 15th.\n\nBest regards,\nHarvard Admissions Office"
                .into(),
            timestamp: ts("2024-10-20T10:30:00Z"),
            read: false,
            direction: Direction::Received,
        },
        Message {
            id: "msg-2".into(),
            from: Contact::new("MIT Admissions", "admissions@mit.edu", "University"),
            to: me.clone(),
            subject: "Missing Document - Transcript".into(),
            body: "Hello John,\n\nWe are currently reviewing your application for admission \
                   and noticed that we have not yet received your official high school \
                   transcript.\n\nPlease have your high school send your transcript directly \
                   to our admissions office as soon as possible.\n\nThank you,\nMIT Admissions"
                .into(),
            timestamp: ts("2024-10-19T14:15:00Z"),
            read: true,
            direction: Direction::Received,
        },
        Message {
            id: "msg-3".into(),
            from: me,
            to: Contact::new(
                "Stanford Admissions",
                "admissions@stanford.edu",
                "University",
            ),
            subject: "Question about Supplemental Essays".into(),
            body: "Dear Stanford Admissions,\n\nI have a question about one of the \
                   supplemental essay prompts. For the \"What matters to you and why?\" essay, \
                   are you looking for personal experiences or can I discuss broader topics \
                   like social issues?\n\nThank you for your time,\nJohn Smith"
                .into(),
            timestamp: ts("2024-10-18T09:20:00Z"),
            read: true,
            direction: Direction::Sent,
        },
    ]
}

/// Notification feed behind the bell icon.
pub fn notifications(user_id: &str) -> Vec<Notification> {
    let make = |id: &str, title: &str, body: &str, kind, when: &str, read: bool| Notification {
        id: id.into(),
        user_id: user_id.into(),
        title: title.into(),
        body: body.into(),
        kind,
        timestamp: ts(when),
        read,
    };
    vec![
        make(
            "ntf-1",
            "Transcript uploaded",
            "Harvard University application",
            NotificationKind::Document,
            "2024-10-20T08:00:00Z",
            false,
        ),
        make(
            "ntf-2",
            "Application submitted",
            "Stanford University",
            NotificationKind::Decision,
            "2024-10-19T16:00:00Z",
            false,
        ),
        make(
            "ntf-3",
            "New message received",
            "From MIT Admissions",
            NotificationKind::Message,
            "2024-10-18T12:00:00Z",
            true,
        ),
        make(
            "ntf-4",
            "Deadline reminder",
            "Harvard Early Decision deadline in 15 days",
            NotificationKind::Deadline,
            "2024-10-17T09:00:00Z",
            true,
        ),
    ]
}

/// Pre-filled profile for the demo student.
pub fn student_profile() -> StudentProfile {
    StudentProfile {
        personal: PersonalInfo {
            first_name: "John".into(),
            last_name: "Smith".into(),
            email: "john.smith@email.com".into(),
            phone: "(555) 123-4567".into(),
            date_of_birth: date(2005, 6, 15),
            address: "123 Main St, Anytown, CA 90210".into(),
            citizenship: Citizenship::UsCitizen,
        },
        education: vec![EducationEntry {
            id: "edu-1".into(),
            school_name: "Central High School".into(),
            location: "Anytown, CA".into(),
            start: "2021-08".into(),
            end: "2025-06".into(),
            gpa: 3.85,
            max_gpa: 4.0,
        }],
        activities: vec![
            Activity {
                id: "act-1".into(),
                name: "Student Government".into(),
                role: "Vice President".into(),
                description: "Led student initiatives and represented the student body in \
                              school board meetings."
                    .into(),
                start: "2022-09".into(),
                end: Some("2024-06".into()),
                hours_per_week: 10,
            },
            Activity {
                id: "act-2".into(),
                name: "Math Tutoring".into(),
                role: "Volunteer Tutor".into(),
                description: "Tutored underclassmen in algebra and calculus.".into(),
                start: "2023-01".into(),
                end: None,
                hours_per_week: 5,
            },
        ],
        essays: vec![Essay {
            id: "essay-1".into(),
            prompt: "Personal Statement - main essay for all applications".into(),
            content: String::new(),
            max_words: 650,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applications_reference_seeded_universities() {
        let universities = universities();
        for app in applications("1") {
            assert!(
                universities.iter().any(|u| u.id == app.university_id),
                "application {} points at unknown university {}",
                app.id,
                app.university_id
            );
        }
    }

    #[test]
    fn submitted_seeds_carry_submission_dates() {
        for app in applications("1") {
            match app.status {
                ApplicationStatus::Draft => assert!(app.submitted_at.is_none()),
                _ => assert!(app.submitted_at.is_some()),
            }
        }
    }

    #[test]
    fn seeded_completion_matches_document_state() {
        let universities = universities();
        let apps = applications("1");

        let harvard = &universities[0];
        assert_eq!(apps[0].completion_percent(&harvard.supplemental_questions), 100);

        let stanford = &universities[1];
        // 1 of 3 documents, 0 of 2 required answers.
        assert_eq!(apps[1].completion_percent(&stanford.supplemental_questions), 20);
    }

    #[test]
    fn exactly_one_unranked_university_in_catalog() {
        let unranked: Vec<_> = universities()
            .into_iter()
            .filter(|u| u.ranking.is_none())
            .collect();
        assert_eq!(unranked.len(), 1);
        assert_eq!(unranked[0].id, "polytech");
    }
}
