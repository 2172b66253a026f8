// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Application tracker: filterable card list plus a detail editor for drafts.

use chrono::{DateTime, NaiveDate, Utc};
use eframe::egui;

use crate::logic::deadlines::{self, Urgency};
use crate::logic::query::ListQuery;
use crate::models::application::{Application, ApplicationStatus};
use crate::models::university::University;

use super::universities::urgency_color;

/// An application joined with the catalog fields the list needs.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplicationCard {
    pub application: Application,
    pub university_name: String,
    pub deadline_round: &'static str,
    pub deadline: NaiveDate,
    pub completion: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationsModel {
    pub term: String,
    /// Status filter; `None` means all statuses.
    pub status: Option<ApplicationStatus>,
    /// Application opened in the detail editor.
    pub selected: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplicationsMsg {
    TermChanged(String),
    StatusFilterChanged(Option<ApplicationStatus>),
    Selected(Option<String>),
    SubmitPressed(String),
    UploadPressed {
        application_id: String,
        name: String,
    },
    DocumentRemoved {
        application_id: String,
        name: String,
    },
    AnswerChanged {
        application_id: String,
        question_id: String,
        text: String,
    },
}

/// Data mutations surfaced to the root, which owns the application list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplicationsEvent {
    SubmitRequested {
        application_id: String,
    },
    DocumentPickRequested {
        application_id: String,
        name: String,
    },
    DocumentRemoved {
        application_id: String,
        name: String,
    },
    AnswerEdited {
        application_id: String,
        question_id: String,
        text: String,
    },
}

pub fn update(model: &mut ApplicationsModel, msg: ApplicationsMsg) -> Option<ApplicationsEvent> {
    match msg {
        ApplicationsMsg::TermChanged(term) => {
            model.term = term;
            None
        }
        ApplicationsMsg::StatusFilterChanged(status) => {
            model.status = status;
            None
        }
        ApplicationsMsg::Selected(id) => {
            model.selected = id;
            None
        }
        ApplicationsMsg::SubmitPressed(application_id) => {
            Some(ApplicationsEvent::SubmitRequested { application_id })
        }
        ApplicationsMsg::UploadPressed {
            application_id,
            name,
        } => Some(ApplicationsEvent::DocumentPickRequested {
            application_id,
            name,
        }),
        ApplicationsMsg::DocumentRemoved {
            application_id,
            name,
        } => Some(ApplicationsEvent::DocumentRemoved {
            application_id,
            name,
        }),
        ApplicationsMsg::AnswerChanged {
            application_id,
            question_id,
            text,
        } => Some(ApplicationsEvent::AnswerEdited {
            application_id,
            question_id,
            text,
        }),
    }
}

/// Join applications with their universities. Applications pointing at an
/// unknown university are skipped rather than shown half-empty.
pub fn cards(
    applications: &[Application],
    catalog: &[University],
    today: NaiveDate,
) -> Vec<ApplicationCard> {
    applications
        .iter()
        .filter_map(|app| {
            let university = catalog.iter().find(|u| u.id == app.university_id)?;
            let (deadline_round, deadline) = university.deadlines.next(today);
            Some(ApplicationCard {
                completion: app.completion_percent(&university.supplemental_questions),
                application: app.clone(),
                university_name: university.name.clone(),
                deadline_round,
                deadline,
            })
        })
        .collect()
}

/// The card list derived from the current term and status filter, ordered
/// by university name.
pub fn visible(model: &ApplicationsModel, cards: &[ApplicationCard]) -> Vec<ApplicationCard> {
    let mut query =
        ListQuery::new(|c: &ApplicationCard| c.university_name.as_str()).term(model.term.clone());

    if let Some(status) = model.status {
        query = query.category(move |c: &ApplicationCard| c.application.status == status);
    }

    query.run(cards)
}

pub fn view(
    ui: &mut egui::Ui,
    model: &ApplicationsModel,
    applications: &[Application],
    catalog: &[University],
    now: DateTime<Utc>,
) -> Vec<ApplicationsMsg> {
    let mut msgs = Vec::new();

    ui.heading("My Applications");
    ui.add_space(8.0);

    render_controls(ui, model, &mut msgs);
    ui.add_space(8.0);

    let all_cards = cards(applications, catalog, now.date_naive());
    let shown = visible(model, &all_cards);

    egui::ScrollArea::vertical().show(ui, |ui| {
        if shown.is_empty() {
            ui.label(
                egui::RichText::new("No applications match your filters.")
                    .italics()
                    .color(egui::Color32::from_gray(110)),
            );
            return;
        }
        for card in &shown {
            render_card(ui, model, card, now, &mut msgs);
            ui.add_space(6.0);

            if model.selected.as_deref() == Some(&card.application.id) {
                if let Some(university) =
                    catalog.iter().find(|u| u.id == card.application.university_id)
                {
                    render_detail(ui, card, university, &mut msgs);
                    ui.add_space(6.0);
                }
            }
        }
    });

    msgs
}

fn render_controls(ui: &mut egui::Ui, model: &ApplicationsModel, msgs: &mut Vec<ApplicationsMsg>) {
    ui.horizontal(|ui| {
        let mut term = model.term.clone();
        if ui
            .add(
                egui::TextEdit::singleline(&mut term)
                    .hint_text(format!(
                        "{} Search by university...",
                        egui_phosphor::regular::MAGNIFYING_GLASS
                    ))
                    .desired_width(260.0),
            )
            .changed()
        {
            msgs.push(ApplicationsMsg::TermChanged(term));
        }

        egui::ComboBox::from_id_salt("application_status")
            .selected_text(model.status.map_or("All statuses", |s| s.label()))
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(model.status.is_none(), "All statuses")
                    .clicked()
                {
                    msgs.push(ApplicationsMsg::StatusFilterChanged(None));
                }
                for status in ApplicationStatus::ALL {
                    if ui
                        .selectable_label(model.status == Some(status), status.label())
                        .clicked()
                    {
                        msgs.push(ApplicationsMsg::StatusFilterChanged(Some(status)));
                    }
                }
            });
    });
}

fn render_card(
    ui: &mut egui::Ui,
    model: &ApplicationsModel,
    card: &ApplicationCard,
    now: DateTime<Utc>,
    msgs: &mut Vec<ApplicationsMsg>,
) {
    let app = &card.application;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&card.university_name).strong().size(16.0));
                    ui.label(
                        egui::RichText::new(app.status.label())
                            .small()
                            .color(status_color(app.status)),
                    );
                });
                match app.submitted_at {
                    Some(date) => {
                        ui.label(
                            egui::RichText::new(format!("Submitted {date}"))
                                .small()
                                .color(egui::Color32::from_gray(110)),
                        );
                    }
                    None => {
                        let days = deadlines::days_until(card.deadline, now);
                        ui.label(
                            egui::RichText::new(format!(
                                "{}: {} ({})",
                                card.deadline_round,
                                card.deadline,
                                deadlines::days_left_label(days)
                            ))
                            .small()
                            .color(urgency_color(Urgency::for_days(days))),
                        );
                    }
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                let selected = model.selected.as_deref() == Some(&app.id);
                if ui.button(if selected { "Close" } else { "Open" }).clicked() {
                    msgs.push(ApplicationsMsg::Selected(if selected {
                        None
                    } else {
                        Some(app.id.clone())
                    }));
                }
                if app.status == ApplicationStatus::Draft {
                    let ready = card.completion == 100;
                    let button = ui
                        .add_enabled(ready, egui::Button::new("Submit"))
                        .on_disabled_hover_text("Complete all requirements first");
                    if button.clicked() {
                        msgs.push(ApplicationsMsg::SubmitPressed(app.id.clone()));
                    }
                }
            });
        });

        ui.add(
            egui::ProgressBar::new(f32::from(card.completion) / 100.0)
                .text(format!("{}% complete", card.completion)),
        );
    });
}

fn render_detail(
    ui: &mut egui::Ui,
    card: &ApplicationCard,
    university: &University,
    msgs: &mut Vec<ApplicationsMsg>,
) {
    let app = &card.application;
    let editable = app.status == ApplicationStatus::Draft;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(egui::RichText::new("Documents").strong());
        for name in &app.required_documents {
            let provided = app.submitted_documents.contains(name);
            ui.horizontal(|ui| {
                let icon = if provided {
                    egui_phosphor::regular::CHECK_CIRCLE
                } else {
                    egui_phosphor::regular::CIRCLE
                };
                ui.label(format!("{icon} {name}"));
                if editable {
                    if provided {
                        if ui.small_button("Remove").clicked() {
                            msgs.push(ApplicationsMsg::DocumentRemoved {
                                application_id: app.id.clone(),
                                name: name.clone(),
                            });
                        }
                    } else if ui
                        .small_button(format!(
                            "{} Upload",
                            egui_phosphor::regular::UPLOAD_SIMPLE
                        ))
                        .clicked()
                    {
                        msgs.push(ApplicationsMsg::UploadPressed {
                            application_id: app.id.clone(),
                            name: name.clone(),
                        });
                    }
                }
            });
        }

        if !university.supplemental_questions.is_empty() {
            ui.add_space(8.0);
            ui.label(egui::RichText::new("Supplemental Questions").strong());
            for question in &university.supplemental_questions {
                render_question(ui, app, question, editable, msgs);
            }
        }
    });
}

fn render_question(
    ui: &mut egui::Ui,
    app: &Application,
    question: &crate::models::university::SupplementalQuestion,
    editable: bool,
    msgs: &mut Vec<ApplicationsMsg>,
) {
    ui.add_space(4.0);
    ui.label(&question.prompt);

    let mut text = app
        .supplemental_answers
        .get(&question.id)
        .cloned()
        .unwrap_or_default();
    let words = text.split_whitespace().count();

    let edit = egui::TextEdit::multiline(&mut text)
        .desired_rows(3)
        .desired_width(f32::INFINITY)
        .interactive(editable);
    if ui.add(edit).changed() {
        msgs.push(ApplicationsMsg::AnswerChanged {
            application_id: app.id.clone(),
            question_id: question.id.clone(),
            text,
        });
    }

    if let Some(max) = question.max_words {
        let over = words > max as usize;
        ui.label(
            egui::RichText::new(format!("{words} / {max} words"))
                .small()
                .color(if over {
                    egui::Color32::from_rgb(190, 40, 40)
                } else {
                    egui::Color32::from_gray(110)
                }),
        );
    }
}

fn status_color(status: ApplicationStatus) -> egui::Color32 {
    match status {
        ApplicationStatus::Draft => egui::Color32::from_gray(120),
        ApplicationStatus::Submitted => egui::Color32::from_rgb(40, 100, 190),
        ApplicationStatus::UnderReview => egui::Color32::from_rgb(190, 130, 20),
        ApplicationStatus::Accepted => egui::Color32::from_rgb(40, 140, 70),
        ApplicationStatus::Rejected => egui::Color32::from_rgb(190, 40, 40),
        ApplicationStatus::Waitlisted => egui::Color32::from_rgb(130, 80, 190),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::seed;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 20).unwrap()
    }

    fn seeded_cards() -> Vec<ApplicationCard> {
        cards(&seed::applications("1"), &seed::universities(), today())
    }

    #[test]
    fn cards_join_university_fields() {
        let cards = seeded_cards();
        assert_eq!(cards.len(), 3);

        let harvard = cards
            .iter()
            .find(|c| c.application.id == "app-1")
            .expect("seeded application");
        assert_eq!(harvard.university_name, "Harvard University");
        assert_eq!(harvard.completion, 100);
        assert_eq!(harvard.deadline_round, "Early Decision");
    }

    #[test]
    fn cards_skip_orphaned_applications() {
        let mut apps = seed::applications("1");
        apps[0].university_id = "gone".into();
        let cards = cards(&apps, &seed::universities(), today());
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn default_listing_is_university_name_sorted() {
        let shown = visible(&ApplicationsModel::default(), &seeded_cards());
        let names: Vec<&str> = shown.iter().map(|c| c.university_name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Harvard University",
                "Massachusetts Institute of Technology",
                "Stanford University",
            ]
        );
    }

    #[test]
    fn status_filter_narrows_the_list() {
        let model = ApplicationsModel {
            status: Some(ApplicationStatus::Draft),
            ..Default::default()
        };
        let shown = visible(&model, &seeded_cards());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].application.id, "app-2");
    }

    #[test]
    fn term_matches_university_name() {
        let model = ApplicationsModel {
            term: "stanford".into(),
            ..Default::default()
        };
        let shown = visible(&model, &seeded_cards());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].university_name, "Stanford University");
    }

    #[test]
    fn answer_edits_surface_as_events() {
        let mut model = ApplicationsModel::default();
        let event = update(
            &mut model,
            ApplicationsMsg::AnswerChanged {
                application_id: "app-2".into(),
                question_id: "stanford-1".into(),
                text: "Curiosity.".into(),
            },
        );
        assert_eq!(
            event,
            Some(ApplicationsEvent::AnswerEdited {
                application_id: "app-2".into(),
                question_id: "stanford-1".into(),
                text: "Curiosity.".into(),
            })
        );
    }

    #[test]
    fn submit_press_surfaces_event() {
        let mut model = ApplicationsModel::default();
        let event = update(&mut model, ApplicationsMsg::SubmitPressed("app-2".into()));
        assert_eq!(
            event,
            Some(ApplicationsEvent::SubmitRequested {
                application_id: "app-2".into()
            })
        );
    }
}
