// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Mailbox: searchable message list, reading pane, and compose window.

use chrono::{DateTime, Utc};
use eframe::egui;

use crate::logic::deadlines::format_relative;
use crate::logic::query::ListQuery;
use crate::models::message::{Direction, Message};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageFilter {
    #[default]
    All,
    Unread,
    Sent,
    Received,
}

impl MessageFilter {
    pub const ALL: [MessageFilter; 4] = [
        MessageFilter::All,
        MessageFilter::Unread,
        MessageFilter::Sent,
        MessageFilter::Received,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MessageFilter::All => "All",
            MessageFilter::Unread => "Unread",
            MessageFilter::Sent => "Sent",
            MessageFilter::Received => "Received",
        }
    }

    fn keeps(&self, message: &Message) -> bool {
        match self {
            MessageFilter::All => true,
            MessageFilter::Unread => !message.read && message.direction == Direction::Received,
            MessageFilter::Sent => message.direction == Direction::Sent,
            MessageFilter::Received => message.direction == Direction::Received,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessagesModel {
    pub term: String,
    pub filter: MessageFilter,
    /// Message open in the reading pane.
    pub selected: Option<String>,
    pub compose_open: bool,
    pub compose_to: String,
    pub compose_subject: String,
    pub compose_body: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessagesMsg {
    TermChanged(String),
    FilterChanged(MessageFilter),
    Selected(String),
    ComposeOpened,
    ComposeClosed,
    ComposeToChanged(String),
    ComposeSubjectChanged(String),
    ComposeBodyChanged(String),
    SendPressed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessagesEvent {
    /// A message was opened; the root flips its read flag.
    Opened { message_id: String },
    SendRequested {
        to: String,
        subject: String,
        body: String,
    },
}

pub fn update(model: &mut MessagesModel, msg: MessagesMsg) -> Option<MessagesEvent> {
    match msg {
        MessagesMsg::TermChanged(term) => {
            model.term = term;
            None
        }
        MessagesMsg::FilterChanged(filter) => {
            model.filter = filter;
            None
        }
        MessagesMsg::Selected(id) => {
            model.selected = Some(id.clone());
            Some(MessagesEvent::Opened { message_id: id })
        }
        MessagesMsg::ComposeOpened => {
            model.compose_open = true;
            None
        }
        MessagesMsg::ComposeClosed => {
            model.compose_open = false;
            None
        }
        MessagesMsg::ComposeToChanged(text) => {
            model.compose_to = text;
            None
        }
        MessagesMsg::ComposeSubjectChanged(text) => {
            model.compose_subject = text;
            None
        }
        MessagesMsg::ComposeBodyChanged(text) => {
            model.compose_body = text;
            None
        }
        MessagesMsg::SendPressed => send(model),
    }
}

fn send(model: &mut MessagesModel) -> Option<MessagesEvent> {
    let to = model.compose_to.trim().to_string();
    let subject = model.compose_subject.trim().to_string();
    let body = model.compose_body.trim().to_string();
    if to.is_empty() || subject.is_empty() || body.is_empty() {
        return None;
    }

    model.compose_open = false;
    model.compose_to.clear();
    model.compose_subject.clear();
    model.compose_body.clear();
    Some(MessagesEvent::SendRequested { to, subject, body })
}

/// The mailbox view derived from the current term and filter, newest first.
pub fn visible(model: &MessagesModel, messages: &[Message]) -> Vec<Message> {
    let filter = model.filter;
    ListQuery::new(|m: &Message| m.subject.as_str())
        .matching(|m: &Message| m.from.name.as_str())
        .matching(|m: &Message| m.to.name.as_str())
        .matching(|m: &Message| m.body.as_str())
        .term(model.term.clone())
        .category(move |m: &Message| filter.keeps(m))
        .order_by(|a, b| b.timestamp.cmp(&a.timestamp))
        .run(messages)
}

pub fn unread_count(messages: &[Message]) -> usize {
    messages
        .iter()
        .filter(|m| !m.read && m.direction == Direction::Received)
        .count()
}

pub fn view(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    model: &MessagesModel,
    messages: &[Message],
    now: DateTime<Utc>,
) -> Vec<MessagesMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        ui.heading("Messages");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(format!(
                    "{} Compose",
                    egui_phosphor::regular::PENCIL_SIMPLE
                ))
                .clicked()
            {
                msgs.push(MessagesMsg::ComposeOpened);
            }
        });
    });
    ui.add_space(8.0);

    render_controls(ui, model, messages, &mut msgs);
    ui.add_space(8.0);

    let shown = visible(model, messages);
    let selected = model
        .selected
        .as_ref()
        .and_then(|id| messages.iter().find(|m| &m.id == id));

    ui.columns(2, |cols| {
        render_list(&mut cols[0], model, &shown, now, &mut msgs);
        render_reading_pane(&mut cols[1], selected, now);
    });

    if model.compose_open {
        render_compose(ctx, model, &mut msgs);
    }

    msgs
}

fn render_controls(
    ui: &mut egui::Ui,
    model: &MessagesModel,
    messages: &[Message],
    msgs: &mut Vec<MessagesMsg>,
) {
    ui.horizontal(|ui| {
        let mut term = model.term.clone();
        if ui
            .add(
                egui::TextEdit::singleline(&mut term)
                    .hint_text(format!(
                        "{} Search messages...",
                        egui_phosphor::regular::MAGNIFYING_GLASS
                    ))
                    .desired_width(220.0),
            )
            .changed()
        {
            msgs.push(MessagesMsg::TermChanged(term));
        }

        for filter in MessageFilter::ALL {
            let label = if filter == MessageFilter::Unread {
                format!("{} ({})", filter.label(), unread_count(messages))
            } else {
                filter.label().to_string()
            };
            if ui.selectable_label(model.filter == filter, label).clicked() {
                msgs.push(MessagesMsg::FilterChanged(filter));
            }
        }
    });
}

fn render_list(
    ui: &mut egui::Ui,
    model: &MessagesModel,
    shown: &[Message],
    now: DateTime<Utc>,
    msgs: &mut Vec<MessagesMsg>,
) {
    egui::ScrollArea::vertical()
        .id_salt("message_list")
        .show(ui, |ui| {
            if shown.is_empty() {
                ui.label(
                    egui::RichText::new("No messages here.")
                        .italics()
                        .color(egui::Color32::from_gray(110)),
                );
                return;
            }
            for message in shown {
                let is_selected = model.selected.as_deref() == Some(&message.id);
                let unread = !message.read && message.direction == Direction::Received;
                let marker = if unread { "● " } else { "" };

                let response = ui.selectable_label(
                    is_selected,
                    format!(
                        "{marker}{}\n{}  ·  {}",
                        message.counterpart_name(),
                        message.subject,
                        format_relative(message.timestamp, now)
                    ),
                );
                if response.clicked() {
                    msgs.push(MessagesMsg::Selected(message.id.clone()));
                }
                ui.separator();
            }
        });
}

fn render_reading_pane(ui: &mut egui::Ui, selected: Option<&Message>, now: DateTime<Utc>) {
    let Some(message) = selected else {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("Select a message to read it.")
                    .italics()
                    .color(egui::Color32::from_gray(110)),
            );
        });
        return;
    };

    egui::ScrollArea::vertical()
        .id_salt("message_body")
        .show(ui, |ui| {
            ui.label(egui::RichText::new(&message.subject).strong().size(16.0));
            ui.label(
                egui::RichText::new(format!(
                    "From: {} <{}>",
                    message.from.name, message.from.email
                ))
                .small(),
            );
            ui.label(
                egui::RichText::new(format!("To: {} <{}>", message.to.name, message.to.email))
                    .small(),
            );
            ui.label(
                egui::RichText::new(format_relative(message.timestamp, now))
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );
            ui.separator();
            ui.label(&message.body);
        });
}

fn render_compose(ctx: &egui::Context, model: &MessagesModel, msgs: &mut Vec<MessagesMsg>) {
    egui::Window::new("New Message")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("To");
            let mut to = model.compose_to.clone();
            if ui.text_edit_singleline(&mut to).changed() {
                msgs.push(MessagesMsg::ComposeToChanged(to));
            }

            ui.label("Subject");
            let mut subject = model.compose_subject.clone();
            if ui.text_edit_singleline(&mut subject).changed() {
                msgs.push(MessagesMsg::ComposeSubjectChanged(subject));
            }

            ui.label("Message");
            let mut body = model.compose_body.clone();
            if ui
                .add(
                    egui::TextEdit::multiline(&mut body)
                        .desired_rows(5)
                        .desired_width(320.0),
                )
                .changed()
            {
                msgs.push(MessagesMsg::ComposeBodyChanged(body));
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let ready = !model.compose_to.trim().is_empty()
                    && !model.compose_subject.trim().is_empty()
                    && !model.compose_body.trim().is_empty();
                if ui.add_enabled(ready, egui::Button::new("Send")).clicked() {
                    msgs.push(MessagesMsg::SendPressed);
                }
                if ui.button("Cancel").clicked() {
                    msgs.push(MessagesMsg::ComposeClosed);
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::seed;
    use crate::models::user::{Role, User};
    use chrono::NaiveDate;

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

    fn mailbox() -> Vec<Message> {
        seed::messages(&user())
    }

    #[test]
    fn listing_is_newest_first() {
        let shown = visible(&MessagesModel::default(), &mailbox());
        let ids: Vec<&str> = shown.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["msg-1", "msg-2", "msg-3"]);
    }

    #[test]
    fn unread_filter_only_keeps_unread_received() {
        let model = MessagesModel {
            filter: MessageFilter::Unread,
            ..Default::default()
        };
        let shown = visible(&model, &mailbox());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "msg-1");
    }

    #[test]
    fn sent_filter_only_keeps_outgoing() {
        let model = MessagesModel {
            filter: MessageFilter::Sent,
            ..Default::default()
        };
        let shown = visible(&model, &mailbox());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].direction, Direction::Sent);
    }

    #[test]
    fn term_searches_subject_sender_and_body() {
        let model = MessagesModel {
            term: "transcript".into(),
            ..Default::default()
        };
        let shown = visible(&model, &mailbox());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "msg-2");
    }

    #[test]
    fn unread_count_ignores_sent_mail() {
        assert_eq!(unread_count(&mailbox()), 1);
    }

    #[test]
    fn selecting_surfaces_an_opened_event() {
        let mut model = MessagesModel::default();
        let event = update(&mut model, MessagesMsg::Selected("msg-1".into()));
        assert_eq!(
            event,
            Some(MessagesEvent::Opened {
                message_id: "msg-1".into()
            })
        );
        assert_eq!(model.selected.as_deref(), Some("msg-1"));
    }

    #[test]
    fn send_requires_all_fields() {
        let mut model = MessagesModel {
            compose_open: true,
            compose_to: "Harvard Admissions".into(),
            compose_subject: "   ".into(),
            compose_body: "Hello".into(),
            ..Default::default()
        };
        assert_eq!(update(&mut model, MessagesMsg::SendPressed), None);
        assert!(model.compose_open);
    }

    #[test]
    fn send_clears_and_closes_the_compose_window() {
        let mut model = MessagesModel {
            compose_open: true,
            compose_to: "Harvard Admissions".into(),
            compose_subject: "Question".into(),
            compose_body: "About my application.".into(),
            ..Default::default()
        };

        let event = update(&mut model, MessagesMsg::SendPressed);

        assert_eq!(
            event,
            Some(MessagesEvent::SendRequested {
                to: "Harvard Admissions".into(),
                subject: "Question".into(),
                body: "About my application.".into(),
            })
        );
        assert!(!model.compose_open);
        assert!(model.compose_to.is_empty());
        assert!(model.compose_body.is_empty());
    }
}
