// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Top-level egui application shell: auth gate, sidebar navigation, top bar
//! with notification and mail badges, and the central view dispatch.

pub mod components;

use std::time::Duration;

use chrono::Utc;
use eframe::egui;

use crate::logic::session::SessionStore;
use crate::mvu::{self, AppModel, Command, Msg, View};
use crate::ui::components::{
    applications, auth, dashboard, messages, profile, universities,
};

/// Stateful egui application for the application tracker.
pub struct ApplyIqApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl Default for ApplyIqApp {
    fn default() -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().max(2))
            .unwrap_or(2);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                let sessions = SessionStore::open_default().unwrap_or_else(|_| {
                    SessionStore::new(std::env::temp_dir().join("applyiq-session.json"))
                });
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd, &sessions);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        let mut app = Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        };
        // Restore a persisted session before the first frame.
        app.dispatch(Command::LoadSession);
        app
    }
}

impl eframe::App for ApplyIqApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Process pending messages until exhausted.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }
        self.inbox = msgs;

        // Keep polling while workers are busy so their results land promptly.
        if self.model.pending_commands > 0 {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        if self.model.session.is_none() {
            egui::CentralPanel::default().show(ctx, |ui| {
                let auth_msgs = auth::view(ui, &self.model.auth);
                self.inbox.extend(auth_msgs.into_iter().map(Msg::Auth));
            });
            return;
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            self.render_top_bar(ui);
            ui.add_space(4.0);
        });

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                self.render_sidebar(ui);
            });

        self.render_error_modal(ctx);
        self.render_notifications(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            self.render_view(ui, ctx);
        });
    }
}

impl ApplyIqApp {
    fn dispatch(&mut self, cmd: Command) {
        if self.cmd_tx.send(cmd).is_ok() {
            self.model.pending_commands += 1;
        }
    }

    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(format!("{} ApplyIQ", egui_phosphor::regular::GRADUATION_CAP));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.separator();

                if ui
                    .button(format!("{} Sign out", egui_phosphor::regular::SIGN_OUT))
                    .clicked()
                {
                    self.inbox.push(Msg::LogoutRequested);
                }

                if let Some(user) = &self.model.session {
                    ui.label(
                        egui::RichText::new(user.role.label())
                            .small()
                            .color(egui::Color32::from_gray(110)),
                    );
                    ui.label(egui::RichText::new(user.full_name()).strong());
                    ui.separator();
                }

                let unread_mail = messages::unread_count(&self.model.messages);
                if ui
                    .button(badge(egui_phosphor::regular::ENVELOPE_SIMPLE, unread_mail))
                    .on_hover_text("Messages")
                    .clicked()
                {
                    self.inbox.push(Msg::Navigate(View::Messages));
                }

                let unread_bell = self.model.notifications.iter().filter(|n| !n.read).count();
                if ui
                    .button(badge(egui_phosphor::regular::BELL, unread_bell))
                    .on_hover_text("Notifications")
                    .clicked()
                {
                    self.inbox.push(Msg::ToggleNotifications);
                }
            });
        });
    }

    fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        let Some(role) = self.model.session.as_ref().map(|u| u.role) else {
            return;
        };

        ui.add_space(8.0);
        for view in View::menu(role) {
            let selected = self.model.view == *view;
            if ui
                .selectable_label(selected, format!("{} {}", view.icon(), view.label()))
                .clicked()
            {
                self.inbox.push(Msg::Navigate(*view));
            }
        }
    }

    fn render_view(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let now = Utc::now();
        match self.model.view {
            View::Dashboard => {
                if let Some(user) = &self.model.session {
                    let dash_msgs = dashboard::view(
                        ui,
                        user,
                        &self.model.applications,
                        &self.model.universities,
                        &self.model.notifications,
                        now,
                    );
                    self.inbox.extend(dash_msgs.into_iter().map(Msg::Dashboard));
                }
            }
            View::Universities => {
                let uni_msgs = universities::view(
                    ui,
                    &self.model.universities_view,
                    &self.model.universities,
                    &self.model.applications,
                    now,
                );
                self.inbox.extend(uni_msgs.into_iter().map(Msg::Universities));
            }
            View::Applications => {
                let app_msgs = applications::view(
                    ui,
                    &self.model.applications_view,
                    &self.model.applications,
                    &self.model.universities,
                    now,
                );
                self.inbox.extend(app_msgs.into_iter().map(Msg::Applications));
            }
            View::Messages => {
                let msg_msgs = messages::view(
                    ui,
                    ctx,
                    &self.model.messages_view,
                    &self.model.messages,
                    now,
                );
                self.inbox.extend(msg_msgs.into_iter().map(Msg::Messages));
            }
            View::Profile => {
                let profile_msgs = profile::view(ui, &self.model.profile);
                self.inbox.extend(profile_msgs.into_iter().map(Msg::Profile));
            }
            View::Documents | View::Deadlines => {
                ui.heading(self.model.view.label());
                ui.label(
                    egui::RichText::new("This section is coming soon.")
                        .italics()
                        .color(egui::Color32::from_gray(110)),
                );
            }
        }
    }

    fn render_notifications(&mut self, ctx: &egui::Context) {
        if !self.model.notifications_open {
            return;
        }

        let mut open = true;
        egui::Window::new("Notifications")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 48.0))
            .show(ctx, |ui| {
                let now = Utc::now();
                if self.model.notifications.is_empty() {
                    ui.label("You're all caught up.");
                    return;
                }
                for notification in &self.model.notifications {
                    let marker = if notification.read { "" } else { "● " };
                    let response = ui.selectable_label(
                        false,
                        format!(
                            "{marker}{} {}\n{} · {}",
                            notification.kind.icon(),
                            notification.title,
                            notification.body,
                            crate::logic::deadlines::format_relative(notification.timestamp, now)
                        ),
                    );
                    if response.clicked() {
                        self.inbox
                            .push(Msg::NotificationOpened(notification.id.clone()));
                    }
                    ui.separator();
                }
            });
        if !open {
            self.inbox.push(Msg::ToggleNotifications);
        }
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Something went wrong")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(110)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                        "{} task(s) running in background",
                        self.model.pending_commands
                    ));
                }
            });
        }
    }
}

/// Icon button label with an unread count suffix when non-zero.
fn badge(icon: &str, count: usize) -> String {
    if count > 0 {
        format!("{icon} {count}")
    } else {
        icon.to_string()
    }
}
