// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Student dashboard: stat cards, upcoming deadlines, recent activity, and
//! quick actions. Everything shown here is derived from live data on each
//! frame; nothing is cached.

use chrono::{DateTime, NaiveDate, Utc};
use eframe::egui;

use crate::logic::deadlines::{self, Urgency, format_relative};
use crate::models::application::{Application, ApplicationStatus};
use crate::models::notification::Notification;
use crate::models::university::University;
use crate::models::user::User;

use super::universities::urgency_color;

/// Deadlines within this window count toward the stat card.
const DEADLINE_WINDOW_DAYS: i64 = 30;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub started: usize,
    pub submitted: usize,
    pub pending_documents: usize,
    pub upcoming_deadlines: usize,
}

/// One row in the upcoming-deadlines panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpcomingDeadline {
    pub university_name: String,
    pub round: &'static str,
    pub date: NaiveDate,
    pub days_left: i64,
}

/// Quick-action shortcuts; the root maps these onto navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAction {
    BrowseUniversities,
    ViewApplications,
    CheckMessages,
    EditProfile,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardMsg {
    Go(QuickAction),
}

pub fn stats(
    applications: &[Application],
    catalog: &[University],
    now: DateTime<Utc>,
) -> DashboardStats {
    DashboardStats {
        started: applications.len(),
        submitted: applications
            .iter()
            .filter(|app| app.status != ApplicationStatus::Draft)
            .count(),
        pending_documents: applications
            .iter()
            .map(|app| app.missing_documents().len())
            .sum(),
        upcoming_deadlines: upcoming_deadlines(applications, catalog, now)
            .iter()
            .filter(|d| d.days_left <= DEADLINE_WINDOW_DAYS)
            .count(),
    }
}

/// The next deadline of every application still awaiting a decision,
/// soonest first.
pub fn upcoming_deadlines(
    applications: &[Application],
    catalog: &[University],
    now: DateTime<Utc>,
) -> Vec<UpcomingDeadline> {
    let today = now.date_naive();
    let mut rows: Vec<UpcomingDeadline> = applications
        .iter()
        .filter(|app| !app.status.is_decided())
        .filter_map(|app| {
            let university = catalog.iter().find(|u| u.id == app.university_id)?;
            let (round, date) = university.deadlines.next(today);
            Some(UpcomingDeadline {
                university_name: university.name.clone(),
                round,
                date,
                days_left: deadlines::days_until(date, now),
            })
        })
        .collect();
    rows.sort_by_key(|row| row.date);
    rows
}

pub fn view(
    ui: &mut egui::Ui,
    user: &User,
    applications: &[Application],
    catalog: &[University],
    notifications: &[Notification],
    now: DateTime<Utc>,
) -> Vec<DashboardMsg> {
    let mut msgs = Vec::new();

    ui.heading(format!("Welcome back, {}!", user.first_name));
    ui.label(
        egui::RichText::new("Here's what's happening with your applications.")
            .color(egui::Color32::from_gray(110)),
    );
    ui.add_space(12.0);

    render_stats(ui, stats(applications, catalog, now));
    ui.add_space(12.0);

    ui.columns(2, |cols| {
        render_deadlines(&mut cols[0], applications, catalog, now);
        render_activity(&mut cols[1], notifications, now);
    });

    ui.add_space(12.0);
    render_quick_actions(ui, &mut msgs);

    msgs
}

fn render_stats(ui: &mut egui::Ui, stats: DashboardStats) {
    let cards = [
        (
            egui_phosphor::regular::FILE_TEXT,
            "Applications Started",
            stats.started,
        ),
        (
            egui_phosphor::regular::PAPER_PLANE_TILT,
            "Applications Submitted",
            stats.submitted,
        ),
        (
            egui_phosphor::regular::UPLOAD_SIMPLE,
            "Documents Pending",
            stats.pending_documents,
        ),
        (
            egui_phosphor::regular::CLOCK,
            "Deadlines This Month",
            stats.upcoming_deadlines,
        ),
    ];

    ui.columns(cards.len(), |cols| {
        for (col, (icon, label, value)) in cols.iter_mut().zip(cards) {
            egui::Frame::group(col.style()).show(col, |ui| {
                ui.label(egui::RichText::new(format!("{icon} {value}")).size(22.0).strong());
                ui.label(egui::RichText::new(label).small());
            });
        }
    });
}

fn render_deadlines(
    ui: &mut egui::Ui,
    applications: &[Application],
    catalog: &[University],
    now: DateTime<Utc>,
) {
    ui.label(egui::RichText::new("Upcoming Deadlines").strong());
    ui.add_space(4.0);

    let rows = upcoming_deadlines(applications, catalog, now);
    if rows.is_empty() {
        ui.label(
            egui::RichText::new("No upcoming deadlines.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return;
    }
    for row in rows {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&row.university_name).strong());
                    ui.label(
                        egui::RichText::new(format!("{} · {}", row.round, row.date)).small(),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(deadlines::days_left_label(row.days_left))
                            .color(urgency_color(Urgency::for_days(row.days_left))),
                    );
                });
            });
        });
        ui.add_space(4.0);
    }
}

fn render_activity(ui: &mut egui::Ui, notifications: &[Notification], now: DateTime<Utc>) {
    ui.label(egui::RichText::new("Recent Activity").strong());
    ui.add_space(4.0);

    if notifications.is_empty() {
        ui.label(
            egui::RichText::new("Nothing has happened yet.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return;
    }

    let mut recent: Vec<&Notification> = notifications.iter().collect();
    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    for notification in recent {
        ui.horizontal(|ui| {
            ui.label(notification.kind.icon());
            ui.vertical(|ui| {
                ui.label(&notification.title);
                ui.label(
                    egui::RichText::new(format!(
                        "{} · {}",
                        notification.body,
                        format_relative(notification.timestamp, now)
                    ))
                    .small()
                    .color(egui::Color32::from_gray(110)),
                );
            });
        });
        ui.add_space(4.0);
    }
}

fn render_quick_actions(ui: &mut egui::Ui, msgs: &mut Vec<DashboardMsg>) {
    ui.label(egui::RichText::new("Quick Actions").strong());
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let actions = [
            (
                egui_phosphor::regular::MAGNIFYING_GLASS,
                "Browse Universities",
                QuickAction::BrowseUniversities,
            ),
            (
                egui_phosphor::regular::FILE_TEXT,
                "My Applications",
                QuickAction::ViewApplications,
            ),
            (
                egui_phosphor::regular::CHAT_CIRCLE,
                "Check Messages",
                QuickAction::CheckMessages,
            ),
            (
                egui_phosphor::regular::USER,
                "Edit Profile",
                QuickAction::EditProfile,
            ),
        ];
        for (icon, label, action) in actions {
            if ui.button(format!("{icon} {label}")).clicked() {
                msgs.push(DashboardMsg::Go(action));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::seed;

    fn now() -> DateTime<Utc> {
        "2024-10-20T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn stats_reflect_seeded_applications() {
        let stats = stats(&seed::applications("1"), &seed::universities(), now());

        assert_eq!(stats.started, 3);
        // Harvard submitted, MIT under review.
        assert_eq!(stats.submitted, 2);
        // Stanford draft is missing recommendation and essay.
        assert_eq!(stats.pending_documents, 2);
        // All three next deadlines fall on Nov 1, within the window.
        assert_eq!(stats.upcoming_deadlines, 3);
    }

    #[test]
    fn deadlines_are_soonest_first_and_skip_decided() {
        let mut apps = seed::applications("1");
        apps[2].status = ApplicationStatus::Accepted;

        let rows = upcoming_deadlines(&apps, &seed::universities(), now());

        assert_eq!(rows.len(), 2);
        assert!(rows.windows(2).all(|w| w[0].date <= w[1].date));
        assert!(rows.iter().all(|r| r.university_name != "Massachusetts Institute of Technology"));
    }

    #[test]
    fn empty_state_has_zeroed_stats() {
        let stats = stats(&[], &seed::universities(), now());
        assert_eq!(stats, DashboardStats::default());
    }
}
