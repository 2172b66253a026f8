// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! University catalog browser: search, location filter, sortable columns.

use chrono::{DateTime, Utc};
use eframe::egui;

use crate::logic::deadlines::{self, Urgency};
use crate::logic::query::ListQuery;
use crate::models::application::Application;
use crate::models::university::University;

/// Sort key for the catalog listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UniversitySort {
    #[default]
    Name,
    Ranking,
    AcceptanceRate,
    Fee,
}

impl UniversitySort {
    pub const ALL: [UniversitySort; 4] = [
        UniversitySort::Name,
        UniversitySort::Ranking,
        UniversitySort::AcceptanceRate,
        UniversitySort::Fee,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UniversitySort::Name => "Name",
            UniversitySort::Ranking => "Ranking",
            UniversitySort::AcceptanceRate => "Acceptance Rate",
            UniversitySort::Fee => "Application Fee",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UniversitiesModel {
    pub term: String,
    /// Exact location filter; `None` means all locations.
    pub location: Option<String>,
    pub sort: UniversitySort,
    /// Catalog entry expanded to show requirements and deadlines.
    pub expanded: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UniversitiesMsg {
    TermChanged(String),
    LocationChanged(Option<String>),
    SortChanged(UniversitySort),
    ToggleExpanded(String),
    ApplyPressed(String),
}

/// Emitted when the student starts an application from the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UniversitiesEvent {
    ApplyRequested { university_id: String },
}

pub fn update(model: &mut UniversitiesModel, msg: UniversitiesMsg) -> Option<UniversitiesEvent> {
    match msg {
        UniversitiesMsg::TermChanged(term) => {
            model.term = term;
            None
        }
        UniversitiesMsg::LocationChanged(location) => {
            model.location = location;
            None
        }
        UniversitiesMsg::SortChanged(sort) => {
            model.sort = sort;
            None
        }
        UniversitiesMsg::ToggleExpanded(id) => {
            model.expanded = if model.expanded.as_deref() == Some(&id) {
                None
            } else {
                Some(id)
            };
            None
        }
        UniversitiesMsg::ApplyPressed(university_id) => {
            Some(UniversitiesEvent::ApplyRequested { university_id })
        }
    }
}

/// The catalog view derived from the current term, location, and sort key.
pub fn visible(model: &UniversitiesModel, catalog: &[University]) -> Vec<University> {
    let mut query = ListQuery::new(|u: &University| u.name.as_str())
        .matching(|u: &University| u.location.as_str())
        .matching(|u: &University| u.description.as_str())
        .term(model.term.clone());

    if let Some(location) = model.location.clone() {
        query = query.category(move |u: &University| u.location == location);
    }

    query = match model.sort {
        UniversitySort::Name => query,
        UniversitySort::Ranking => query.order_by(|a, b| a.rank_key().cmp(&b.rank_key())),
        UniversitySort::AcceptanceRate => {
            query.order_by(|a, b| a.acceptance_rate.total_cmp(&b.acceptance_rate))
        }
        UniversitySort::Fee => query.order_by(|a, b| a.application_fee.cmp(&b.application_fee)),
    };

    query.run(catalog)
}

/// Distinct locations for the filter dropdown, sorted.
pub fn locations(catalog: &[University]) -> Vec<String> {
    let mut locations: Vec<String> = catalog.iter().map(|u| u.location.clone()).collect();
    locations.sort();
    locations.dedup();
    locations
}

pub fn view(
    ui: &mut egui::Ui,
    model: &UniversitiesModel,
    catalog: &[University],
    applications: &[Application],
    now: DateTime<Utc>,
) -> Vec<UniversitiesMsg> {
    let mut msgs = Vec::new();

    ui.heading("Browse Universities");
    ui.add_space(8.0);

    render_controls(ui, model, catalog, &mut msgs);
    ui.add_space(4.0);

    let shown = visible(model, catalog);
    ui.label(
        egui::RichText::new(format!(
            "Showing {} of {} universities",
            shown.len(),
            catalog.len()
        ))
        .small()
        .color(egui::Color32::from_gray(110)),
    );
    ui.add_space(8.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        if shown.is_empty() {
            ui.label(
                egui::RichText::new("No universities match your search.")
                    .italics()
                    .color(egui::Color32::from_gray(110)),
            );
            return;
        }
        for university in &shown {
            render_card(ui, model, university, applications, now, &mut msgs);
            ui.add_space(6.0);
        }
    });

    msgs
}

fn render_controls(
    ui: &mut egui::Ui,
    model: &UniversitiesModel,
    catalog: &[University],
    msgs: &mut Vec<UniversitiesMsg>,
) {
    ui.horizontal(|ui| {
        let mut term = model.term.clone();
        let search = ui.add(
            egui::TextEdit::singleline(&mut term)
                .hint_text(format!(
                    "{} Search by name or location...",
                    egui_phosphor::regular::MAGNIFYING_GLASS
                ))
                .desired_width(260.0),
        );
        if search.changed() {
            msgs.push(UniversitiesMsg::TermChanged(term));
        }

        egui::ComboBox::from_id_salt("university_location")
            .selected_text(model.location.as_deref().unwrap_or("All locations"))
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(model.location.is_none(), "All locations")
                    .clicked()
                {
                    msgs.push(UniversitiesMsg::LocationChanged(None));
                }
                for location in locations(catalog) {
                    if ui
                        .selectable_label(model.location.as_deref() == Some(&location), &location)
                        .clicked()
                    {
                        msgs.push(UniversitiesMsg::LocationChanged(Some(location.clone())));
                    }
                }
            });

        egui::ComboBox::from_id_salt("university_sort")
            .selected_text(format!("Sort: {}", model.sort.label()))
            .show_ui(ui, |ui| {
                for sort in UniversitySort::ALL {
                    if ui.selectable_label(model.sort == sort, sort.label()).clicked() {
                        msgs.push(UniversitiesMsg::SortChanged(sort));
                    }
                }
            });
    });
}

fn render_card(
    ui: &mut egui::Ui,
    model: &UniversitiesModel,
    university: &University,
    applications: &[Application],
    now: DateTime<Utc>,
    msgs: &mut Vec<UniversitiesMsg>,
) {
    let already_applied = applications
        .iter()
        .any(|app| app.university_id == university.id);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&university.name).strong().size(16.0));
                    match university.ranking {
                        Some(rank) => ui.label(
                            egui::RichText::new(format!("#{rank}"))
                                .small()
                                .color(egui::Color32::from_rgb(180, 140, 20)),
                        ),
                        None => ui.label(
                            egui::RichText::new("Unranked")
                                .small()
                                .color(egui::Color32::from_gray(110)),
                        ),
                    };
                });
                ui.label(
                    egui::RichText::new(format!(
                        "{} {}",
                        egui_phosphor::regular::MAP_PIN,
                        university.location
                    ))
                    .small()
                    .color(egui::Color32::from_gray(110)),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if already_applied {
                    ui.add_enabled(false, egui::Button::new("Applied"));
                } else if ui.button("Apply").clicked() {
                    msgs.push(UniversitiesMsg::ApplyPressed(university.id.clone()));
                }
                if ui
                    .button(if model.expanded.as_deref() == Some(&university.id) {
                        "Less"
                    } else {
                        "Details"
                    })
                    .clicked()
                {
                    msgs.push(UniversitiesMsg::ToggleExpanded(university.id.clone()));
                }
            });
        });

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("Acceptance: {:.1}%", university.acceptance_rate))
                    .small(),
            );
            ui.separator();
            ui.label(egui::RichText::new(format!("Fee: ${}", university.application_fee)).small());
            ui.separator();

            let (round, date) = university.deadlines.next(now.date_naive());
            let days = deadlines::days_until(date, now);
            ui.label(
                egui::RichText::new(format!(
                    "{round}: {date} ({})",
                    deadlines::days_left_label(days)
                ))
                .small()
                .color(urgency_color(Urgency::for_days(days))),
            );
        });

        if model.expanded.as_deref() == Some(&university.id) {
            render_details(ui, university);
        }
    });
}

fn render_details(ui: &mut egui::Ui, university: &University) {
    ui.add_space(6.0);
    ui.label(&university.description);
    ui.add_space(6.0);

    ui.label(egui::RichText::new("Requirements").strong());
    for req in &university.requirements {
        let marker = if req.required {
            egui_phosphor::regular::ASTERISK
        } else {
            egui_phosphor::regular::CIRCLE
        };
        ui.label(format!("{marker} {}", req.description));
    }

    ui.add_space(6.0);
    ui.label(egui::RichText::new("Deadlines").strong());
    for (round, date) in university.deadlines.rounds() {
        ui.label(format!("{round}: {date}"));
    }
}

pub fn urgency_color(urgency: Urgency) -> egui::Color32 {
    match urgency {
        Urgency::Critical => egui::Color32::from_rgb(190, 40, 40),
        Urgency::Soon => egui::Color32::from_rgb(190, 130, 20),
        Urgency::Comfortable => egui::Color32::from_rgb(40, 140, 70),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::seed;

    fn names(list: &[University]) -> Vec<&str> {
        list.iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn default_listing_is_name_sorted() {
        let model = UniversitiesModel::default();
        let result = visible(&model, &seed::universities());
        assert_eq!(
            names(&result),
            [
                "Harvard University",
                "Massachusetts Institute of Technology",
                "Stanford University",
                "Zimbabwe Polytechnic",
            ]
        );
    }

    #[test]
    fn term_matches_location_too() {
        let model = UniversitiesModel {
            term: "cambridge".into(),
            ..Default::default()
        };
        let result = visible(&model, &seed::universities());
        assert_eq!(
            names(&result),
            ["Harvard University", "Massachusetts Institute of Technology"]
        );
    }

    #[test]
    fn location_filter_composes_with_term() {
        let model = UniversitiesModel {
            term: "university".into(),
            location: Some("Cambridge, MA".into()),
            ..Default::default()
        };
        let result = visible(&model, &seed::universities());
        assert_eq!(names(&result), ["Harvard University"]);
    }

    #[test]
    fn ranking_sort_puts_unranked_last() {
        let model = UniversitiesModel {
            sort: UniversitySort::Ranking,
            ..Default::default()
        };
        let result = visible(&model, &seed::universities());
        assert_eq!(result.last().map(|u| u.id.as_str()), Some("polytech"));
        let ranks: Vec<u32> = result.iter().map(University::rank_key).collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn fee_sort_is_non_decreasing() {
        let model = UniversitiesModel {
            sort: UniversitySort::Fee,
            ..Default::default()
        };
        let result = visible(&model, &seed::universities());
        let fees: Vec<u32> = result.iter().map(|u| u.application_fee).collect();
        assert!(fees.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn locations_are_sorted_and_distinct() {
        let locations = locations(&seed::universities());
        assert_eq!(locations, ["Cambridge, MA", "Harare", "Stanford, CA"]);
    }

    #[test]
    fn apply_press_surfaces_event() {
        let mut model = UniversitiesModel::default();
        let event = update(&mut model, UniversitiesMsg::ApplyPressed("1".into()));
        assert_eq!(
            event,
            Some(UniversitiesEvent::ApplyRequested {
                university_id: "1".into()
            })
        );
    }

    #[test]
    fn expanding_twice_collapses() {
        let mut model = UniversitiesModel::default();
        update(&mut model, UniversitiesMsg::ToggleExpanded("1".into()));
        assert_eq!(model.expanded.as_deref(), Some("1"));
        update(&mut model, UniversitiesMsg::ToggleExpanded("1".into()));
        assert_eq!(model.expanded, None);
    }
}
