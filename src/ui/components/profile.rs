// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Profile editor: four tabbed sections feeding the derived completion bar.

use eframe::egui;
use egui_extras::DatePickerButton;

use crate::models::profile::{
    Activity, Citizenship, EducationEntry, Essay, PersonalInfo, StudentProfile,
};
use crate::utils::new_id;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Personal,
    Education,
    Activities,
    Essays,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 4] = [
        ProfileTab::Personal,
        ProfileTab::Education,
        ProfileTab::Activities,
        ProfileTab::Essays,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Personal => "Personal Info",
            ProfileTab::Education => "Education",
            ProfileTab::Activities => "Activities",
            ProfileTab::Essays => "Essays",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileModel {
    pub profile: StudentProfile,
    pub tab: ProfileTab,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProfileMsg {
    TabSelected(ProfileTab),
    PersonalChanged(PersonalInfo),
    EducationAdded,
    EducationChanged(EducationEntry),
    EducationRemoved(String),
    ActivityAdded,
    ActivityChanged(Activity),
    ActivityRemoved(String),
    EssayAdded,
    EssayChanged(Essay),
    EssayRemoved(String),
}

pub fn update(model: &mut ProfileModel, msg: ProfileMsg) {
    let profile = &mut model.profile;
    match msg {
        ProfileMsg::TabSelected(tab) => model.tab = tab,
        ProfileMsg::PersonalChanged(personal) => profile.personal = personal,
        ProfileMsg::EducationAdded => profile.education.push(EducationEntry {
            id: new_id(),
            max_gpa: 4.0,
            ..Default::default()
        }),
        ProfileMsg::EducationChanged(entry) => {
            if let Some(slot) = profile.education.iter_mut().find(|e| e.id == entry.id) {
                *slot = entry;
            }
        }
        ProfileMsg::EducationRemoved(id) => profile.education.retain(|e| e.id != id),
        ProfileMsg::ActivityAdded => profile.activities.push(Activity {
            id: new_id(),
            ..Default::default()
        }),
        ProfileMsg::ActivityChanged(activity) => {
            if let Some(slot) = profile.activities.iter_mut().find(|a| a.id == activity.id) {
                *slot = activity;
            }
        }
        ProfileMsg::ActivityRemoved(id) => profile.activities.retain(|a| a.id != id),
        ProfileMsg::EssayAdded => profile.essays.push(Essay {
            id: new_id(),
            max_words: 650,
            ..Default::default()
        }),
        ProfileMsg::EssayChanged(essay) => {
            if let Some(slot) = profile.essays.iter_mut().find(|e| e.id == essay.id) {
                *slot = essay;
            }
        }
        ProfileMsg::EssayRemoved(id) => profile.essays.retain(|e| e.id != id),
    }
}

pub fn view(ui: &mut egui::Ui, model: &ProfileModel) -> Vec<ProfileMsg> {
    let mut msgs = Vec::new();
    let profile = &model.profile;

    ui.heading("My Profile");
    ui.add_space(4.0);
    ui.add(
        egui::ProgressBar::new(f32::from(profile.completion_percent()) / 100.0).text(format!(
            "Profile {}% complete",
            profile.completion_percent()
        )),
    );
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        for tab in ProfileTab::ALL {
            if ui.selectable_label(model.tab == tab, tab.label()).clicked() {
                msgs.push(ProfileMsg::TabSelected(tab));
            }
        }
    });
    ui.separator();
    ui.add_space(8.0);

    egui::ScrollArea::vertical().show(ui, |ui| match model.tab {
        ProfileTab::Personal => render_personal(ui, &profile.personal, &mut msgs),
        ProfileTab::Education => render_education(ui, &profile.education, &mut msgs),
        ProfileTab::Activities => render_activities(ui, &profile.activities, &mut msgs),
        ProfileTab::Essays => render_essays(ui, &profile.essays, &mut msgs),
    });

    msgs
}

fn render_personal(ui: &mut egui::Ui, personal: &PersonalInfo, msgs: &mut Vec<ProfileMsg>) {
    let mut edited = personal.clone();
    let mut changed = false;

    ui.columns(2, |cols| {
        cols[0].label("First Name");
        changed |= cols[0].text_edit_singleline(&mut edited.first_name).changed();
        cols[1].label("Last Name");
        changed |= cols[1].text_edit_singleline(&mut edited.last_name).changed();
    });

    ui.label("Email");
    changed |= ui.text_edit_singleline(&mut edited.email).changed();
    ui.label("Phone");
    changed |= ui.text_edit_singleline(&mut edited.phone).changed();
    ui.label("Address");
    changed |= ui.text_edit_singleline(&mut edited.address).changed();

    ui.label("Date of Birth");
    changed |= ui
        .add(DatePickerButton::new(&mut edited.date_of_birth).id_salt("profile_dob"))
        .changed();

    ui.label("Citizenship");
    egui::ComboBox::from_id_salt("profile_citizenship")
        .selected_text(edited.citizenship.label())
        .show_ui(ui, |ui| {
            for citizenship in Citizenship::ALL {
                if ui
                    .selectable_value(&mut edited.citizenship, citizenship, citizenship.label())
                    .clicked()
                {
                    changed = true;
                }
            }
        });

    if changed {
        msgs.push(ProfileMsg::PersonalChanged(edited));
    }
}

fn render_education(ui: &mut egui::Ui, education: &[EducationEntry], msgs: &mut Vec<ProfileMsg>) {
    for entry in education {
        let mut edited = entry.clone();
        let mut changed = false;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("School");
                changed |= ui.text_edit_singleline(&mut edited.school_name).changed();
                if ui
                    .button(egui_phosphor::regular::TRASH_SIMPLE)
                    .on_hover_text("Remove school")
                    .clicked()
                {
                    msgs.push(ProfileMsg::EducationRemoved(entry.id.clone()));
                }
            });
            ui.horizontal(|ui| {
                ui.label("Location");
                changed |= ui.text_edit_singleline(&mut edited.location).changed();
            });
            ui.horizontal(|ui| {
                ui.label("From");
                changed |= ui
                    .add(egui::TextEdit::singleline(&mut edited.start).hint_text("2021-08"))
                    .changed();
                ui.label("To");
                changed |= ui
                    .add(egui::TextEdit::singleline(&mut edited.end).hint_text("2025-06"))
                    .changed();
            });
            ui.horizontal(|ui| {
                ui.label("GPA");
                changed |= ui
                    .add(egui::DragValue::new(&mut edited.gpa).speed(0.01).range(0.0..=edited.max_gpa))
                    .changed();
                ui.label("out of");
                changed |= ui
                    .add(egui::DragValue::new(&mut edited.max_gpa).speed(0.1).range(1.0..=10.0))
                    .changed();
            });
        });
        ui.add_space(6.0);

        if changed {
            msgs.push(ProfileMsg::EducationChanged(edited));
        }
    }

    if ui
        .button(format!("{} Add school", egui_phosphor::regular::PLUS))
        .clicked()
    {
        msgs.push(ProfileMsg::EducationAdded);
    }
}

fn render_activities(ui: &mut egui::Ui, activities: &[Activity], msgs: &mut Vec<ProfileMsg>) {
    for activity in activities {
        let mut edited = activity.clone();
        let mut changed = false;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Activity");
                changed |= ui.text_edit_singleline(&mut edited.name).changed();
                if ui
                    .button(egui_phosphor::regular::TRASH_SIMPLE)
                    .on_hover_text("Remove activity")
                    .clicked()
                {
                    msgs.push(ProfileMsg::ActivityRemoved(activity.id.clone()));
                }
            });
            ui.horizontal(|ui| {
                ui.label("Role");
                changed |= ui.text_edit_singleline(&mut edited.role).changed();
                ui.label("Hours/week");
                changed |= ui
                    .add(egui::DragValue::new(&mut edited.hours_per_week).range(0..=80))
                    .changed();
            });
            ui.label("Description");
            changed |= ui
                .add(
                    egui::TextEdit::multiline(&mut edited.description)
                        .desired_rows(2)
                        .desired_width(f32::INFINITY),
                )
                .changed();

            ui.horizontal(|ui| {
                ui.label("From");
                changed |= ui
                    .add(egui::TextEdit::singleline(&mut edited.start).hint_text("2022-09"))
                    .changed();
                ui.label("To");
                let mut end = edited.end.clone().unwrap_or_default();
                if ui
                    .add(egui::TextEdit::singleline(&mut end).hint_text("leave empty if ongoing"))
                    .changed()
                {
                    edited.end = if end.trim().is_empty() { None } else { Some(end) };
                    changed = true;
                }
            });
        });
        ui.add_space(6.0);

        if changed {
            msgs.push(ProfileMsg::ActivityChanged(edited));
        }
    }

    if ui
        .button(format!("{} Add activity", egui_phosphor::regular::PLUS))
        .clicked()
    {
        msgs.push(ProfileMsg::ActivityAdded);
    }
}

fn render_essays(ui: &mut egui::Ui, essays: &[Essay], msgs: &mut Vec<ProfileMsg>) {
    for essay in essays {
        let mut edited = essay.clone();
        let mut changed = false;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Prompt");
                changed |= ui.text_edit_singleline(&mut edited.prompt).changed();
                if ui
                    .button(egui_phosphor::regular::TRASH_SIMPLE)
                    .on_hover_text("Remove essay")
                    .clicked()
                {
                    msgs.push(ProfileMsg::EssayRemoved(essay.id.clone()));
                }
            });
            changed |= ui
                .add(
                    egui::TextEdit::multiline(&mut edited.content)
                        .desired_rows(8)
                        .desired_width(f32::INFINITY),
                )
                .changed();

            let words = edited.word_count();
            ui.label(
                egui::RichText::new(format!("{words} / {} words", edited.max_words))
                    .small()
                    .color(if edited.over_limit() {
                        egui::Color32::from_rgb(190, 40, 40)
                    } else {
                        egui::Color32::from_gray(110)
                    }),
            );
        });
        ui.add_space(6.0);

        if changed {
            msgs.push(ProfileMsg::EssayChanged(edited));
        }
    }

    if ui
        .button(format!("{} Add essay", egui_phosphor::regular::PLUS))
        .clicked()
    {
        msgs.push(ProfileMsg::EssayAdded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::seed;

    #[test]
    fn adding_and_removing_education_entries() {
        let mut model = ProfileModel::default();

        update(&mut model, ProfileMsg::EducationAdded);
        assert_eq!(model.profile.education.len(), 1);
        assert_eq!(model.profile.education[0].max_gpa, 4.0);

        let id = model.profile.education[0].id.clone();
        update(&mut model, ProfileMsg::EducationRemoved(id));
        assert!(model.profile.education.is_empty());
    }

    #[test]
    fn editing_an_entry_replaces_it_by_id() {
        let mut model = ProfileModel {
            profile: seed::student_profile(),
            ..Default::default()
        };

        let mut entry = model.profile.education[0].clone();
        entry.gpa = 3.9;
        update(&mut model, ProfileMsg::EducationChanged(entry));

        assert_eq!(model.profile.education.len(), 1);
        assert_eq!(model.profile.education[0].gpa, 3.9);
    }

    #[test]
    fn stale_edit_for_removed_entry_is_dropped() {
        let mut model = ProfileModel::default();
        update(
            &mut model,
            ProfileMsg::ActivityChanged(Activity {
                id: "gone".into(),
                name: "Chess Club".into(),
                ..Default::default()
            }),
        );
        assert!(model.profile.activities.is_empty());
    }

    #[test]
    fn filling_the_essay_raises_completion() {
        let mut model = ProfileModel {
            profile: seed::student_profile(),
            ..Default::default()
        };
        // Seeded essay is empty: 3 of 4 sections done.
        assert_eq!(model.profile.completion_percent(), 75);

        let mut essay = model.profile.essays[0].clone();
        essay.content = "My story begins in a small town.".into();
        update(&mut model, ProfileMsg::EssayChanged(essay));

        assert_eq!(model.profile.completion_percent(), 100);
    }
}
