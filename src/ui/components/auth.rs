// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Sign-in / registration forms with per-field validation.

use eframe::egui;
use email_address::EmailAddress;

use crate::logic::auth::RegistrationForm;
use crate::models::user::Role;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// One slot per field, plus the generic banner shown on failed submits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthErrors {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub general: Option<String>,
}

impl AuthErrors {
    fn any(&self) -> bool {
        self.first_name.is_some()
            || self.last_name.is_some()
            || self.email.is_some()
            || self.password.is_some()
            || self.confirm_password.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthModel {
    pub mode: AuthMode,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub show_password: bool,
    pub errors: AuthErrors,
    /// True while a simulated network call is in flight.
    pub busy: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthMsg {
    ModeToggled,
    FirstNameChanged(String),
    LastNameChanged(String),
    RoleChanged(Role),
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    ShowPasswordToggled,
    SubmitPressed,
}

/// Emitted when a validated form is ready for the command worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    LoginSubmitted { email: String, password: String },
    RegisterSubmitted(RegistrationForm),
}

pub fn update(model: &mut AuthModel, msg: AuthMsg) -> Option<AuthEvent> {
    match msg {
        AuthMsg::ModeToggled => {
            model.mode = match model.mode {
                AuthMode::Login => AuthMode::Register,
                AuthMode::Register => AuthMode::Login,
            };
            model.errors = AuthErrors::default();
            model.password.clear();
            model.confirm_password.clear();
            None
        }
        AuthMsg::FirstNameChanged(text) => {
            model.first_name = text;
            model.errors.first_name = None;
            model.errors.general = None;
            None
        }
        AuthMsg::LastNameChanged(text) => {
            model.last_name = text;
            model.errors.last_name = None;
            model.errors.general = None;
            None
        }
        AuthMsg::RoleChanged(role) => {
            model.role = role;
            None
        }
        AuthMsg::EmailChanged(text) => {
            model.email = text;
            model.errors.email = None;
            model.errors.general = None;
            None
        }
        AuthMsg::PasswordChanged(text) => {
            model.password = text;
            model.errors.password = None;
            model.errors.general = None;
            None
        }
        AuthMsg::ConfirmPasswordChanged(text) => {
            model.confirm_password = text;
            model.errors.confirm_password = None;
            model.errors.general = None;
            None
        }
        AuthMsg::ShowPasswordToggled => {
            model.show_password = !model.show_password;
            None
        }
        AuthMsg::SubmitPressed => submit(model),
    }
}

fn submit(model: &mut AuthModel) -> Option<AuthEvent> {
    if model.busy || !validate(model) {
        return None;
    }
    model.busy = true;
    match model.mode {
        AuthMode::Login => Some(AuthEvent::LoginSubmitted {
            email: model.email.trim().to_string(),
            password: model.password.clone(),
        }),
        AuthMode::Register => Some(AuthEvent::RegisterSubmitted(RegistrationForm {
            first_name: model.first_name.trim().to_string(),
            last_name: model.last_name.trim().to_string(),
            email: model.email.trim().to_string(),
            password: model.password.clone(),
            role: model.role,
        })),
    }
}

/// Populate field errors; returns true when the form may be submitted.
fn validate(model: &mut AuthModel) -> bool {
    let mut errors = AuthErrors::default();

    let email = model.email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required".into());
    } else if !EmailAddress::is_valid(email) {
        errors.email = Some("Email is invalid".into());
    }

    if model.password.is_empty() {
        errors.password = Some("Password is required".into());
    } else if model.password.len() < 6 {
        errors.password = Some("Password must be at least 6 characters".into());
    }

    if model.mode == AuthMode::Register {
        if model.first_name.trim().is_empty() {
            errors.first_name = Some("First name is required".into());
        }
        if model.last_name.trim().is_empty() {
            errors.last_name = Some("Last name is required".into());
        }
        // Mismatch flags the confirmation field only.
        if model.password != model.confirm_password {
            errors.confirm_password = Some("Passwords do not match".into());
        }
    }

    let ok = !errors.any();
    model.errors = errors;
    ok
}

pub fn view(ui: &mut egui::Ui, model: &AuthModel) -> Vec<AuthMsg> {
    let mut msgs = Vec::new();

    ui.vertical_centered(|ui| {
        ui.set_max_width(380.0);
        ui.add_space(24.0);

        ui.heading(format!(
            "{} ApplyIQ",
            egui_phosphor::regular::GRADUATION_CAP
        ));
        ui.add_space(8.0);
        ui.label(match model.mode {
            AuthMode::Login => "Sign in to continue your college application journey",
            AuthMode::Register => "Start your college application journey today",
        });
        ui.add_space(16.0);

        if model.mode == AuthMode::Login {
            render_demo_credentials(ui);
            ui.add_space(12.0);
        }

        if model.mode == AuthMode::Register {
            render_name_fields(ui, model, &mut msgs);
            render_role_picker(ui, model, &mut msgs);
        }

        render_text_field(
            ui,
            "Email address",
            &model.email,
            model.errors.email.as_deref(),
            &mut msgs,
            AuthMsg::EmailChanged,
        );
        render_password_field(ui, model, &mut msgs);

        if model.mode == AuthMode::Register {
            let mut confirm = model.confirm_password.clone();
            ui.label("Confirm Password");
            if ui
                .add(egui::TextEdit::singleline(&mut confirm).password(true))
                .changed()
            {
                msgs.push(AuthMsg::ConfirmPasswordChanged(confirm));
            }
            render_field_error(ui, model.errors.confirm_password.as_deref());
            ui.add_space(8.0);
        }

        if let Some(general) = &model.errors.general {
            ui.colored_label(egui::Color32::from_rgb(190, 40, 40), general);
            ui.add_space(8.0);
        }

        let submit_label = if model.busy {
            "Please wait...".to_string()
        } else {
            match model.mode {
                AuthMode::Login => "Sign in".to_string(),
                AuthMode::Register => "Create account".to_string(),
            }
        };
        if ui
            .add_enabled(
                !model.busy,
                egui::Button::new(submit_label).min_size(egui::vec2(200.0, 32.0)),
            )
            .clicked()
        {
            msgs.push(AuthMsg::SubmitPressed);
        }

        ui.add_space(12.0);
        let toggle_label = match model.mode {
            AuthMode::Login => "Don't have an account? Sign up",
            AuthMode::Register => "Already have an account? Sign in",
        };
        if ui.link(toggle_label).clicked() {
            msgs.push(AuthMsg::ModeToggled);
        }
    });

    msgs
}

fn render_demo_credentials(ui: &mut egui::Ui) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(egui::RichText::new("Demo Credentials").strong());
        ui.label(
            egui::RichText::new(
                "Student: student@example.com / password123\n\
                 Recommender: recommender@example.com / password123\n\
                 Admin: admin@university.edu / password123",
            )
            .small()
            .color(egui::Color32::from_gray(110)),
        );
    });
}

fn render_name_fields(ui: &mut egui::Ui, model: &AuthModel, msgs: &mut Vec<AuthMsg>) {
    ui.columns(2, |cols| {
        let mut first = model.first_name.clone();
        cols[0].label("First Name");
        if cols[0].text_edit_singleline(&mut first).changed() {
            msgs.push(AuthMsg::FirstNameChanged(first));
        }
        render_field_error(&mut cols[0], model.errors.first_name.as_deref());

        let mut last = model.last_name.clone();
        cols[1].label("Last Name");
        if cols[1].text_edit_singleline(&mut last).changed() {
            msgs.push(AuthMsg::LastNameChanged(last));
        }
        render_field_error(&mut cols[1], model.errors.last_name.as_deref());
    });
    ui.add_space(8.0);
}

fn render_role_picker(ui: &mut egui::Ui, model: &AuthModel, msgs: &mut Vec<AuthMsg>) {
    ui.label("I am a...");
    egui::ComboBox::from_id_salt("auth_role")
        .selected_text(model.role.label())
        .show_ui(ui, |ui| {
            for role in [Role::Student, Role::Recommender, Role::Admin] {
                if ui
                    .selectable_label(model.role == role, role.label())
                    .clicked()
                {
                    msgs.push(AuthMsg::RoleChanged(role));
                }
            }
        });
    ui.add_space(8.0);
}

fn render_text_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &str,
    error: Option<&str>,
    msgs: &mut Vec<AuthMsg>,
    make: impl Fn(String) -> AuthMsg,
) {
    ui.label(label);
    let mut buffer = value.to_string();
    if ui.text_edit_singleline(&mut buffer).changed() {
        msgs.push(make(buffer));
    }
    render_field_error(ui, error);
    ui.add_space(8.0);
}

fn render_password_field(ui: &mut egui::Ui, model: &AuthModel, msgs: &mut Vec<AuthMsg>) {
    ui.label("Password");
    ui.horizontal(|ui| {
        let mut password = model.password.clone();
        if ui
            .add(egui::TextEdit::singleline(&mut password).password(!model.show_password))
            .changed()
        {
            msgs.push(AuthMsg::PasswordChanged(password));
        }
        let eye = if model.show_password {
            egui_phosphor::regular::EYE_SLASH
        } else {
            egui_phosphor::regular::EYE
        };
        if ui.button(eye).on_hover_text("Show/hide password").clicked() {
            msgs.push(AuthMsg::ShowPasswordToggled);
        }
    });
    render_field_error(ui, model.errors.password.as_deref());
    ui.add_space(8.0);
}

fn render_field_error(ui: &mut egui::Ui, error: Option<&str>) {
    if let Some(text) = error {
        ui.label(
            egui::RichText::new(text)
                .small()
                .color(egui::Color32::from_rgb(190, 40, 40)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_model() -> AuthModel {
        AuthModel {
            email: "student@example.com".into(),
            password: "password123".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_login_submit_emits_event_and_sets_busy() {
        let mut model = login_model();
        let event = update(&mut model, AuthMsg::SubmitPressed);

        assert_eq!(
            event,
            Some(AuthEvent::LoginSubmitted {
                email: "student@example.com".into(),
                password: "password123".into(),
            })
        );
        assert!(model.busy);
    }

    #[test]
    fn submit_is_ignored_while_busy() {
        let mut model = login_model();
        model.busy = true;
        assert_eq!(update(&mut model, AuthMsg::SubmitPressed), None);
    }

    #[test]
    fn invalid_email_blocks_submit() {
        let mut model = login_model();
        model.email = "not-an-email".into();

        assert_eq!(update(&mut model, AuthMsg::SubmitPressed), None);
        assert_eq!(model.errors.email.as_deref(), Some("Email is invalid"));
        assert!(!model.busy);
    }

    #[test]
    fn short_password_blocks_submit() {
        let mut model = login_model();
        model.password = "12345".into();

        assert_eq!(update(&mut model, AuthMsg::SubmitPressed), None);
        assert_eq!(
            model.errors.password.as_deref(),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn mismatched_confirmation_flags_only_the_confirmation_field() {
        let mut model = AuthModel {
            mode: AuthMode::Register,
            first_name: "John".into(),
            last_name: "Smith".into(),
            email: "john@example.com".into(),
            password: "password123".into(),
            confirm_password: "different".into(),
            ..Default::default()
        };

        assert_eq!(update(&mut model, AuthMsg::SubmitPressed), None);
        assert_eq!(
            model.errors.confirm_password.as_deref(),
            Some("Passwords do not match")
        );
        assert!(model.errors.password.is_none());
        assert!(model.errors.email.is_none());
        assert!(model.errors.first_name.is_none());
    }

    #[test]
    fn valid_registration_emits_form() {
        let mut model = AuthModel {
            mode: AuthMode::Register,
            first_name: "Amara".into(),
            last_name: "Moyo".into(),
            email: "amara@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            role: Role::Student,
            ..Default::default()
        };

        match update(&mut model, AuthMsg::SubmitPressed) {
            Some(AuthEvent::RegisterSubmitted(form)) => {
                assert_eq!(form.email, "amara@example.com");
                assert_eq!(form.role, Role::Student);
            }
            other => panic!("expected registration event, got {other:?}"),
        }
    }

    #[test]
    fn typing_clears_the_field_error() {
        let mut model = login_model();
        model.email = String::new();
        update(&mut model, AuthMsg::SubmitPressed);
        assert!(model.errors.email.is_some());

        update(&mut model, AuthMsg::EmailChanged("s".into()));
        assert!(model.errors.email.is_none());
    }

    #[test]
    fn mode_toggle_resets_passwords_and_errors() {
        let mut model = login_model();
        model.errors.general = Some("Invalid email or password".into());

        update(&mut model, AuthMsg::ModeToggled);

        assert_eq!(model.mode, AuthMode::Register);
        assert!(model.password.is_empty());
        assert!(model.confirm_password.is_empty());
        assert_eq!(model.errors, AuthErrors::default());
    }
}
