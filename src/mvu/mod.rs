// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use std::thread;
use std::time::Duration;

use chrono::Utc;

use crate::logic::auth::{self, RegistrationForm};
use crate::logic::seed;
use crate::logic::session::SessionStore;
use crate::models::application::{Application, ApplicationStatus};
use crate::models::message::{Contact, Direction, Message};
use crate::models::notification::Notification;
use crate::models::university::University;
use crate::models::user::{Role, User};
use crate::ui::components::applications::{self, ApplicationsEvent, ApplicationsModel, ApplicationsMsg};
use crate::ui::components::auth::{self as auth_view, AuthEvent, AuthModel, AuthMsg};
use crate::ui::components::dashboard::{DashboardMsg, QuickAction};
use crate::ui::components::messages::{self as messages_view, MessagesEvent, MessagesModel, MessagesMsg};
use crate::ui::components::profile::{self, ProfileModel, ProfileMsg};
use crate::ui::components::universities::{self, UniversitiesEvent, UniversitiesModel, UniversitiesMsg};

/// Simulated network latency for the mock auth backend.
const AUTH_LATENCY: Duration = Duration::from_millis(1000);

/// Top-level screens reachable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Dashboard,
    Universities,
    Applications,
    Messages,
    Profile,
    Documents,
    Deadlines,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Universities => "Universities",
            View::Applications => "Applications",
            View::Messages => "Messages",
            View::Profile => "Profile",
            View::Documents => "Documents",
            View::Deadlines => "Deadlines",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            View::Dashboard => egui_phosphor::regular::SQUARES_FOUR,
            View::Universities => egui_phosphor::regular::BUILDINGS,
            View::Applications => egui_phosphor::regular::FILE_TEXT,
            View::Messages => egui_phosphor::regular::CHAT_CIRCLE,
            View::Profile => egui_phosphor::regular::USER,
            View::Documents => egui_phosphor::regular::FOLDER_OPEN,
            View::Deadlines => egui_phosphor::regular::CLOCK,
        }
    }

    /// Sidebar entries for a role.
    pub fn menu(role: Role) -> &'static [View] {
        match role {
            Role::Student => &[
                View::Dashboard,
                View::Universities,
                View::Applications,
                View::Messages,
                View::Profile,
                View::Documents,
                View::Deadlines,
            ],
            Role::Recommender => &[View::Dashboard, View::Messages],
            Role::Admin => &[View::Dashboard, View::Applications, View::Messages],
        }
    }
}

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Signed-in user; `None` shows the auth gate.
    pub session: Option<User>,
    pub view: View,
    pub universities: Vec<University>,
    pub applications: Vec<Application>,
    pub messages: Vec<Message>,
    pub notifications: Vec<Notification>,
    pub auth: AuthModel,
    pub profile: ProfileModel,
    pub universities_view: UniversitiesModel,
    pub applications_view: ApplicationsModel,
    pub messages_view: MessagesModel,
    pub notifications_open: bool,
    /// Latest status message for the status bar.
    pub status: Option<String>,
    /// Latest error message to display in the error banner.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
pub enum Msg {
    Navigate(View),
    ToggleNotifications,
    NotificationOpened(String),
    DismissError,
    LogoutRequested,
    SessionLoaded(Option<User>),
    /// Result of writing (or clearing) the session file.
    SessionWritten(Result<(), String>),
    LoginCompleted(Result<User, String>),
    RegisterCompleted(Result<User, String>),
    DocumentPicked {
        application_id: String,
        name: String,
        picked: Option<String>,
    },
    Auth(AuthMsg),
    Dashboard(DashboardMsg),
    Universities(UniversitiesMsg),
    Applications(ApplicationsMsg),
    Messages(MessagesMsg),
    Profile(ProfileMsg),
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    LoadSession,
    SaveSession(User),
    ClearSession,
    Login { email: String, password: String },
    Register(RegistrationForm),
    PickDocument { application_id: String, name: String },
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Navigate(view) => model.view = view,
        Msg::ToggleNotifications => model.notifications_open = !model.notifications_open,
        Msg::NotificationOpened(id) => {
            if let Some(notification) = model.notifications.iter_mut().find(|n| n.id == id) {
                notification.mark_read();
            }
        }
        Msg::DismissError => model.error = None,
        Msg::LogoutRequested => {
            *model = AppModel::default();
            cmds.push(Command::ClearSession);
            model.status = Some("Signed out.".into());
        }
        Msg::SessionLoaded(Some(user)) => {
            sign_in(model, user);
            model.status = Some("Session restored.".into());
        }
        Msg::SessionLoaded(None) => {}
        Msg::SessionWritten(Ok(())) => {}
        Msg::SessionWritten(Err(err)) => {
            surface_event(model, format!("Could not write session file: {err}"), true);
        }
        Msg::LoginCompleted(result) => match result {
            Ok(user) => {
                cmds.push(Command::SaveSession(user.clone()));
                let name = user.first_name.clone();
                sign_in(model, user);
                model.status = Some(format!("Welcome back, {name}!"));
            }
            Err(err) => {
                model.auth.busy = false;
                model.auth.errors.general = Some(err);
            }
        },
        Msg::RegisterCompleted(result) => match result {
            Ok(user) => {
                cmds.push(Command::SaveSession(user.clone()));
                let name = user.first_name.clone();
                sign_in(model, user);
                model.status = Some(format!("Welcome to ApplyIQ, {name}!"));
            }
            Err(err) => {
                model.auth.busy = false;
                model.auth.errors.general = Some(err);
            }
        },
        Msg::DocumentPicked {
            application_id,
            name,
            picked,
        } => match picked {
            Some(file) => {
                if let Some(app) = model.applications.iter_mut().find(|a| a.id == application_id) {
                    app.add_document(&name);
                    model.status = Some(format!("Attached {file} as {name}."));
                }
            }
            None => model.status = Some("Upload cancelled.".into()),
        },
        Msg::Auth(m) => {
            if let Some(event) = auth_view::update(&mut model.auth, m) {
                match event {
                    AuthEvent::LoginSubmitted { email, password } => {
                        cmds.push(Command::Login { email, password });
                    }
                    AuthEvent::RegisterSubmitted(form) => cmds.push(Command::Register(form)),
                }
            }
        }
        Msg::Dashboard(DashboardMsg::Go(action)) => {
            model.view = match action {
                QuickAction::BrowseUniversities => View::Universities,
                QuickAction::ViewApplications => View::Applications,
                QuickAction::CheckMessages => View::Messages,
                QuickAction::EditProfile => View::Profile,
            };
        }
        Msg::Universities(m) => {
            if let Some(UniversitiesEvent::ApplyRequested { university_id }) =
                universities::update(&mut model.universities_view, m)
            {
                start_application(model, &university_id);
            }
        }
        Msg::Applications(m) => {
            if let Some(event) = applications::update(&mut model.applications_view, m) {
                handle_applications_event(model, event, cmds);
            }
        }
        Msg::Messages(m) => {
            if let Some(event) = messages_view::update(&mut model.messages_view, m) {
                handle_messages_event(model, event);
            }
        }
        Msg::Profile(m) => profile::update(&mut model.profile, m),
    }
}

/// Hydrate the workspace for a signed-in user. Everything except the session
/// itself is in-memory seed data.
fn sign_in(model: &mut AppModel, user: User) {
    model.universities = seed::universities();
    model.applications = seed::applications(&user.id);
    model.messages = seed::messages(&user);
    model.notifications = seed::notifications(&user.id);
    model.profile = ProfileModel {
        profile: if user.role == Role::Student {
            seed::student_profile()
        } else {
            Default::default()
        },
        ..Default::default()
    };
    model.auth = AuthModel::default();
    model.view = View::Dashboard;
    model.session = Some(user);
}

fn start_application(model: &mut AppModel, university_id: &str) {
    let Some(user) = &model.session else { return };

    if model
        .applications
        .iter()
        .any(|app| app.university_id == university_id)
    {
        surface_event(
            model,
            "You already have an application for this university.".into(),
            true,
        );
        return;
    }
    let Some(university) = model.universities.iter().find(|u| u.id == university_id) else {
        return;
    };

    let required = university
        .required_requirements()
        .map(|req| req.kind.clone())
        .collect();
    let application = Application::draft(
        crate::utils::new_id(),
        user.id.clone(),
        university.id.to_string(),
        required,
    );

    model.status = Some(format!("Started an application to {}.", university.name));
    model.applications_view.selected = Some(application.id.clone());
    model.applications.push(application);
    model.view = View::Applications;
}

fn handle_applications_event(model: &mut AppModel, event: ApplicationsEvent, cmds: &mut Vec<Command>) {
    match event {
        ApplicationsEvent::SubmitRequested { application_id } => {
            submit_application(model, &application_id);
        }
        ApplicationsEvent::DocumentPickRequested {
            application_id,
            name,
        } => cmds.push(Command::PickDocument {
            application_id,
            name,
        }),
        ApplicationsEvent::DocumentRemoved {
            application_id,
            name,
        } => {
            if let Some(app) = model.applications.iter_mut().find(|a| a.id == application_id) {
                app.remove_document(&name);
            }
        }
        ApplicationsEvent::AnswerEdited {
            application_id,
            question_id,
            text,
        } => {
            if let Some(app) = model.applications.iter_mut().find(|a| a.id == application_id) {
                app.supplemental_answers.insert(question_id, text);
            }
        }
    }
}

fn submit_application(model: &mut AppModel, application_id: &str) {
    let Some(index) = model.applications.iter().position(|a| a.id == application_id) else {
        return;
    };
    let university_name = model
        .universities
        .iter()
        .find(|u| u.id == model.applications[index].university_id)
        .map(|u| u.name.clone());
    let questions = model
        .universities
        .iter()
        .find(|u| u.id == model.applications[index].university_id)
        .map(|u| u.supplemental_questions.clone())
        .unwrap_or_default();

    if model.applications[index].completion_percent(&questions) < 100 {
        surface_event(
            model,
            "Complete all requirements before submitting.".into(),
            true,
        );
        return;
    }
    match model.applications[index].transition(ApplicationStatus::Submitted, Utc::now().date_naive())
    {
        Ok(()) => {
            model.status = Some(format!(
                "Application submitted to {}!",
                university_name.unwrap_or_else(|| "the university".into())
            ));
        }
        Err(err) => surface_event(model, err.to_string(), true),
    }
}

fn handle_messages_event(model: &mut AppModel, event: MessagesEvent) {
    match event {
        MessagesEvent::Opened { message_id } => {
            if let Some(message) = model.messages.iter_mut().find(|m| m.id == message_id) {
                if message.direction == Direction::Received {
                    message.mark_read();
                }
            }
        }
        MessagesEvent::SendRequested { to, subject, body } => {
            let Some(user) = &model.session else { return };
            let message = Message {
                id: crate::utils::new_id(),
                from: Contact::new(user.full_name(), user.email.clone(), user.role.label()),
                to: Contact::new(to, "", "University"),
                subject,
                body,
                timestamp: Utc::now(),
                read: true,
                direction: Direction::Sent,
            };
            model.messages.insert(0, message);
            model.status = Some("Message sent.".into());
        }
    }
}

/// Execute a command on a worker thread and return the resulting message.
pub fn run_command(cmd: Command, sessions: &SessionStore) -> Msg {
    match cmd {
        Command::LoadSession => Msg::SessionLoaded(sessions.load().ok().flatten()),
        Command::SaveSession(user) => {
            Msg::SessionWritten(sessions.save(&user).map_err(|e| e.to_string()))
        }
        Command::ClearSession => Msg::SessionWritten(sessions.clear().map_err(|e| e.to_string())),
        Command::Login { email, password } => {
            thread::sleep(AUTH_LATENCY);
            Msg::LoginCompleted(auth::authenticate(&email, &password).map_err(|e| e.to_string()))
        }
        Command::Register(form) => {
            thread::sleep(AUTH_LATENCY);
            Msg::RegisterCompleted(
                auth::register(&form, Utc::now().date_naive()).map_err(|e| e.to_string()),
            )
        }
        Command::PickDocument {
            application_id,
            name,
        } => {
            let picked = rfd::FileDialog::new()
                .set_title(format!("Select file for {name}"))
                .pick_file();
            Msg::DocumentPicked {
                application_id,
                name,
                picked: picked.map(|p| {
                    p.file_name()
                        .map(|f| f.to_string_lossy().into_owned())
                        .unwrap_or_else(|| p.display().to_string())
                }),
            }
        }
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::auth::LOGIN_FAILED;
    use tempfile::TempDir;

    fn demo_user() -> User {
        auth::directory().remove(0)
    }

    fn signed_in_model() -> AppModel {
        let mut model = AppModel::default();
        sign_in(&mut model, demo_user());
        model
    }

    #[test]
    fn auth_submit_enqueues_login_command() {
        let mut model = AppModel::default();
        model.auth.email = "student@example.com".into();
        model.auth.password = "password123".into();

        let mut cmds = Vec::new();
        update(&mut model, Msg::Auth(AuthMsg::SubmitPressed), &mut cmds);

        assert_eq!(cmds.len(), 1);
        assert!(matches!(cmds[0], Command::Login { .. }));
        assert!(model.auth.busy);
    }

    #[test]
    fn completed_login_hydrates_and_persists_the_session() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(&mut model, Msg::LoginCompleted(Ok(demo_user())), &mut cmds);

        assert!(model.session.is_some());
        assert_eq!(model.view, View::Dashboard);
        assert!(!model.universities.is_empty());
        assert!(!model.applications.is_empty());
        assert!(matches!(cmds.as_slice(), [Command::SaveSession(_)]));
    }

    #[test]
    fn failed_login_surfaces_generic_error() {
        let mut model = AppModel::default();
        model.auth.busy = true;
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::LoginCompleted(Err(LOGIN_FAILED.into())),
            &mut cmds,
        );

        assert!(model.session.is_none());
        assert!(!model.auth.busy);
        assert_eq!(model.auth.errors.general.as_deref(), Some(LOGIN_FAILED));
        assert!(cmds.is_empty());
    }

    #[test]
    fn logout_resets_state_and_clears_the_session_file() {
        let mut model = signed_in_model();
        let mut cmds = Vec::new();

        update(&mut model, Msg::LogoutRequested, &mut cmds);

        assert!(model.session.is_none());
        assert!(model.applications.is_empty());
        assert!(matches!(cmds.as_slice(), [Command::ClearSession]));
    }

    #[test]
    fn applying_creates_a_draft_with_required_documents() {
        let mut model = signed_in_model();
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::Universities(UniversitiesMsg::ApplyPressed("polytech".into())),
            &mut cmds,
        );

        assert_eq!(model.view, View::Applications);
        let draft = model
            .applications
            .iter()
            .find(|a| a.university_id == "polytech")
            .expect("draft created");
        assert_eq!(draft.status, ApplicationStatus::Draft);
        assert_eq!(
            draft.required_documents,
            vec!["high-school-transcript", "recommendation-letter"]
        );
        assert_eq!(model.applications_view.selected.as_deref(), Some(draft.id.as_str()));
    }

    #[test]
    fn applying_twice_is_rejected() {
        let mut model = signed_in_model();
        let before = model.applications.len();
        let mut cmds = Vec::new();

        // University "1" already has a seeded application.
        update(
            &mut model,
            Msg::Universities(UniversitiesMsg::ApplyPressed("1".into())),
            &mut cmds,
        );

        assert_eq!(model.applications.len(), before);
        assert!(model.error.is_some());
    }

    #[test]
    fn submitting_an_incomplete_draft_is_rejected() {
        let mut model = signed_in_model();
        let mut cmds = Vec::new();

        // Seeded Stanford draft is far from complete.
        update(
            &mut model,
            Msg::Applications(ApplicationsMsg::SubmitPressed("app-2".into())),
            &mut cmds,
        );

        let draft = model.applications.iter().find(|a| a.id == "app-2").unwrap();
        assert_eq!(draft.status, ApplicationStatus::Draft);
        assert!(model.error.is_some());
    }

    #[test]
    fn submitting_a_complete_draft_records_the_date() {
        let mut model = signed_in_model();
        let mut cmds = Vec::new();

        // Start a fresh draft and provide both required documents.
        update(
            &mut model,
            Msg::Universities(UniversitiesMsg::ApplyPressed("polytech".into())),
            &mut cmds,
        );
        let id = model
            .applications
            .iter()
            .find(|a| a.university_id == "polytech")
            .unwrap()
            .id
            .clone();
        for name in ["high-school-transcript", "recommendation-letter"] {
            update(
                &mut model,
                Msg::DocumentPicked {
                    application_id: id.clone(),
                    name: name.into(),
                    picked: Some("scan.pdf".into()),
                },
                &mut cmds,
            );
        }

        update(
            &mut model,
            Msg::Applications(ApplicationsMsg::SubmitPressed(id.clone())),
            &mut cmds,
        );

        let app = model.applications.iter().find(|a| a.id == id).unwrap();
        assert_eq!(app.status, ApplicationStatus::Submitted);
        assert!(app.submitted_at.is_some());
    }

    #[test]
    fn opening_a_received_message_marks_it_read() {
        let mut model = signed_in_model();
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::Messages(MessagesMsg::Selected("msg-1".into())),
            &mut cmds,
        );

        let opened = model.messages.iter().find(|m| m.id == "msg-1").unwrap();
        assert!(opened.read);
    }

    #[test]
    fn sending_prepends_an_outgoing_message() {
        let mut model = signed_in_model();
        model.messages_view.compose_to = "Harvard Admissions".into();
        model.messages_view.compose_subject = "Deferral question".into();
        model.messages_view.compose_body = "Is deferral possible?".into();
        let before = model.messages.len();
        let mut cmds = Vec::new();

        update(&mut model, Msg::Messages(MessagesMsg::SendPressed), &mut cmds);

        assert_eq!(model.messages.len(), before + 1);
        let sent = &model.messages[0];
        assert_eq!(sent.direction, Direction::Sent);
        assert_eq!(sent.to.name, "Harvard Admissions");
        assert_eq!(sent.from.email, "student@example.com");
    }

    #[test]
    fn session_commands_round_trip_through_the_store() {
        let tmp = TempDir::new().unwrap();
        let sessions = SessionStore::new(tmp.path().join("session.json"));
        let user = demo_user();

        match run_command(Command::SaveSession(user.clone()), &sessions) {
            Msg::SessionWritten(Ok(())) => {}
            _ => panic!("save should succeed"),
        }
        match run_command(Command::LoadSession, &sessions) {
            Msg::SessionLoaded(Some(loaded)) => assert_eq!(loaded, user),
            _ => panic!("load should return the saved user"),
        }
        match run_command(Command::ClearSession, &sessions) {
            Msg::SessionWritten(Ok(())) => {}
            _ => panic!("clear should succeed"),
        }
        match run_command(Command::LoadSession, &sessions) {
            Msg::SessionLoaded(None) => {}
            _ => panic!("cleared store should be empty"),
        }
    }

    #[test]
    fn notification_opened_marks_it_read() {
        let mut model = signed_in_model();
        let mut cmds = Vec::new();

        update(&mut model, Msg::NotificationOpened("ntf-1".into()), &mut cmds);

        let opened = model.notifications.iter().find(|n| n.id == "ntf-1").unwrap();
        assert!(opened.read);
    }
}
