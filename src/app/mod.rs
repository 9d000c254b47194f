//! Application State
//!
//! Ties the three widgets, the UI and modal input together.

mod actions;
mod config;
mod input;

use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, Result};
use ratatui::Frame;
use tracing::{error, info};

use crate::input::modes::{InputMode, ModeState};
use crate::records::{RecordError, Registration};
use crate::storage::{Database, DatabaseConfig};
use crate::ui::components::{ListViewState, MessageType};
use crate::ui::renderer::{Content, Renderer, UiState, View};
use crate::widgets::{ContactWidget, EditState, RegistrationWidget, StudentWidget};

pub use config::{AppConfig, PendingAction};

pub struct App {
    pub config: AppConfig,
    pub registration: RegistrationWidget<Rc<Database>>,
    pub students: StudentWidget<Rc<Database>>,
    pub contacts: ContactWidget<Rc<Database>>,
    pub last_registered: Option<Registration>,
    pub view: View,
    pub mode_state: ModeState,
    pub student_list: ListViewState,
    pub contact_list: ListViewState,
    pub message: Option<(String, MessageType, Instant)>,
    pub pending_action: Option<PendingAction>,
    pub should_quit: bool,
}

impl App {
    pub fn open(config: AppConfig) -> Result<Self> {
        let db = Database::open(DatabaseConfig::with_path(&config.store_path))
            .with_context(|| format!("opening store {}", config.store_path.display()))?;
        Self::with_database(config, db)
    }

    /// Build the app on an already opened database.
    pub fn with_database(config: AppConfig, db: Database) -> Result<Self> {
        info!(path = %db.path().display(), "store opened");
        let db = Rc::new(db);

        let registration = RegistrationWidget::new(Rc::clone(&db));
        let last_registered = registration
            .last_registered()
            .context("loading registration")?;
        let students = StudentWidget::open(Rc::clone(&db)).context("loading students")?;
        let contacts = ContactWidget::open(db).context("loading contacts")?;

        let mut app = Self {
            config,
            registration,
            students,
            contacts,
            last_registered,
            view: View::Registration,
            mode_state: ModeState::new(),
            student_list: ListViewState::new(),
            contact_list: ListViewState::new(),
            message: None,
            pending_action: None,
            should_quit: false,
        };
        app.refresh_lists();
        Ok(app)
    }

    /// Resync list selections with the current filtered rows.
    pub fn refresh_lists(&mut self) {
        self.student_list.set_total(self.students.visible_rows().len());
        self.contact_list.set_total(self.contacts.visible_rows().len());
    }

    /// Unfiltered position of the selected student row.
    pub fn selected_student(&self) -> Option<usize> {
        let index = self.student_list.selected()?;
        self.students.visible_rows().get(index).map(|row| row.position)
    }

    /// Id of the selected contact row.
    pub fn selected_contact(&self) -> Option<i64> {
        let index = self.contact_list.selected()?;
        self.contacts.visible_rows().get(index).map(|row| row.record.id)
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.check_message_expiry();

        let message = self.message.as_ref().map(|(m, t, _)| (m.as_str(), *t));
        let search_buffer =
            (self.mode_state.mode == InputMode::Search).then(|| self.mode_state.get_buffer());
        let confirm_message = self.pending_action.as_ref().map(|a| a.confirm_message());

        let student_rows = self.students.visible_rows();
        let contact_rows = self.contacts.visible_rows();

        let content = match self.view {
            View::Registration => Content::Registration {
                form: self.registration.form(),
                last: self.last_registered.as_ref(),
            },
            View::Students => Content::Students {
                form: self.students.form(),
                editing: matches!(self.students.state(), EditState::Editing(_)),
                rows: &student_rows,
                list_state: &mut self.student_list,
                search: self.students.search(),
            },
            View::Contacts => Content::Contacts {
                form: self.contacts.form(),
                rows: &contact_rows,
                list_state: &mut self.contact_list,
                search: self.contacts.search(),
            },
        };

        let mut state = UiState {
            view: self.view,
            mode: self.mode_state.mode,
            content,
            search_buffer,
            message,
            confirm_message,
        };

        Renderer::render(frame, &mut state);
    }

    fn check_message_expiry(&mut self) {
        let timeout = self.config.message_timeout;
        let expired = self
            .message
            .as_ref()
            .is_some_and(|(_, _, time)| time.elapsed() > timeout);

        if expired {
            self.message = None;
        }
    }

    pub fn set_message(&mut self, msg: &str, msg_type: MessageType) {
        self.message = Some((msg.to_string(), msg_type, Instant::now()));
    }

    /// Surface a failed operation on the status line.
    fn report(&mut self, err: RecordError) {
        if err.is_validation() {
            self.set_message(&err.to_string(), MessageType::Warning);
        } else {
            error!(error = %err, "operation failed");
            self.set_message(&err.to_string(), MessageType::Error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(super) fn test_app() -> App {
        let db = Database::open_in_memory().unwrap();
        App::with_database(AppConfig::default(), db).unwrap()
    }

    #[test]
    fn test_starts_on_registration() {
        let app = test_app();
        assert_eq!(app.view, View::Registration);
        assert_eq!(app.mode_state.mode, InputMode::Normal);
        assert!(app.last_registered.is_none());
        assert_eq!(app.student_list.selected(), None);
    }

    #[test]
    fn test_reopen_restores_records() {
        let dir = tempfile::tempdir().unwrap();
        let config = || AppConfig {
            store_path: dir.path().join("formdesk.db"),
            ..AppConfig::default()
        };

        {
            let mut app = App::open(config()).unwrap();
            let form = app.contacts.form_mut();
            form.set_field("fullName", "Ann Lee");
            form.set_field("phone", "5550101");
            app.contacts.submit().unwrap();
        }

        let app = App::open(config()).unwrap();
        assert_eq!(app.contacts.records().len(), 1);
        assert_eq!(app.contacts.records()[0].full_name, "Ann Lee");
        assert_eq!(app.contact_list.selected(), Some(0));
    }

    #[test]
    fn test_message_expires() {
        let mut app = test_app();
        app.config.message_timeout = std::time::Duration::ZERO;
        app.set_message("Student added", MessageType::Success);
        std::thread::sleep(std::time::Duration::from_millis(2));
        app.check_message_expiry();
        assert!(app.message.is_none());
    }
}
