use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::input::keymap::Action;
use crate::input::InputHandler;
use crate::ui::renderer::View;
use crate::widgets::FormState;

use super::App;

impl App {
    /// Handle one key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        let action = InputHandler::handle_key_event(key, &mut self.mode_state);
        self.execute_action(action)
    }

    pub(super) fn active_form_mut(&mut self) -> &mut FormState {
        match self.view {
            View::Registration => self.registration.form_mut(),
            View::Students => self.students.form_mut(),
            View::Contacts => self.contacts.form_mut(),
        }
    }

    /// Apply a text editing action to the focused form.
    pub(super) fn edit_form(&mut self, action: Action) {
        let form = self.active_form_mut();
        match action {
            Action::NextField => form.next_field(),
            Action::PrevField => form.prev_field(),
            Action::InsertChar(c) => form.insert_char(c),
            Action::DeleteChar => form.delete_char(),
            Action::DeleteCharForward => form.delete_char_forward(),
            Action::CursorLeft => form.cursor_left(),
            Action::CursorRight => form.cursor_right(),
            Action::CursorHome => form.cursor_home(),
            Action::CursorEnd => form.cursor_end(),
            Action::ClearLine => form.clear_active(),
            _ => {}
        }
    }
}
