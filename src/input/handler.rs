//! Input Handler
//!
//! Turns key events into actions for the current mode. The search line
//! is edited here; every edit reports the new term so the list can be
//! refiltered on each keystroke.

use crossterm::event::KeyEvent;

use super::keymap::{confirm_action, form_action, normal_mode_action, text_input_action, Action};
use super::modes::{InputMode, ModeState};

pub struct InputHandler;

impl InputHandler {
    /// Process a key event and return the resulting action
    pub fn handle_key_event(key: KeyEvent, state: &mut ModeState) -> Action {
        match state.mode {
            InputMode::Normal => {
                let (action, new_pending) = normal_mode_action(key, state.pending);
                state.pending = new_pending;
                action
            }
            InputMode::Insert => {
                let action = form_action(key);
                if action == Action::LeaveForm {
                    state.to_normal();
                }
                action
            }
            InputMode::Search => Self::handle_search_key(key, state),
            InputMode::Confirm => {
                let action = confirm_action(key);
                if matches!(action, Action::Confirm | Action::Cancel) {
                    state.to_normal();
                }
                action
            }
        }
    }

    fn handle_search_key(key: KeyEvent, state: &mut ModeState) -> Action {
        match text_input_action(key) {
            Action::InsertChar(c) => state.insert_char(c),
            Action::DeleteChar => state.delete_char(),
            Action::DeleteCharForward => state.delete_char_forward(),
            Action::ClearLine => state.clear_buffer(),
            Action::CursorLeft => {
                state.cursor_left();
                return Action::None;
            }
            Action::CursorRight => {
                state.cursor_right();
                return Action::None;
            }
            Action::CursorHome => {
                state.cursor_home();
                return Action::None;
            }
            Action::CursorEnd => {
                state.cursor_end();
                return Action::None;
            }
            Action::Submit => {
                state.to_normal();
                return Action::None;
            }
            Action::Cancel => {
                state.to_normal();
                return Action::ClearSearch;
            }
            _ => return Action::None,
        }
        Action::SearchChanged(state.get_buffer().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode() {
        let mut state = ModeState::new();

        let action = InputHandler::handle_key_event(key(KeyCode::Char('j')), &mut state);
        assert_eq!(action, Action::MoveDown);
    }

    #[test]
    fn test_search_reports_every_keystroke() {
        let mut state = ModeState::new();
        state.to_search("");

        let action = InputHandler::handle_key_event(key(KeyCode::Char('p')), &mut state);
        assert_eq!(action, Action::SearchChanged("p".to_string()));

        let action = InputHandler::handle_key_event(key(KeyCode::Char('h')), &mut state);
        assert_eq!(action, Action::SearchChanged("ph".to_string()));

        let action = InputHandler::handle_key_event(key(KeyCode::Backspace), &mut state);
        assert_eq!(action, Action::SearchChanged("p".to_string()));

        let action = InputHandler::handle_key_event(key(KeyCode::Enter), &mut state);
        assert_eq!(action, Action::None);
        assert_eq!(state.mode, InputMode::Normal);
    }

    #[test]
    fn test_search_escape_clears() {
        let mut state = ModeState::new();
        state.to_search("phy");

        let action = InputHandler::handle_key_event(key(KeyCode::Esc), &mut state);
        assert_eq!(action, Action::ClearSearch);
        assert_eq!(state.mode, InputMode::Normal);
    }

    #[test]
    fn test_form_keys_pass_through() {
        let mut state = ModeState::new();
        state.to_insert();

        let action = InputHandler::handle_key_event(key(KeyCode::Char('A')), &mut state);
        assert_eq!(action, Action::InsertChar('A'));
        assert_eq!(state.get_buffer(), "");

        let action = InputHandler::handle_key_event(key(KeyCode::Enter), &mut state);
        assert_eq!(action, Action::Submit);
        assert_eq!(state.mode, InputMode::Insert);

        let action = InputHandler::handle_key_event(key(KeyCode::Esc), &mut state);
        assert_eq!(action, Action::LeaveForm);
        assert_eq!(state.mode, InputMode::Normal);
    }

    #[test]
    fn test_confirm_mode() {
        let mut state = ModeState::new();
        state.to_confirm();

        let action = InputHandler::handle_key_event(key(KeyCode::Char('z')), &mut state);
        assert_eq!(action, Action::None);
        assert_eq!(state.mode, InputMode::Confirm);

        let action = InputHandler::handle_key_event(key(KeyCode::Char('y')), &mut state);
        assert_eq!(action, Action::Confirm);
        assert_eq!(state.mode, InputMode::Normal);
    }
}
