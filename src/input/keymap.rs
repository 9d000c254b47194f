//! Keymap
//!
//! Vim-style key bindings mapped to actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::renderer::View;

/// Actions that can be triggered by key presses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    MoveToTop,
    MoveToBottom,

    // Views
    NextView,
    ShowView(View),

    // CRUD
    FocusForm,
    Edit,
    Delete,

    // Search
    EnterSearch,
    SearchChanged(String),
    ClearSearch,

    // Form editing
    NextField,
    PrevField,
    InsertChar(char),
    DeleteChar,
    DeleteCharForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearLine,
    Submit,
    LeaveForm,

    // Confirmation
    Confirm,
    Cancel,

    // Application
    Quit,

    // No action
    None,
}

/// Map key event to action in normal mode
pub fn normal_mode_action(key: KeyEvent, pending: Option<char>) -> (Action, Option<char>) {
    match (key.code, key.modifiers, pending) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL, _) => (Action::Quit, None),

        // Navigation
        (KeyCode::Char('j') | KeyCode::Down, _, _) => (Action::MoveDown, None),
        (KeyCode::Char('k') | KeyCode::Up, _, _) => (Action::MoveUp, None),
        (KeyCode::Char('g'), _, None) => (Action::None, Some('g')),
        (KeyCode::Char('g'), _, Some('g')) => (Action::MoveToTop, None),
        (KeyCode::Char('G'), _, _) => (Action::MoveToBottom, None),

        // Views
        (KeyCode::Tab, _, _) => (Action::NextView, None),
        (KeyCode::Char('1'), _, _) => (Action::ShowView(View::Registration), None),
        (KeyCode::Char('2'), _, _) => (Action::ShowView(View::Students), None),
        (KeyCode::Char('3'), _, _) => (Action::ShowView(View::Contacts), None),

        // CRUD
        (KeyCode::Char('i') | KeyCode::Char('n') | KeyCode::Char('a'), _, _) => (Action::FocusForm, None),
        (KeyCode::Char('e') | KeyCode::Enter, _, _) => (Action::Edit, None),
        (KeyCode::Char('d'), _, None) => (Action::None, Some('d')),
        (KeyCode::Char('d'), _, Some('d')) => (Action::Delete, None),
        (KeyCode::Char('x'), _, _) => (Action::Delete, None),

        // Search
        (KeyCode::Char('/'), _, _) => (Action::EnterSearch, None),
        (KeyCode::Esc, _, _) => (Action::ClearSearch, None),

        // Application
        (KeyCode::Char('q'), _, _) => (Action::Quit, None),

        _ => (Action::None, None),
    }
}

/// Map key event to action in text input modes
pub fn text_input_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::Cancel,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Backspace, _) => Action::DeleteChar,
        (KeyCode::Delete, _) => Action::DeleteCharForward,
        (KeyCode::Left, _) => Action::CursorLeft,
        (KeyCode::Right, _) => Action::CursorRight,
        (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => Action::CursorHome,
        (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::CursorEnd,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearLine,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InsertChar(c),
        _ => Action::None,
    }
}

/// Map key event to action while a form has focus
pub fn form_action(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Tab | KeyCode::Down => Action::NextField,
        KeyCode::BackTab | KeyCode::Up => Action::PrevField,
        KeyCode::Esc => Action::LeaveForm,
        _ => text_input_action(key),
    }
}

/// Map key event to action in confirm mode
pub fn confirm_action(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::Confirm,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::Cancel,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_normal_navigation() {
        assert_eq!(normal_mode_action(key(KeyCode::Char('j')), None).0, Action::MoveDown);
        assert_eq!(normal_mode_action(key(KeyCode::Char('k')), None).0, Action::MoveUp);
        assert_eq!(normal_mode_action(key(KeyCode::Char('G')), None).0, Action::MoveToBottom);
    }

    #[test]
    fn test_gg_sequence() {
        let (action1, pending1) = normal_mode_action(key(KeyCode::Char('g')), None);
        assert_eq!(action1, Action::None);
        assert_eq!(pending1, Some('g'));

        let (action2, pending2) = normal_mode_action(key(KeyCode::Char('g')), pending1);
        assert_eq!(action2, Action::MoveToTop);
        assert_eq!(pending2, None);
    }

    #[test]
    fn test_dd_sequence() {
        let (action1, pending1) = normal_mode_action(key(KeyCode::Char('d')), None);
        assert_eq!(action1, Action::None);
        assert_eq!(pending1, Some('d'));

        let (action2, pending2) = normal_mode_action(key(KeyCode::Char('d')), pending1);
        assert_eq!(action2, Action::Delete);
        assert_eq!(pending2, None);
    }

    #[test]
    fn test_view_switching() {
        assert_eq!(
            normal_mode_action(key(KeyCode::Char('2')), None).0,
            Action::ShowView(View::Students)
        );
        assert_eq!(normal_mode_action(key(KeyCode::Tab), None).0, Action::NextView);
    }

    #[test]
    fn test_text_input() {
        assert_eq!(text_input_action(key(KeyCode::Char('a'))), Action::InsertChar('a'));
        assert_eq!(text_input_action(key(KeyCode::Backspace)), Action::DeleteChar);
        assert_eq!(text_input_action(key(KeyCode::Enter)), Action::Submit);
        assert_eq!(text_input_action(key(KeyCode::Esc)), Action::Cancel);
    }

    #[test]
    fn test_ctrl_shortcuts() {
        assert_eq!(text_input_action(key_ctrl(KeyCode::Char('a'))), Action::CursorHome);
        assert_eq!(text_input_action(key_ctrl(KeyCode::Char('e'))), Action::CursorEnd);
        assert_eq!(text_input_action(key_ctrl(KeyCode::Char('u'))), Action::ClearLine);
    }

    #[test]
    fn test_form_keys() {
        assert_eq!(form_action(key(KeyCode::Tab)), Action::NextField);
        assert_eq!(form_action(key(KeyCode::BackTab)), Action::PrevField);
        assert_eq!(form_action(key(KeyCode::Esc)), Action::LeaveForm);
        assert_eq!(form_action(key(KeyCode::Char('x'))), Action::InsertChar('x'));
    }

    #[test]
    fn test_confirm_action() {
        assert_eq!(confirm_action(key(KeyCode::Char('y'))), Action::Confirm);
        assert_eq!(confirm_action(key(KeyCode::Char('n'))), Action::Cancel);
        assert_eq!(confirm_action(key(KeyCode::Enter)), Action::Confirm);
        assert_eq!(confirm_action(key(KeyCode::Esc)), Action::Cancel);
    }
}
