//! Form State
//!
//! Field values and per-field error messages for one widget's form.
//! Keystroke edits go through [`FormState::set_field`], so typing and
//! programmatic updates clear errors the same way.

use crate::records::ErrorMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
}

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub kind: FieldKind,
}

impl FormField {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            value: String::new(),
            kind,
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn is_masked(&self) -> bool {
        self.kind == FieldKind::Password
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<FormField>,
    errors: ErrorMap,
    active: usize,
    /// Cursor in characters within the active field
    cursor: usize,
    clear_errors_on_input: bool,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            errors: ErrorMap::new(),
            active: 0,
            cursor: 0,
            clear_errors_on_input: false,
        }
    }

    /// Editing a field also drops that field's error message.
    pub fn clearing_errors_on_input(mut self) -> Self {
        self.clear_errors_on_input = true;
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn value(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map_or("", |f| f.value.as_str())
    }

    /// Update exactly one field. Returns `false` for an unknown name.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        let Some(index) = self.fields.iter().position(|f| f.name == name) else {
            return false;
        };
        self.fields[index].value = value.into();
        if self.clear_errors_on_input {
            self.errors.clear(name);
        }
        if index == self.active {
            self.cursor = self.cursor.min(self.active_len());
        }
        true
    }

    /// Empty every field and drop all errors.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.errors = ErrorMap::new();
        self.active = 0;
        self.cursor = 0;
    }

    /// Replace all values at once, e.g. when an edit starts.
    pub fn load<'v>(&mut self, values: impl IntoIterator<Item = (&'static str, &'v str)>) {
        self.reset();
        for (name, value) in values {
            self.set_field(name, value);
        }
        self.cursor = self.active_len();
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name)
    }

    pub fn set_errors(&mut self, errors: ErrorMap) {
        self.errors = errors;
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn active_field(&self) -> &FormField {
        &self.fields[self.active]
    }

    fn active_len(&self) -> usize {
        self.active_field().value.chars().count()
    }

    pub fn next_field(&mut self) {
        self.active = (self.active + 1) % self.fields.len();
        self.cursor = self.active_len();
    }

    pub fn prev_field(&mut self) {
        self.active = self.active.checked_sub(1).unwrap_or(self.fields.len() - 1);
        self.cursor = self.active_len();
    }

    pub fn insert_char(&mut self, c: char) {
        let field = self.active_field();
        let mut value = field.value.clone();
        value.insert(byte_offset(&value, self.cursor), c);
        let name = field.name;
        self.set_field(name, value);
        self.cursor += 1;
    }

    /// Backspace
    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
    }

    /// Delete
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.active_len() {
            self.remove_at_cursor();
        }
    }

    fn remove_at_cursor(&mut self) {
        let field = self.active_field();
        let mut value = field.value.clone();
        value.remove(byte_offset(&value, self.cursor));
        let name = field.name;
        self.set_field(name, value);
    }

    pub fn clear_active(&mut self) {
        let name = self.active_field().name;
        self.set_field(name, String::new());
        self.cursor = 0;
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.active_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.active_len();
    }
}

fn byte_offset(value: &str, chars: usize) -> usize {
    value.char_indices().nth(chars).map_or(value.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormState {
        FormState::new(vec![
            FormField::text("fullName", "Full Name"),
            FormField::new("password", "Password", FieldKind::Password),
        ])
    }

    fn errors() -> ErrorMap {
        let mut errors = ErrorMap::new();
        errors.insert("fullName", "Full name is required");
        errors.insert("password", "Password is required");
        errors
    }

    #[test]
    fn test_set_field_updates_one_field() {
        let mut form = form();
        assert!(form.set_field("fullName", "Ada"));

        assert_eq!(form.value("fullName"), "Ada");
        assert_eq!(form.value("password"), "");
        assert!(!form.set_field("nope", "x"));
    }

    #[test]
    fn test_set_field_clears_only_that_error() {
        let mut form = form().clearing_errors_on_input();
        form.set_errors(errors());

        form.set_field("fullName", "Ada");

        assert_eq!(form.error("fullName"), None);
        assert_eq!(form.error("password"), Some("Password is required"));
    }

    #[test]
    fn test_errors_kept_without_clearing() {
        let mut form = form();
        form.set_errors(errors());
        form.set_field("fullName", "Ada");
        assert_eq!(form.error("fullName"), Some("Full name is required"));
    }

    #[test]
    fn test_reset() {
        let mut form = form();
        form.set_field("fullName", "Ada");
        form.set_field("password", "secret");
        form.set_errors(errors());

        form.reset();

        assert!(form.fields().iter().all(|f| f.value.is_empty()));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut form = form().clearing_errors_on_input();
        form.set_errors(errors());

        for c in "Adq".chars() {
            form.insert_char(c);
        }
        form.delete_char();
        form.insert_char('a');

        assert_eq!(form.value("fullName"), "Ada");
        assert_eq!(form.error("fullName"), None);
        assert_eq!(form.cursor(), 3);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut form = form();
        for c in "Zoë".chars() {
            form.insert_char(c);
        }
        form.cursor_left();
        form.insert_char('e');
        form.delete_char_forward();

        assert_eq!(form.value("fullName"), "Zoe");
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = form();
        form.prev_field();
        assert_eq!(form.active_index(), 1);
        form.next_field();
        assert_eq!(form.active_index(), 0);
    }

    #[test]
    fn test_load_replaces_values() {
        let mut form = form();
        form.set_field("password", "old");
        form.load([("fullName", "Grace")]);

        assert_eq!(form.value("fullName"), "Grace");
        assert_eq!(form.value("password"), "");
        assert_eq!(form.cursor(), 5);
    }

    #[test]
    fn test_clear_active() {
        let mut form = form();
        form.set_field("fullName", "Ada");
        form.cursor_end();
        form.clear_active();
        assert_eq!(form.value("fullName"), "");
        assert_eq!(form.cursor(), 0);
    }
}
