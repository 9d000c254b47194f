//! Validation
//!
//! Pure checks run at submit time. An empty [`ErrorMap`] means the
//! record may be written.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::models::{
    Contact, Registration, Student, AGE, COURSE, EMAIL, FULL_NAME, NAME, PASSWORD, PHONE,
};
use super::{RecordError, RecordResult};

pub const MIN_PASSWORD_LEN: usize = 8;

pub const STUDENT_SUMMARY: &str = "Please fill all fields";
pub const CONTACT_SUMMARY: &str = "Please fill in all fields.";
pub const REGISTRATION_SUMMARY: &str = "Please correct the highlighted fields";
pub const PHONE_DIGITS_ONLY: &str = "Phone number must contain digits only.";

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

/// Field name to message. A missing entry means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<&'static str, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.0.remove(field);
        } else {
            self.0.insert(field, message);
        }
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(())` when empty, otherwise an `Invalid` error carrying the map.
    pub fn into_result(self, summary: &str) -> RecordResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        Err(RecordError::Invalid {
            summary: summary.to_string(),
            errors: self,
        })
    }
}

pub trait Validate {
    fn validate(&self) -> ErrorMap;
}

fn require(errors: &mut ErrorMap, field: &'static str, label: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.insert(field, format!("{} is required", label));
        return false;
    }
    true
}

impl Validate for Registration {
    fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();

        require(&mut errors, FULL_NAME, "Full name", &self.full_name);

        if require(&mut errors, EMAIL, "Email", &self.email)
            && !(self.email.contains('@') && self.email.contains('.'))
        {
            errors.insert(EMAIL, "Enter a valid email address");
        }

        if require(&mut errors, PASSWORD, "Password", &self.password)
            && self.password.chars().count() < MIN_PASSWORD_LEN
        {
            errors.insert(
                PASSWORD,
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            );
        }

        errors
    }
}

impl Validate for Student {
    fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();
        require(&mut errors, NAME, "Name", &self.name);
        require(&mut errors, EMAIL, "Email", &self.email);
        require(&mut errors, AGE, "Age", &self.age);
        require(&mut errors, COURSE, "Course", &self.course);
        errors
    }
}

impl Validate for Contact {
    fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();
        require(&mut errors, FULL_NAME, "Full name", &self.full_name);
        require(&mut errors, PHONE, "Phone", &self.phone);
        errors
    }
}

/// Digits-only phone gate. Runs after the required check and aborts the
/// submission without producing an error map.
pub fn check_phone(phone: &str) -> RecordResult<()> {
    if DIGITS.is_match(phone) {
        return Ok(());
    }
    Err(RecordError::Rejected(PHONE_DIGITS_ONLY.to_string()))
}
