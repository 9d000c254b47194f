//! Record Models
//!
//! Field names serialize in camelCase so snapshots keep the
//! `{"fullName": ...}` shape.

use serde::{Deserialize, Serialize};

use super::Record;

pub const FULL_NAME: &str = "fullName";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const NAME: &str = "name";
pub const AGE: &str = "age";
pub const COURSE: &str = "course";
pub const PHONE: &str = "phone";

/// The last submitted registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl Record for Registration {
    const BLOB_KEY: &'static str = "registeredUser";
}

/// Student record; age is kept as entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub name: String,
    pub email: String,
    pub age: String,
    pub course: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: age.into(),
            course: course.into(),
        }
    }
}

impl Record for Student {
    const BLOB_KEY: &'static str = "students";
}

/// Contact record, identified by its creation-time id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i64,
    pub full_name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(id: i64, full_name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            phone: phone.into(),
        }
    }
}

impl Record for Contact {
    const BLOB_KEY: &'static str = "contacts";
}
