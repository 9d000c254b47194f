//! Widgets
//!
//! Form state and the controllers for the registration, student and
//! contact widgets. Each owns its form, its record store and its search
//! term; persistence is injected as a [`crate::storage::BlobStore`].

pub mod confirm;
pub mod contacts;
pub mod form;
pub mod registration;
pub mod students;

// Re-exports
pub use confirm::{Decision, DeleteRequest};
pub use contacts::ContactWidget;
pub use form::{FieldKind, FormField, FormState};
pub use registration::RegistrationWidget;
pub use students::{EditState, StudentWidget, SubmitOutcome};
