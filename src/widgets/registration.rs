//! Registration Widget
//!
//! Create-only form. A valid submission overwrites the single
//! `registeredUser` snapshot and clears the form.

use tracing::{info, warn};

use crate::records::models::{EMAIL, FULL_NAME, PASSWORD};
use crate::records::validation::{Validate, REGISTRATION_SUMMARY};
use crate::records::{Record, RecordError, RecordResult, Registration};
use crate::storage::{BlobSlot, BlobStore};

use super::form::{FieldKind, FormField, FormState};

pub struct RegistrationWidget<S> {
    form: FormState,
    slot: BlobSlot<S>,
}

impl<S: BlobStore> RegistrationWidget<S> {
    pub fn new(store: S) -> Self {
        let form = FormState::new(vec![
            FormField::text(FULL_NAME, "Full Name"),
            FormField::text(EMAIL, "Email Address"),
            FormField::new(PASSWORD, "Password", FieldKind::Password),
        ])
        .clearing_errors_on_input();

        Self {
            form,
            slot: BlobSlot::new(store, Registration::BLOB_KEY),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    fn current(&self) -> Registration {
        Registration {
            full_name: self.form.value(FULL_NAME).to_string(),
            email: self.form.value(EMAIL).to_string(),
            password: self.form.value(PASSWORD).to_string(),
        }
    }

    /// Validate and save. On failure the form keeps its values and shows
    /// the per-field messages.
    pub fn submit(&mut self) -> RecordResult<Registration> {
        let registration = self.current();

        let errors = registration.validate();
        if !errors.is_empty() {
            warn!(fields = errors.len(), "registration rejected");
            self.form.set_errors(errors.clone());
            return Err(RecordError::Invalid {
                summary: REGISTRATION_SUMMARY.to_string(),
                errors,
            });
        }

        self.slot.save(&registration)?;
        info!(
            full_name = %registration.full_name,
            email = %registration.email,
            "registration submitted"
        );
        self.form.reset();
        Ok(registration)
    }

    /// The snapshot currently stored, if any.
    pub fn last_registered(&self) -> RecordResult<Option<Registration>> {
        Ok(self.slot.load()?)
    }
}
