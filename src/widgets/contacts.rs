//! Contact Widget
//!
//! Add and delete contacts. Contacts are addressed by id.

use tracing::{info, warn};

use crate::records::ids::IdGenerator;
use crate::records::models::{FULL_NAME, PHONE};
use crate::records::search::{filter, VisibleRow};
use crate::records::validation::{check_phone, Validate, CONTACT_SUMMARY};
use crate::records::{Contact, RecordError, RecordResult, RecordStore};
use crate::storage::BlobStore;

use super::form::{FormField, FormState};

pub struct ContactWidget<S> {
    form: FormState,
    store: RecordStore<Contact, S>,
    ids: IdGenerator,
    search: String,
}

impl<S: BlobStore> ContactWidget<S> {
    pub fn open(store: S) -> RecordResult<Self> {
        let store: RecordStore<Contact, S> = RecordStore::open(store)?;
        let ids = IdGenerator::seeded(store.records().iter().map(|c| c.id));

        Ok(Self {
            form: FormState::new(vec![
                FormField::text(FULL_NAME, "Full Name"),
                FormField::text(PHONE, "Phone Number"),
            ]),
            store,
            ids,
            search: String::new(),
        })
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn records(&self) -> &[Contact] {
        self.store.records()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn visible_rows(&self) -> Vec<VisibleRow<'_, Contact>> {
        filter(self.store.records(), &self.search)
    }

    /// Validate, assign an id and append.
    pub fn submit(&mut self) -> RecordResult<Contact> {
        let full_name = self.form.value(FULL_NAME).to_string();
        let phone = self.form.value(PHONE).to_string();

        // Id 0 is a placeholder until the record passes validation.
        let mut contact = Contact::new(0, full_name, phone);

        let errors = contact.validate();
        self.form.set_errors(errors.clone());
        if !errors.is_empty() {
            warn!(fields = errors.len(), "contact rejected");
        }
        errors.into_result(CONTACT_SUMMARY)?;

        if let Err(err) = check_phone(&contact.phone) {
            warn!("contact rejected: phone is not numeric");
            return Err(err);
        }

        contact.id = self.ids.next_id()?;
        self.store.add(contact.clone())?;
        self.form.reset();
        Ok(contact)
    }

    /// Remove the contact with `id`.
    pub fn delete(&mut self, id: i64) -> RecordResult<()> {
        if self.store.remove_where(|c| c.id == id)? == 0 {
            return Err(RecordError::UnknownId(id));
        }
        info!(id, "contact deleted");
        Ok(())
    }
}
