//! Student Widget
//!
//! Add, edit and delete student records. Records are addressed by their
//! position in the unfiltered store; the position is captured when an
//! edit or a delete request starts.

use tracing::{info, warn};

use crate::records::models::{AGE, COURSE, EMAIL, NAME};
use crate::records::search::{filter, VisibleRow};
use crate::records::validation::{Validate, STUDENT_SUMMARY};
use crate::records::{RecordError, RecordResult, RecordStore, Student};
use crate::storage::BlobStore;

use super::confirm::{Decision, DeleteRequest};
use super::form::{FormField, FormState};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this student?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Idle,
    /// Form holds the record at this unfiltered position
    Editing(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(usize),
    Updated(usize),
}

pub struct StudentWidget<S> {
    form: FormState,
    store: RecordStore<Student, S>,
    state: EditState,
    search: String,
}

impl<S: BlobStore> StudentWidget<S> {
    pub fn open(store: S) -> RecordResult<Self> {
        let form = FormState::new(vec![
            FormField::text(NAME, "Name"),
            FormField::text(EMAIL, "Email"),
            FormField::text(AGE, "Age"),
            FormField::text(COURSE, "Course"),
        ]);

        Ok(Self {
            form,
            store: RecordStore::open(store)?,
            state: EditState::Idle,
            search: String::new(),
        })
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn records(&self) -> &[Student] {
        self.store.records()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    /// Rows matching the current search term, in store order.
    pub fn visible_rows(&self) -> Vec<VisibleRow<'_, Student>> {
        filter(self.store.records(), &self.search)
    }

    fn current(&self) -> Student {
        Student::new(
            self.form.value(NAME),
            self.form.value(EMAIL),
            self.form.value(AGE),
            self.form.value(COURSE),
        )
    }

    /// Load the record at `position` into the form.
    pub fn begin_edit(&mut self, position: usize) -> RecordResult<()> {
        let student = self
            .store
            .get(position)
            .ok_or(RecordError::OutOfRange(position))?;

        self.form.load([
            (NAME, student.name.as_str()),
            (EMAIL, student.email.as_str()),
            (AGE, student.age.as_str()),
            (COURSE, student.course.as_str()),
        ]);
        self.state = EditState::Editing(position);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.form.reset();
        self.state = EditState::Idle;
    }

    /// Add when idle, update the captured position when editing. A
    /// validation failure keeps the form values and the edit state.
    pub fn submit(&mut self) -> RecordResult<SubmitOutcome> {
        let student = self.current();

        let errors = student.validate();
        self.form.set_errors(errors.clone());
        if !errors.is_empty() {
            warn!(fields = errors.len(), "student rejected");
        }
        errors.into_result(STUDENT_SUMMARY)?;

        let outcome = match self.state {
            EditState::Idle => SubmitOutcome::Added(self.store.add(student)?),
            EditState::Editing(position) => {
                self.store.update(position, student)?;
                SubmitOutcome::Updated(position)
            }
        };

        self.form.reset();
        self.state = EditState::Idle;
        Ok(outcome)
    }

    /// Ask to delete the record at `position`. Nothing changes until the
    /// request is resolved.
    pub fn request_delete(&self, position: usize) -> RecordResult<DeleteRequest<Student>> {
        let target = self
            .store
            .get(position)
            .ok_or(RecordError::OutOfRange(position))?;
        Ok(DeleteRequest::new(position, target.clone(), DELETE_PROMPT))
    }

    /// Apply an accepted request. Returns the removed record, or `None`
    /// when the user cancelled.
    pub fn resolve_delete(
        &mut self,
        request: DeleteRequest<Student>,
        decision: Decision,
    ) -> RecordResult<Option<Student>> {
        if decision == Decision::Cancel {
            return Ok(None);
        }

        let position = request.position();
        if self.store.get(position) != Some(request.target()) {
            return Err(RecordError::Stale(position));
        }

        let removed = self.store.remove(position)?;
        self.shift_edit_after_remove(position);
        info!(position, "student deleted");
        Ok(Some(removed))
    }

    fn shift_edit_after_remove(&mut self, removed: usize) {
        let EditState::Editing(editing) = self.state else {
            return;
        };
        if editing == removed {
            self.cancel_edit();
        } else if editing > removed {
            self.state = EditState::Editing(editing - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Database, MemoryStore};

    fn seeded(store: &MemoryStore) -> StudentWidget<&MemoryStore> {
        let mut widget = StudentWidget::open(store).unwrap();
        for (name, course) in [("Ann", "Physics"), ("Bob", "History"), ("Cleo", "Biology")] {
            fill(&mut widget, name, &format!("{}@uni.edu", name.to_lowercase()), "21", course);
            widget.submit().unwrap();
        }
        widget
    }

    fn fill(widget: &mut StudentWidget<&MemoryStore>, name: &str, email: &str, age: &str, course: &str) {
        let form = widget.form_mut();
        form.set_field(NAME, name);
        form.set_field(EMAIL, email);
        form.set_field(AGE, age);
        form.set_field(COURSE, course);
    }

    fn stored(store: &MemoryStore) -> Vec<Student> {
        serde_json::from_str(&store.raw("students").unwrap()).unwrap()
    }

    #[test]
    fn test_add_appends_and_resets() {
        let store = MemoryStore::new();
        let widget = seeded(&store);

        assert_eq!(widget.records().len(), 3);
        assert_eq!(widget.records()[2].name, "Cleo");
        assert_eq!(widget.form().value(NAME), "");
        assert_eq!(stored(&store), widget.records());
    }

    #[test]
    fn test_missing_field_does_not_mutate() {
        let store = MemoryStore::new();
        let mut widget = seeded(&store);
        fill(&mut widget, "Dan", "", "30", "Maths");

        let err = widget.submit().unwrap_err();

        assert_eq!(err.to_string(), "Please fill all fields");
        assert_eq!(widget.records().len(), 3);
        assert_eq!(widget.form().value(NAME), "Dan");
        assert_eq!(widget.form().error(EMAIL), Some("Email is required"));
    }

    #[test]
    fn test_resubmit_replaces_field_errors() {
        let store = MemoryStore::new();
        let mut widget = seeded(&store);
        fill(&mut widget, "Dan", "", "30", "Maths");
        widget.submit().unwrap_err();

        fill(&mut widget, "Dan", "dan@x.io", "30", "");
        widget.submit().unwrap_err();

        assert_eq!(widget.form().error(EMAIL), None);
        assert_eq!(widget.form().error(COURSE), Some("Course is required"));
        assert_eq!(widget.form().errors().len(), 1);
    }

    #[test]
    fn test_edit_position_two_changes_only_course() {
        let store = MemoryStore::new();
        let mut widget = seeded(&store);
        let before = widget.records().to_vec();

        widget.begin_edit(2).unwrap();
        assert_eq!(widget.state(), EditState::Editing(2));
        assert_eq!(widget.form().value(NAME), "Cleo");

        widget.form_mut().set_field(COURSE, "Chemistry");
        assert_eq!(widget.submit().unwrap(), SubmitOutcome::Updated(2));

        let after = widget.records();
        assert_eq!(after.len(), before.len());
        assert_eq!(&after[..2], &before[..2]);
        assert_eq!(after[2].course, "Chemistry");
        assert_eq!(after[2].name, before[2].name);
        assert_eq!(widget.state(), EditState::Idle);
        assert_eq!(stored(&store), after);
    }

    #[test]
    fn test_failed_edit_keeps_captured_position() {
        let store = MemoryStore::new();
        let mut widget = seeded(&store);

        widget.begin_edit(1).unwrap();
        widget.form_mut().set_field(COURSE, "  ");
        widget.submit().unwrap_err();

        assert_eq!(widget.state(), EditState::Editing(1));
        assert_eq!(widget.records()[1].course, "History");
    }

    #[test]
    fn test_edit_from_filtered_view_targets_store_position() {
        let store = MemoryStore::new();
        let mut widget = seeded(&store);
        widget.set_search("bio");

        let rows = widget.visible_rows();
        assert_eq!(rows.len(), 1);
        let position = rows[0].position;

        widget.begin_edit(position).unwrap();
        widget.form_mut().set_field(AGE, "40");
        widget.submit().unwrap();

        assert_eq!(widget.records()[2].age, "40");
        assert_eq!(widget.records()[0].age, "21");
    }

    #[test]
    fn test_delete_requires_acceptance() {
        let store = MemoryStore::new();
        let mut widget = seeded(&store);

        let request = widget.request_delete(0).unwrap();
        assert_eq!(request.prompt(), DELETE_PROMPT);

        assert_eq!(widget.resolve_delete(request.clone(), Decision::Cancel).unwrap(), None);
        assert_eq!(widget.records().len(), 3);

        let removed = widget.resolve_delete(request, Decision::Accept).unwrap();
        assert_eq!(removed.map(|s| s.name), Some("Ann".to_string()));
        assert_eq!(widget.records().len(), 2);
        assert_eq!(stored(&store), widget.records());
    }

    #[test]
    fn test_stale_delete_request() {
        let store = MemoryStore::new();
        let mut widget = seeded(&store);

        let request = widget.request_delete(2).unwrap();
        let first = widget.request_delete(0).unwrap();
        widget.resolve_delete(first, Decision::Accept).unwrap();

        let err = widget.resolve_delete(request, Decision::Accept).unwrap_err();
        assert!(matches!(err, RecordError::Stale(2)));
        assert_eq!(widget.records().len(), 2);
    }

    #[test]
    fn test_delete_shifts_active_edit() {
        let store = MemoryStore::new();
        let mut widget = seeded(&store);

        widget.begin_edit(2).unwrap();
        let request = widget.request_delete(0).unwrap();
        widget.resolve_delete(request, Decision::Accept).unwrap();
        assert_eq!(widget.state(), EditState::Editing(1));

        let request = widget.request_delete(1).unwrap();
        widget.resolve_delete(request, Decision::Accept).unwrap();
        assert_eq!(widget.state(), EditState::Idle);
        assert_eq!(widget.form().value(NAME), "");
    }

    #[test]
    fn test_out_of_range() {
        let store = MemoryStore::new();
        let mut widget = seeded(&store);

        assert!(matches!(widget.begin_edit(9), Err(RecordError::OutOfRange(9))));
        assert!(matches!(widget.request_delete(9), Err(RecordError::OutOfRange(9))));
    }

    #[test]
    fn test_reopen_seeds_from_blob() {
        let db = Database::open_in_memory().unwrap();
        {
            let mut widget = StudentWidget::open(&db).unwrap();
            let form = widget.form_mut();
            form.set_field(NAME, "Ann");
            form.set_field(EMAIL, "ann@uni.edu");
            form.set_field(AGE, "21");
            form.set_field(COURSE, "Physics");
            widget.submit().unwrap();
        }

        let widget = StudentWidget::open(&db).unwrap();
        assert_eq!(
            widget.records(),
            &[Student::new("Ann", "ann@uni.edu", "21", "Physics")]
        );
    }

    #[test]
    fn test_null_blob_opens_empty() {
        let store = MemoryStore::new();
        store.put("students", "null").unwrap();

        let mut widget = StudentWidget::open(&store).unwrap();
        assert!(widget.records().is_empty());

        fill(&mut widget, "Ann", "ann@uni.edu", "21", "Physics");
        widget.submit().unwrap();
        assert_eq!(widget.records().len(), 1);
        assert_eq!(stored(&store), widget.records());
    }
}
