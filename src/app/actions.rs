use anyhow::Result;
use tracing::debug;

use crate::input::keymap::Action;
use crate::ui::components::{ListViewState, MessageType};
use crate::ui::renderer::View;
use crate::widgets::{Decision, EditState, SubmitOutcome};

use super::config::PendingAction;
use super::App;

impl App {
    pub fn execute_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::MoveUp => self.move_list(ListViewState::move_up),
            Action::MoveDown => self.move_list(ListViewState::move_down),
            Action::MoveToTop => self.move_list(ListViewState::move_to_top),
            Action::MoveToBottom => self.move_list(ListViewState::move_to_bottom),

            Action::NextView => self.show_view(self.view.next()),
            Action::ShowView(view) => self.show_view(view),

            Action::FocusForm => self.mode_state.to_insert(),
            Action::Edit => self.edit_selected(),
            Action::Delete => self.delete_selected(),

            Action::EnterSearch => self.enter_search(),
            Action::SearchChanged(term) => self.apply_search(&term),
            Action::ClearSearch => self.apply_search(""),

            Action::NextField
            | Action::PrevField
            | Action::InsertChar(_)
            | Action::DeleteChar
            | Action::DeleteCharForward
            | Action::CursorLeft
            | Action::CursorRight
            | Action::CursorHome
            | Action::CursorEnd
            | Action::ClearLine => self.edit_form(action),
            Action::Submit => self.submit_form(),
            Action::LeaveForm => self.leave_form(),

            Action::Confirm => self.handle_confirm(Decision::Accept),
            Action::Cancel => self.handle_confirm(Decision::Cancel),

            Action::Quit => {
                self.should_quit = true;
                return Ok(true);
            }
            Action::None => {}
        }

        Ok(false)
    }

    fn move_list(&mut self, f: impl FnOnce(&mut ListViewState)) {
        match self.view {
            View::Students => f(&mut self.student_list),
            View::Contacts => f(&mut self.contact_list),
            View::Registration => {}
        }
    }

    fn show_view(&mut self, view: View) {
        self.view = view;
        self.mode_state.to_normal();
    }

    fn edit_selected(&mut self) {
        match self.view {
            View::Students => {
                let Some(position) = self.selected_student() else {
                    return;
                };
                match self.students.begin_edit(position) {
                    Ok(()) => {
                        self.mode_state.to_insert();
                        self.set_message("Editing student", MessageType::Info);
                    }
                    Err(err) => self.report(err),
                }
            }
            View::Contacts => self.set_message("Contacts cannot be edited", MessageType::Warning),
            View::Registration => self.mode_state.to_insert(),
        }
    }

    fn delete_selected(&mut self) {
        match self.view {
            View::Students => {
                let Some(position) = self.selected_student() else {
                    return;
                };
                match self.students.request_delete(position) {
                    Ok(request) => {
                        self.pending_action = Some(PendingAction::DeleteStudent(request));
                        self.mode_state.to_confirm();
                    }
                    Err(err) => self.report(err),
                }
            }
            View::Contacts => {
                let Some(id) = self.selected_contact() else {
                    return;
                };
                match self.contacts.delete(id) {
                    Ok(()) => {
                        self.refresh_lists();
                        self.set_message("Contact deleted", MessageType::Success);
                    }
                    Err(err) => self.report(err),
                }
            }
            View::Registration => {}
        }
    }

    fn enter_search(&mut self) {
        let current = match self.view {
            View::Students => self.students.search().to_string(),
            View::Contacts => self.contacts.search().to_string(),
            View::Registration => return,
        };
        self.mode_state.to_search(&current);
    }

    fn apply_search(&mut self, term: &str) {
        match self.view {
            View::Students => self.students.set_search(term),
            View::Contacts => self.contacts.set_search(term),
            View::Registration => return,
        }
        debug!(term, "search updated");
        self.refresh_lists();
    }

    fn submit_form(&mut self) {
        match self.view {
            View::Registration => match self.registration.submit() {
                Ok(registration) => {
                    self.last_registered = Some(registration);
                    self.set_message("Registration successful!", MessageType::Success);
                }
                Err(err) => self.report(err),
            },
            View::Students => match self.students.submit() {
                Ok(outcome) => {
                    self.refresh_lists();
                    let msg = match outcome {
                        SubmitOutcome::Added(_) => "Student added",
                        SubmitOutcome::Updated(_) => "Student updated",
                    };
                    self.set_message(msg, MessageType::Success);
                }
                Err(err) => self.report(err),
            },
            View::Contacts => match self.contacts.submit() {
                Ok(_) => {
                    self.refresh_lists();
                    self.set_message("Contact added", MessageType::Success);
                }
                Err(err) => self.report(err),
            },
        }
    }

    fn leave_form(&mut self) {
        if self.view == View::Students && matches!(self.students.state(), EditState::Editing(_)) {
            self.students.cancel_edit();
            self.set_message("Edit cancelled", MessageType::Info);
        }
    }

    fn handle_confirm(&mut self, decision: Decision) {
        let Some(action) = self.pending_action.take() else {
            return;
        };

        match action {
            PendingAction::DeleteStudent(request) => {
                match self.students.resolve_delete(request, decision) {
                    Ok(Some(_)) => {
                        self.refresh_lists();
                        self.set_message("Student deleted", MessageType::Success);
                    }
                    Ok(None) => self.set_message("Delete cancelled", MessageType::Info),
                    Err(err) => self.report(err),
                }
            }
        }
    }
}
