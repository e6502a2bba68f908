//! CRUD screen state machine
//!
//! One tagged union replaces the ad hoc `open`/`editMode`/`detailsOpen`
//! flags a CRUD screen otherwise accumulates. Transitions that would issue a
//! network request return the record to submit instead of performing I/O, so
//! the whole machine tests without a browser:
//!
//! - [`ListController::begin_save`] validates first and returns `None` while
//!   errors are present or another save is in flight — a rejected save never
//!   reaches the network.
//! - [`ListController::confirm_delete`] yields the doomed record exactly
//!   once; cancelling the confirmation yields nothing.

use contracts::shared::validation::{FieldErrors, Validate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// What the screen is currently doing.
#[derive(Clone, Debug, PartialEq)]
pub enum ListState<T> {
    /// Plain list, no dialog open.
    Idle,
    /// The create/edit form dialog, with any validation errors from the last
    /// rejected save attempt.
    Form {
        mode: FormMode,
        record: T,
        errors: FieldErrors,
    },
    /// Read-only details dialog (nested sub-records come along with the
    /// record as fetched).
    Details { record: T },
    /// A save request is in flight; the form data rides along so a failure
    /// can restore it untouched.
    Saving { mode: FormMode, record: T },
    /// Delete flow: confirmation pending while `in_flight` is false, request
    /// running once it is true.
    Deleting { record: T, in_flight: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListController<T> {
    state: ListState<T>,
}

impl<T> Default for ListController<T> {
    fn default() -> Self {
        Self {
            state: ListState::Idle,
        }
    }
}

impl<T: Validate + Clone> ListController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    /// True while a request is in flight; the UI disables its submit
    /// affordances on this to prevent duplicate submissions.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.state,
            ListState::Saving { .. } | ListState::Deleting { in_flight: true, .. }
        )
    }

    pub fn start_create(&mut self, template: T) {
        if matches!(self.state, ListState::Idle) {
            self.state = ListState::Form {
                mode: FormMode::Create,
                record: template,
                errors: FieldErrors::new(),
            };
        }
    }

    pub fn start_edit(&mut self, record: T) {
        if matches!(self.state, ListState::Idle) {
            self.state = ListState::Form {
                mode: FormMode::Edit,
                record,
                errors: FieldErrors::new(),
            };
        }
    }

    pub fn open_details(&mut self, record: T) {
        if matches!(self.state, ListState::Idle) {
            self.state = ListState::Details { record };
        }
    }

    /// Dismiss the open dialog. Ignored while a request is in flight: the
    /// outcome handler owns the next transition.
    pub fn close(&mut self) {
        match self.state {
            ListState::Form { .. }
            | ListState::Details { .. }
            | ListState::Deleting { in_flight: false, .. } => {
                self.state = ListState::Idle;
            }
            _ => {}
        }
    }

    /// Mutate the record being authored in the form.
    pub fn update_record(&mut self, f: impl FnOnce(&mut T)) {
        if let ListState::Form { record, .. } = &mut self.state {
            f(record);
        }
    }

    /// Validate and, if clean, move to `Saving` and hand back what to submit.
    /// On validation errors the form stays open with the errors recorded and
    /// nothing is submitted. While already saving, returns `None`.
    pub fn begin_save(&mut self) -> Option<(FormMode, T)> {
        let ListState::Form { mode, record, .. } = self.state.clone() else {
            return None;
        };
        match record.validate() {
            Err(errors) => {
                self.state = ListState::Form {
                    mode,
                    record,
                    errors,
                };
                None
            }
            Ok(()) => {
                self.state = ListState::Saving {
                    mode,
                    record: record.clone(),
                };
                Some((mode, record))
            }
        }
    }

    pub fn save_succeeded(&mut self) {
        if matches!(self.state, ListState::Saving { .. }) {
            self.state = ListState::Idle;
        }
    }

    /// A failed save reopens the form with the entered data intact.
    pub fn save_failed(&mut self) {
        if let ListState::Saving { mode, record } = self.state.clone() {
            self.state = ListState::Form {
                mode,
                record,
                errors: FieldErrors::new(),
            };
        }
    }

    /// Open the delete confirmation for `record`.
    pub fn request_delete(&mut self, record: T) {
        if matches!(self.state, ListState::Idle) {
            self.state = ListState::Deleting {
                record,
                in_flight: false,
            };
        }
    }

    /// Decline the confirmation: back to the list, nothing sent.
    pub fn cancel_delete(&mut self) {
        if matches!(self.state, ListState::Deleting { in_flight: false, .. }) {
            self.state = ListState::Idle;
        }
    }

    /// Confirm the pending delete. Yields the record to delete exactly once;
    /// further calls while the request runs return `None`.
    pub fn confirm_delete(&mut self) -> Option<T> {
        if let ListState::Deleting {
            record,
            in_flight: false,
        } = self.state.clone()
        {
            self.state = ListState::Deleting {
                record: record.clone(),
                in_flight: true,
            };
            Some(record)
        } else {
            None
        }
    }

    pub fn delete_finished(&mut self) {
        if matches!(self.state, ListState::Deleting { .. }) {
            self.state = ListState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::validation::check_required;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Draft {
        name: String,
    }

    impl Validate for Draft {
        fn validate(&self) -> Result<(), FieldErrors> {
            let mut errors = FieldErrors::new();
            check_required(&mut errors, "name", &self.name, "Name");
            errors.into_result()
        }
    }

    fn named(name: &str) -> Draft {
        Draft { name: name.into() }
    }

    #[test]
    fn create_flow_happy_path() {
        let mut c = ListController::new();
        c.start_create(Draft::default());
        c.update_record(|r| r.name = "Flour".into());

        let (mode, record) = c.begin_save().expect("valid form submits");
        assert_eq!(mode, FormMode::Create);
        assert_eq!(record, named("Flour"));
        assert!(c.is_busy());

        c.save_succeeded();
        assert_eq!(*c.state(), ListState::Idle);
    }

    #[test]
    fn invalid_record_blocks_save_and_records_errors() {
        let mut c = ListController::new();
        c.start_create(Draft::default());

        assert!(c.begin_save().is_none(), "no request for an invalid form");
        match c.state() {
            ListState::Form { errors, .. } => {
                assert!(errors.get("name").is_some());
            }
            other => panic!("expected Form, got {other:?}"),
        }
        assert!(!c.is_busy());
    }

    #[test]
    fn duplicate_submission_is_rejected_while_saving() {
        let mut c = ListController::new();
        c.start_edit(named("Flour"));
        assert!(c.begin_save().is_some());
        assert!(c.begin_save().is_none(), "second submit while in flight");
    }

    #[test]
    fn failed_save_keeps_entered_data() {
        let mut c = ListController::new();
        c.start_edit(named("Flour"));
        c.update_record(|r| r.name = "Rye flour".into());
        c.begin_save().unwrap();

        c.save_failed();
        match c.state() {
            ListState::Form { mode, record, errors } => {
                assert_eq!(*mode, FormMode::Edit);
                assert_eq!(*record, named("Rye flour"));
                assert!(errors.is_empty());
            }
            other => panic!("expected Form, got {other:?}"),
        }
    }

    #[test]
    fn cancelled_delete_sends_nothing() {
        let mut c = ListController::new();
        c.request_delete(named("Flour"));
        c.cancel_delete();
        assert_eq!(*c.state(), ListState::Idle);
        assert!(c.confirm_delete().is_none());
    }

    #[test]
    fn confirmed_delete_yields_the_record_once() {
        let mut c = ListController::new();
        c.request_delete(named("Flour"));

        assert_eq!(c.confirm_delete(), Some(named("Flour")));
        assert!(c.is_busy());
        assert!(c.confirm_delete().is_none(), "already in flight");

        c.delete_finished();
        assert_eq!(*c.state(), ListState::Idle);
    }

    #[test]
    fn close_is_ignored_mid_request() {
        let mut c = ListController::new();
        c.start_edit(named("Flour"));
        c.begin_save().unwrap();
        c.close();
        assert!(matches!(c.state(), ListState::Saving { .. }));

        let mut d = ListController::new();
        d.request_delete(named("Flour"));
        d.confirm_delete().unwrap();
        d.close();
        assert!(matches!(d.state(), ListState::Deleting { in_flight: true, .. }));
    }

    #[test]
    fn details_opens_and_closes() {
        let mut c = ListController::new();
        c.open_details(named("Flour"));
        assert!(matches!(c.state(), ListState::Details { .. }));
        c.close();
        assert_eq!(*c.state(), ListState::Idle);
    }
}
