//! View-model of the sign-up component.
//!
//! [`SignupState`] owns everything the component shows: the customer list,
//! the form and the refresh counter. It only changes through
//! [`SignupState::apply`], which keeps every transition a plain function of
//! the previous state and an [`Action`]. Network effects live in
//! `services::signup` and feed their results back in as actions.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::customer::Customer;
use crate::forms::signup::{Field, SignupForm};

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Form submitted successfully!";
pub const SUBMIT_FALLBACK_ERROR: &str = "Failed to submit form";

/// Lifecycle of a single submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Transient state of the form itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: SignupForm,
    pub touched: BTreeSet<Field>,
    /// Errors of the whole form as of the last validation run.
    pub errors: BTreeMap<Field, &'static str>,
    pub phase: SubmitPhase,
    pub error_message: Option<String>,
}

impl FormState {
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn succeeded(&self) -> bool {
        self.phase == SubmitPhase::Succeeded
    }

    /// True when the last validation run found no errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Submit is actionable only for a valid form with nothing in flight.
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.is_submitting()
    }

    /// Error to display for `field`; untouched fields never show one.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if self.touched.contains(&field) {
            self.errors.get(&field).copied()
        } else {
            None
        }
    }

    fn validate(&mut self) {
        self.errors = self.values.field_errors();
    }

    fn reset(&mut self) {
        self.values = SignupForm::default();
        self.touched.clear();
        self.errors.clear();
    }
}

/// Everything that can happen to the component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    FieldChanged(Field, String),
    FieldBlurred(Field),
    /// User pressed submit: touches and validates every field.
    SubmitAttempted,
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed(String),
    CustomersLoaded(Vec<Customer>),
    CustomersLoadFailed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupState {
    pub customers: Vec<Customer>,
    pub form: FormState,
    /// Bumped after every successful submission.
    pub refresh: u64,
    loaded_refresh: Option<u64>,
}

impl SignupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until a list load has been attempted for the current refresh value.
    pub fn needs_reload(&self) -> bool {
        self.loaded_refresh != Some(self.refresh)
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::FieldChanged(field, value) => {
                self.form.values.set_value(field, value);
                self.form.validate();
            }
            Action::FieldBlurred(field) => {
                self.form.touched.insert(field);
                self.form.validate();
            }
            Action::SubmitAttempted => {
                self.form.touched.extend(Field::ALL);
                self.form.validate();
            }
            Action::SubmitStarted => {
                self.form.phase = SubmitPhase::Submitting;
                self.form.error_message = None;
            }
            Action::SubmitSucceeded => {
                self.form.reset();
                self.form.phase = SubmitPhase::Succeeded;
                self.refresh = self.refresh.wrapping_add(1);
            }
            Action::SubmitFailed(message) => {
                self.form.phase = SubmitPhase::Failed;
                self.form.error_message = Some(message);
            }
            Action::CustomersLoaded(customers) => {
                self.customers = customers;
                self.loaded_refresh = Some(self.refresh);
            }
            Action::CustomersLoadFailed => {
                self.loaded_refresh = Some(self.refresh);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::signup::{AGE_REQUIRED, EMAIL_REQUIRED, NAME_TOO_LONG};

    fn filled(email: &str, name: &str, age: &str) -> SignupState {
        let mut state = SignupState::new();
        state.apply(Action::FieldChanged(Field::Email, email.into()));
        state.apply(Action::FieldChanged(Field::Name, name.into()));
        state.apply(Action::FieldChanged(Field::Age, age.into()));
        state
    }

    #[test]
    fn fresh_state_is_valid_and_needs_a_load() {
        let state = SignupState::new();

        assert!(state.form.can_submit());
        assert!(state.needs_reload());
        assert_eq!(state.form.phase, SubmitPhase::Idle);
    }

    #[test]
    fn change_validates_whole_form_but_shows_nothing_untouched() {
        let mut state = SignupState::new();
        state.apply(Action::FieldChanged(Field::Name, "Ann".into()));

        assert!(!state.form.is_valid());
        assert_eq!(state.form.errors.get(&Field::Email), Some(&EMAIL_REQUIRED));
        assert_eq!(state.form.visible_error(Field::Email), None);
    }

    #[test]
    fn blur_marks_field_touched() {
        let mut state = SignupState::new();
        state.apply(Action::FieldChanged(Field::Name, "a".repeat(20)));
        state.apply(Action::FieldBlurred(Field::Name));

        assert_eq!(state.form.visible_error(Field::Name), Some(NAME_TOO_LONG));
        assert_eq!(state.form.visible_error(Field::Age), None);
    }

    #[test]
    fn submit_attempt_touches_every_field() {
        let mut state = SignupState::new();
        state.apply(Action::SubmitAttempted);

        assert!(!state.form.can_submit());
        assert_eq!(state.form.visible_error(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(state.form.visible_error(Field::Age), Some(AGE_REQUIRED));
    }

    #[test]
    fn in_flight_submission_blocks_submit() {
        let mut state = filled("a@b.com", "Ann", "30");
        assert!(state.form.can_submit());

        state.apply(Action::SubmitStarted);

        assert!(state.form.is_submitting());
        assert!(!state.form.can_submit());
    }

    #[test]
    fn success_resets_form_and_bumps_refresh() {
        let mut state = filled("a@b.com", "Ann", "30");
        state.apply(Action::CustomersLoaded(Vec::new()));
        state.apply(Action::SubmitAttempted);
        state.apply(Action::SubmitStarted);
        state.apply(Action::SubmitSucceeded);

        assert_eq!(state.form.values, SignupForm::default());
        assert!(state.form.touched.is_empty());
        assert!(state.form.errors.is_empty());
        assert!(state.form.succeeded());
        assert!(!state.form.is_submitting());
        assert_eq!(state.refresh, 1);
        assert!(state.needs_reload());
    }

    #[test]
    fn failure_keeps_values_and_records_message() {
        let mut state = filled("a@b.com", "Ann", "30");
        state.apply(Action::SubmitStarted);
        state.apply(Action::SubmitFailed("Email taken".into()));

        assert_eq!(state.form.values.name, "Ann");
        assert_eq!(state.form.error_message.as_deref(), Some("Email taken"));
        assert_eq!(state.form.phase, SubmitPhase::Failed);
        assert!(!state.form.is_submitting());
    }

    #[test]
    fn next_submission_clears_previous_outcome() {
        let mut state = filled("a@b.com", "Ann", "30");
        state.apply(Action::SubmitFailed("Email taken".into()));
        state.apply(Action::SubmitStarted);

        assert_eq!(state.form.error_message, None);
        assert!(!state.form.succeeded());
    }

    #[test]
    fn failed_load_keeps_previous_list() {
        let customers = vec![Customer {
            name: "Bob".into(),
            email: "bob@example.com".into(),
            age: 41,
        }];
        let mut state = SignupState::new();
        state.apply(Action::CustomersLoaded(customers.clone()));
        state.apply(Action::SubmitSucceeded);
        state.apply(Action::CustomersLoadFailed);

        assert_eq!(state.customers, customers);
        assert!(!state.needs_reload());
    }
}
