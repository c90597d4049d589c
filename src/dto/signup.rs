use serde::Serialize;

use crate::domain::customer::Customer;
use crate::forms::signup::Field;
use crate::state::{SUBMIT_SUCCESS_MESSAGE, SignupState};

/// One labeled input of the form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldView {
    pub id: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub value: String,
    /// Only set once the field has been touched.
    pub error: Option<&'static str>,
}

/// Data required to render the sign-up template.
#[derive(Debug, Clone, Serialize)]
pub struct SignupPageData {
    pub customers: Vec<Customer>,
    pub fields: Vec<FieldView>,
    pub success_message: Option<&'static str>,
    pub error_message: Option<String>,
    pub submit_disabled: bool,
    pub submit_label: &'static str,
}

impl From<&SignupState> for SignupPageData {
    fn from(state: &SignupState) -> Self {
        let form = &state.form;

        let fields = Field::ALL
            .into_iter()
            .map(|field| FieldView {
                id: field.as_str(),
                label: field.label(),
                input_type: field.input_type(),
                value: form.values.value(field).to_string(),
                error: form.visible_error(field),
            })
            .collect();

        Self {
            customers: state.customers.clone(),
            fields,
            success_message: form.succeeded().then_some(SUBMIT_SUCCESS_MESSAGE),
            error_message: form.error_message.clone(),
            submit_disabled: !form.can_submit(),
            submit_label: if form.is_submitting() {
                "Submitting..."
            } else {
                "Submit"
            },
        }
    }
}
