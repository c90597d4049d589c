//! Sign-up form values and their per-field validators.
//!
//! Every validator is a pure function from the raw input to the first failing
//! rule's message, so the same rules back both live (change/blur) validation
//! and the final check before submitting.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::customer::NewCustomer;
use crate::domain::types::{
    CustomerAge, CustomerEmail, CustomerName, MAX_AGE, TypeConstraintError,
};
use crate::forms::FormError;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email";
pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_LONG: &str = "Name must be 15 characters or less";
pub const AGE_REQUIRED: &str = "Age is required";
pub const AGE_NOT_A_NUMBER: &str = "Please enter a valid number";
pub const AGE_NOT_POSITIVE: &str = "Age must be positive";
pub const AGE_NOT_INTEGER: &str = "Age must be a whole number";
pub const AGE_TOO_HIGH: &str = "Age must be 125 or less";

/// Input fields of the sign-up form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Name,
    Age,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Email, Field::Name, Field::Age];

    /// Form field name, also used as the input `id`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Name => "name",
            Field::Age => "age",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Field::Email => "Email Address",
            Field::Name => "Name",
            Field::Age => "Age",
        }
    }

    /// HTML input type used to render the field.
    pub const fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Name => "text",
            Field::Age => "number",
        }
    }

    /// Runs the validator attached to this field.
    pub fn validate(self, value: &str) -> Option<&'static str> {
        match self {
            Field::Email => validate_email(value),
            Field::Name => validate_name(value),
            Field::Age => validate_age(value),
        }
    }
}

/// Checks the email field: required and syntactically valid.
pub fn validate_email(value: &str) -> Option<&'static str> {
    match CustomerEmail::new(value) {
        Ok(_) => None,
        Err(TypeConstraintError::EmptyString) => Some(EMAIL_REQUIRED),
        Err(_) => Some(EMAIL_INVALID),
    }
}

/// Checks the name field: required and at most 15 characters.
pub fn validate_name(value: &str) -> Option<&'static str> {
    match CustomerName::new(value) {
        Ok(_) => None,
        Err(TypeConstraintError::EmptyString) => Some(NAME_REQUIRED),
        Err(_) => Some(NAME_TOO_LONG),
    }
}

/// Checks the age field: required, numeric, positive, whole and at most 125.
pub fn validate_age(value: &str) -> Option<&'static str> {
    parse_age(value).err()
}

/// Parses the raw age input, reporting the first failing rule.
pub fn parse_age(value: &str) -> Result<CustomerAge, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AGE_REQUIRED);
    }

    let number = value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(AGE_NOT_A_NUMBER)?;

    if number <= 0.0 {
        return Err(AGE_NOT_POSITIVE);
    }
    if number.fract() != 0.0 {
        return Err(AGE_NOT_INTEGER);
    }
    if number > f64::from(MAX_AGE) {
        return Err(AGE_TOO_HIGH);
    }

    CustomerAge::new(number as u32).map_err(|_| AGE_TOO_HIGH)
}

fn field_error(code: &'static str, message: Option<&'static str>) -> Result<(), ValidationError> {
    match message {
        None => Ok(()),
        Some(message) => {
            let mut err = ValidationError::new(code);
            err.message = Some(Cow::Borrowed(message));
            Err(err)
        }
    }
}

fn check_email(value: &str) -> Result<(), ValidationError> {
    field_error("email", validate_email(value))
}

fn check_name(value: &str) -> Result<(), ValidationError> {
    field_error("name", validate_name(value))
}

fn check_age(value: &str) -> Result<(), ValidationError> {
    field_error("age", validate_age(value))
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
/// Raw values of the sign-up form, exactly as typed.
pub struct SignupForm {
    #[validate(custom(function = "check_email"))]
    pub email: String,
    #[validate(custom(function = "check_name"))]
    pub name: String,
    /// Kept as text so non-numeric input can be reported.
    #[validate(custom(function = "check_age"))]
    pub age: String,
}

impl SignupForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Name => &self.name,
            Field::Age => &self.age,
        }
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Email => self.email = value,
            Field::Name => self.name = value,
            Field::Age => self.age = value,
        }
    }

    /// First error message of every invalid field.
    pub fn field_errors(&self) -> BTreeMap<Field, &'static str> {
        Field::ALL
            .into_iter()
            .filter_map(|field| field.validate(self.value(field)).map(|msg| (field, msg)))
            .collect()
    }

    /// Consumes the form into `(field, value)` pairs in display order.
    pub fn into_fields(self) -> [(Field, String); 3] {
        [
            (Field::Email, self.email),
            (Field::Name, self.name),
            (Field::Age, self.age),
        ]
    }
}

impl TryFrom<&SignupForm> for NewCustomer {
    type Error = FormError;

    fn try_from(form: &SignupForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let email = CustomerEmail::new(form.email.as_str()).map_err(|_| FormError::InvalidEmail)?;
        let name = CustomerName::new(form.name.as_str()).map_err(|_| FormError::InvalidName)?;
        let age = parse_age(&form.age).map_err(|_| FormError::InvalidAge)?;

        Ok(NewCustomer::new(name, email, age))
    }
}
