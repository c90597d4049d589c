//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce the sign-up invariants (bounded name length,
//! validated email, age range) so that once a value reaches the create
//! payload it can be treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// Longest accepted customer name, in characters.
pub const MAX_NAME_CHARS: usize = 15;

/// Oldest accepted customer age.
pub const MAX_AGE: u32 = 125;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string was empty.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string exceeded the allowed number of characters.
    #[error("value must be at most {0} characters")]
    TooLong(usize),
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided number is zero.
    #[error("value must be greater than zero")]
    NonPositive,
    /// Provided number exceeded the allowed maximum.
    #[error("value must be at most {0}")]
    TooLarge(u32),
}

/// Validates an email string without altering it.
fn check_email(email: String) -> Result<String, TypeConstraintError> {
    if email.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    if email.validate_email() {
        Ok(email)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Display name of a customer, non-empty and at most [`MAX_NAME_CHARS`] long.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerName(String);

impl CustomerName {
    /// Validates a name; the value is kept as typed.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, TypeConstraintError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(TypeConstraintError::TooLong(MAX_NAME_CHARS));
        }
        Ok(Self(name))
    }

    /// Borrow the name as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CustomerName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CustomerName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CustomerName> for String {
    fn from(value: CustomerName) -> Self {
        value.0
    }
}

/// Validated customer email address, kept as typed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerEmail(String);

impl CustomerEmail {
    /// Validates an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        check_email(email.into()).map(Self)
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CustomerEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CustomerEmail {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CustomerEmail> for String {
    fn from(value: CustomerEmail) -> Self {
        value.0
    }
}

/// Customer age in whole years, between 1 and [`MAX_AGE`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub struct CustomerAge(u32);

impl CustomerAge {
    /// Creates an age ensuring it is positive and within range.
    pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
        match value {
            0 => Err(TypeConstraintError::NonPositive),
            v if v > MAX_AGE => Err(TypeConstraintError::TooLarge(MAX_AGE)),
            v => Ok(Self(v)),
        }
    }

    /// Returns the raw `u32` backing this age.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for CustomerAge {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CustomerAge> for u32 {
    fn from(value: CustomerAge) -> Self {
        value.0
    }
}
