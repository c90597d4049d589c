//! Form definitions backing the sign-up component.

use thiserror::Error;
use validator::ValidationErrors;

pub mod signup;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid age")]
    InvalidAge,
}
