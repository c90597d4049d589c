//! Async effects of the sign-up component.

pub mod signup;
