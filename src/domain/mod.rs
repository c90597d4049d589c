//! Domain aggregates exposed by the sign-up component.

pub mod customer;
pub mod types;
