//! Runtime models that are not part of the component itself.

pub mod config;
