//! DTO modules that bridge the view-model with templates.

pub mod signup;
