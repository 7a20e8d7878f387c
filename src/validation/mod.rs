//! Form validation engine.
//!
//! This module contains:
//! - Validation rules and the built-in rule set (email, lengths, blank checks)
//! - Typed form schemas and per-form field state
//! - Form error handling

mod error;
mod form;
pub mod rules;

pub use error::FormError;
pub use form::{
    FieldConfig, Form, FormFields, FormSchema, FormValues, Interaction, REQUIRED_MESSAGE,
};
pub use rules::Rule;
