//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds all application data
//! - Navigation types (Page, Focus, menu)
//! - Contact form types (ContactField, SubmitStatus, schema)
//! - State error handling

mod error;
mod form;
mod navigation;

pub use error::StateError;
pub use form::{contact_record, contact_schema, ContactField, SubmitStatus};
pub use navigation::{Focus, Page, MENU_PAGES};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::{State, INTRO_DELAY};
