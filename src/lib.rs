//! Terminal portfolio with a dark/light theme store and a schema-driven form
//! validation engine behind its contact form.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod logger;
pub mod relay;
pub mod state;
pub mod theme;
pub mod ui;
pub mod validation;
