//! Reusable UI widget components.
//!
//! This module contains the crystal glyph, the decorative fireflies and
//! styling utilities.

pub mod crystal;
pub mod fireflies;
pub mod styling;
