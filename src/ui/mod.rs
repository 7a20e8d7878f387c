//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Page rendering and layout
//! - Palettes for the dark and light themes
//! - Widget components (fireflies, crystals, styling)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
pub mod widgets;

pub use render::render;
pub use theme::{crystal_colors, ColorSpec, CrystalColors, CrystalKind, Palette};
