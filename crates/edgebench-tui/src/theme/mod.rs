//! Centralized theme system
//!
//! - `palette`: Color sets for the light (github) and dark (monokai) schemes
//! - `styles`: Semantic style builder functions over a palette

pub mod palette;
pub mod styles;

pub use palette::Palette;
