//! Style configuration for the utility-CSS framework.
//!
//! Holds the palette, font stacks and content globs the framework reads at its
//! own build time, and renders them as a `tailwind.config.js` module.

pub mod config;
pub mod render;

pub use config::{StyleConfig, StyleError};
pub use render::render_tailwind_config;
