//! Terminal presentation.
//!
//! Colours for lint results live here so the core pipeline stays free of
//! presentation concerns.

pub mod theme;

pub use theme::{should_use_colors, LintTheme};
