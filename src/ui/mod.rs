//! Terminal presentation helpers.
//!
//! - [`theme`] - Styles for rendered headers, keys and rule ids

pub mod theme;

pub use theme::{should_use_colors, ZooCfgTheme};
