//! Theme module - Design tokens and how a config changes them
//!
//! This module provides functionality for:
//! - The built-in default theme
//! - Theme section types as written in a config (`theme`, `theme.extend`)
//! - Color token validation
//! - Merging a theme section onto a base theme
//! - Structural lint for keyframes and animations
//!
//! # Module Structure
//!
//! - `defaults` - Default colors, animations and keyframes
//! - `types` - Theme struct definitions
//! - `color` - Color token validation
//! - `merge` - Replace/extend merge onto a base theme
//! - `lint` - Keyframes and animation diagnostics

pub mod color;
mod defaults;
pub mod lint;
mod merge;
mod types;

pub use types::{ColorValue, KeyframeNode, Keyframes, Palette, Theme, ThemeExtension, ThemeSection};

pub use color::{is_valid_color, validate_palette};
pub use lint::{lint_theme, ThemeIssue};
pub use merge::resolve_theme;

pub use defaults::default_theme;

#[cfg(test)]
pub use defaults::{DEFAULT_ANIMATIONS, DEFAULT_BASE_COLORS, DEFAULT_PALETTES};

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;
