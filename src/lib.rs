//! tw-theme - Tailwind-style theme config loader
//!
//! Loads a `tailwind.config.{js,json,...}` file, merges its theme section
//! onto a built-in default theme, validates colors, flags malformed
//! keyframes, and resolves the content globs that decide which files are
//! scanned for class usage.

pub mod config;
pub mod content;
pub mod css;
pub mod error;
pub mod logging;
pub mod project;
pub mod theme;

pub use config::{load_config, LoaderOptions, TailwindConfig};
pub use error::{Result, ThemeConfigError};
pub use project::Project;
pub use theme::{resolve_theme, Theme};
