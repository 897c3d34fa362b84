//! Configuration module - Tailwind-style config files
//!
//! This module provides functionality for:
//! - Loading a config file (JSON directly, JS/TS through a JS runtime)
//! - Default values for loader settings
//! - Type definitions for the config object
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (TailwindConfig, ContentConfig, etc.)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{DEFAULT_CONFIG_FILES, DEFAULT_JS_RUNTIME, DEFAULT_TS_TRANSPILER};

pub use types::{ContentConfig, LoaderOptions, PluginRef, TailwindConfig};

pub use loader::{find_config, load_config, parse_config};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
