//! Configuration type definitions
//!
//! The shape of a Tailwind-style config object once it has been turned
//! into JSON.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::theme::{resolve_theme, Theme, ThemeSection};

use super::defaults::{DEFAULT_JS_RUNTIME, DEFAULT_TS_TRANSPILER};

// ============================================
// CONTENT
// ============================================

/// The `content` key: a flat list of globs, or `{ files, relative }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentConfig {
    Paths(Vec<String>),
    Detailed {
        #[serde(default)]
        files: Vec<String>,
        /// Resolve globs against the config file's directory instead of the cwd
        #[serde(default)]
        relative: bool,
    },
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig::Paths(Vec::new())
    }
}

impl ContentConfig {
    pub fn patterns(&self) -> &[String] {
        match self {
            ContentConfig::Paths(paths) => paths,
            ContentConfig::Detailed { files, .. } => files,
        }
    }

    pub fn is_relative(&self) -> bool {
        matches!(self, ContentConfig::Detailed { relative: true, .. })
    }

    /// Directory the globs are anchored at
    pub fn base_dir(&self, config_path: &Path, cwd: &Path) -> PathBuf {
        if self.is_relative() {
            config_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf())
        } else {
            cwd.to_path_buf()
        }
    }
}

// ============================================
// PLUGINS
// ============================================

/// A plugin entry, kept verbatim. Plugins are not executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginRef {
    Name(String),
    Inline(Value),
}

// ============================================
// TOP-LEVEL CONFIG
// ============================================

/// A parsed config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TailwindConfig {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub theme: ThemeSection,
    #[serde(default)]
    pub plugins: Vec<PluginRef>,
    /// Top-level keys this loader does not understand (darkMode, prefix, ...)
    #[serde(flatten)]
    pub ignored: IndexMap<String, Value>,
}

impl TailwindConfig {
    /// Merge this config's theme onto the built-in defaults
    pub fn resolved_theme(&self) -> Result<Theme> {
        self.resolve_onto(&Theme::default())
    }

    pub fn resolve_onto(&self, base: &Theme) -> Result<Theme> {
        resolve_theme(base, &self.theme)
    }
}

// ============================================
// LOADER OPTIONS
// ============================================

/// Options controlling how config files are loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Program used to evaluate script configs (`node`, `bun`, ...)
    pub js_runtime: String,
    /// Bundler that compiles `.ts` configs to CommonJS (`bun`)
    pub ts_transpiler: String,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        LoaderOptions {
            js_runtime: DEFAULT_JS_RUNTIME.to_string(),
            ts_transpiler: DEFAULT_TS_TRANSPILER.to_string(),
        }
    }
}
