//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// JS runtime used to evaluate `.js`/`.ts` config files
pub const DEFAULT_JS_RUNTIME: &str = "node";

/// Bundler used to compile `.ts` configs before evaluation
pub const DEFAULT_TS_TRANSPILER: &str = "bun";

/// Config file names probed by `find_config`, in priority order
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "tailwind.config.js",
    "tailwind.config.cjs",
    "tailwind.config.mjs",
    "tailwind.config.ts",
    "tailwind.config.json",
];

/// Extensions the JS runtime can evaluate as-is
pub const SCRIPT_EXTENSIONS: &[&str] = &["js", "cjs", "mjs"];

/// Extensions transpiled with the TS transpiler before evaluation
pub const TYPESCRIPT_EXTENSIONS: &[&str] = &["ts"];

/// Extensions parsed directly as JSON
pub const JSON_EXTENSIONS: &[&str] = &["json"];
