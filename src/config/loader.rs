//! Configuration loading from file system
//!
//! JSON configs are read directly. Script configs (`.js`, `.cjs`, `.mjs`)
//! are evaluated by an external JS runtime that prints the exported object
//! as JSON. `.ts` configs are built to CommonJS with `bun build` first.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;
use tracing::{debug, info, instrument, warn};

use super::defaults::{
    DEFAULT_CONFIG_FILES, JSON_EXTENSIONS, SCRIPT_EXTENSIONS, TYPESCRIPT_EXTENSIONS,
};
use super::types::{LoaderOptions, TailwindConfig};
use crate::error::{Result, ThemeConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ConfigFormat {
    Json,
    Script,
    TypeScript,
}

impl ConfigFormat {
    pub(super) fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if JSON_EXTENSIONS.contains(&ext.as_str()) {
            Ok(ConfigFormat::Json)
        } else if SCRIPT_EXTENSIONS.contains(&ext.as_str()) {
            Ok(ConfigFormat::Script)
        } else if TYPESCRIPT_EXTENSIONS.contains(&ext.as_str()) {
            Ok(ConfigFormat::TypeScript)
        } else {
            Err(ThemeConfigError::UnsupportedFormat(path.to_path_buf()))
        }
    }
}

/// Load a config file.
///
/// This function:
/// 1. Picks the format from the file extension
/// 2. Reads JSON directly, or evaluates a script config with the JS runtime
/// 3. Transpiles `.ts` configs to CommonJS first (`bun build`)
/// 4. Parses the JSON into a TailwindConfig
///
/// Any failure aborts the load; there is no fallback to defaults.
#[instrument(name = "load_config", skip(options), fields(path = %path.display()))]
pub fn load_config(path: &Path, options: &LoaderOptions) -> Result<TailwindConfig> {
    let format = ConfigFormat::from_path(path)?;

    let json = match format {
        ConfigFormat::Json => {
            std::fs::read_to_string(path).map_err(|source| ThemeConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?
        }
        ConfigFormat::Script => evaluate_script(path, path, options)?,
        ConfigFormat::TypeScript => {
            let build_dir = TempDir::new().map_err(|source| ThemeConfigError::Io {
                path: std::env::temp_dir(),
                source,
            })?;
            let compiled = build_dir.path().join("tailwind.config.cjs");
            transpile_typescript(path, &compiled, options)?;
            evaluate_script(&compiled, path, options)?
        }
    };

    let config = parse_config(&json, &path.display().to_string())?;
    info!(
        path = %path.display(),
        content_patterns = config.content.patterns().len(),
        plugins = config.plugins.len(),
        "Successfully loaded config"
    );
    Ok(config)
}

/// Parse config JSON. `origin` names the source in errors.
///
/// Duplicate keys resolve last-write-wins at every level, struct fields
/// included: the text is read into a `Value` tree first, whose maps keep
/// the last value, and only then mapped onto the typed config.
pub fn parse_config(json: &str, origin: &str) -> Result<TailwindConfig> {
    let parse_error = |source: serde_json::Error| ThemeConfigError::Parse {
        origin: origin.to_string(),
        source,
    };
    let value: Value = serde_json::from_str(json.trim()).map_err(parse_error)?;
    let config: TailwindConfig = serde_json::from_value(value).map_err(parse_error)?;

    for key in config.ignored.keys() {
        debug!(key = %key, origin = %origin, "Ignoring unrecognized top-level key");
    }
    if !config.plugins.is_empty() {
        warn!(
            count = config.plugins.len(),
            "Plugins are listed but not executed"
        );
    }
    Ok(config)
}

pub(super) fn transpile_command(
    source: &Path,
    outfile: &Path,
    options: &LoaderOptions,
) -> Command {
    let mut command = Command::new(&options.ts_transpiler);
    command
        .arg("build")
        .arg("--target=node")
        .arg("--format=cjs")
        .arg(source)
        .arg(format!("--outfile={}", outfile.display()));
    command
}

/// Compile a TypeScript config to a CommonJS file the JS runtime can require
fn transpile_typescript(path: &Path, outfile: &Path, options: &LoaderOptions) -> Result<()> {
    debug!(
        transpiler = %options.ts_transpiler,
        path = %path.display(),
        outfile = %outfile.display(),
        "Transpiling TypeScript config"
    );

    let output = transpile_command(path, outfile, options)
        .output()
        .map_err(|e| ThemeConfigError::Evaluate {
            path: path.to_path_buf(),
            runtime: options.ts_transpiler.clone(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!(
            transpiler = %options.ts_transpiler,
            stderr = %stderr,
            "TypeScript config build failed"
        );
        return Err(ThemeConfigError::Evaluate {
            path: path.to_path_buf(),
            runtime: options.ts_transpiler.clone(),
            message: stderr,
        });
    }
    Ok(())
}

/// Run the JS runtime on `script_path` and capture the exported config as
/// JSON text. Errors name `path`, the file the user pointed at.
fn evaluate_script(script_path: &Path, path: &Path, options: &LoaderOptions) -> Result<String> {
    let absolute = std::fs::canonicalize(script_path).map_err(|source| ThemeConfigError::Io {
        path: script_path.to_path_buf(),
        source,
    })?;

    // serde_json gives a correctly escaped JS string literal for the path
    let path_literal = serde_json::to_string(&absolute.to_string_lossy()).map_err(|source| {
        ThemeConfigError::Parse {
            origin: path.display().to_string(),
            source,
        }
    })?;
    let script = format!(
        "const m = require({}); console.log(JSON.stringify(m && m.__esModule ? m.default : (m.default ?? m)))",
        path_literal
    );

    debug!(runtime = %options.js_runtime, path = %absolute.display(), "Evaluating config script");

    let output = Command::new(&options.js_runtime)
        .arg("-e")
        .arg(&script)
        .output()
        .map_err(|e| ThemeConfigError::Evaluate {
            path: path.to_path_buf(),
            runtime: options.js_runtime.clone(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!(
            runtime = %options.js_runtime,
            stderr = %stderr,
            "Config evaluation failed"
        );
        return Err(ThemeConfigError::Evaluate {
            path: path.to_path_buf(),
            runtime: options.js_runtime.clone(),
            message: stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// First config file from DEFAULT_CONFIG_FILES present in `dir`
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}
