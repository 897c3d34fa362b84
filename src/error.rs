use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, warn};

/// Error severity for CLI reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning, // bad input the user can fix in place
    Error,   // config cannot be used
}

/// Domain-specific errors for theme config loading
#[derive(Error, Debug)]
pub enum ThemeConfigError {
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config '{origin}': {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to evaluate '{}' with {runtime}: {message}", .path.display())]
    Evaluate {
        path: PathBuf,
        runtime: String,
        message: String,
    },

    #[error("Unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Invalid color at '{key}': {value:?}")]
    InvalidColor { key: String, value: String },

    #[error("Invalid content glob '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("No config file found in {}", .0.display())]
    NotFound(PathBuf),
}

impl ThemeConfigError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io { .. } => ErrorSeverity::Error,
            Self::Parse { .. } => ErrorSeverity::Error,
            Self::Evaluate { .. } => ErrorSeverity::Error,
            Self::UnsupportedFormat(_) => ErrorSeverity::Error,
            Self::InvalidColor { .. } => ErrorSeverity::Error,
            Self::InvalidGlob { .. } => ErrorSeverity::Error,
            Self::NotFound(_) => ErrorSeverity::Error,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io { path, .. } => format!("Could not read {}", path.display()),
            Self::Parse { origin, source } => {
                format!("{} is not valid config ({})", origin, source)
            }
            Self::Evaluate { runtime, .. } => {
                format!("Config could not be evaluated with {}", runtime)
            }
            Self::UnsupportedFormat(path) => format!(
                "Unsupported config file {} (expected .js, .cjs, .mjs, .ts or .json)",
                path.display()
            ),
            Self::InvalidColor { key, value } => {
                format!("'{}' is not a valid color for {}", value, key)
            }
            Self::InvalidGlob { pattern, .. } => format!("Bad content pattern: {}", pattern),
            Self::NotFound(dir) => format!("No tailwind config in {}", dir.display()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ThemeConfigError>;

/// Extension trait for logging recoverable failures with caller location.
///
/// ```ignore
/// use tw_theme::error::ResultExt;
///
/// let text = std::fs::read_to_string(&path).warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
