//! Structured logging: human-readable stderr, optional JSONL file.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tw_theme::logging::{self, LogOptions};
//!
//! // Keep the guard alive for the duration of the program
//! let _guard = logging::init(&LogOptions::default());
//!
//! tracing::info!(event_type = "config_loaded", path = "tailwind.config.js", "Loaded");
//! ```
//!
//! # JSONL Output Format
//!
//! With a log file set, each line is a JSON object:
//! ```json
//! {"timestamp":"2026-10-17T10:30:45.123Z","level":"INFO","target":"tw_theme::config::loader","fields":{"message":"Successfully loaded config","path":"tailwind.config.js"}}
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Default filter when RUST_LOG is unset
const DEFAULT_FILTER: &str = "info";
const VERBOSE_FILTER: &str = "debug";

/// Target for records written to the log file only. The CLI prints its own
/// message for these on stderr.
pub const FILE_ONLY_TARGET: &str = "tw_theme::report";

/// JSONL timestamps: UTC, millisecond precision
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

fn shown_on_stderr(target: &str) -> bool {
    target != FILE_ONLY_TARGET
}

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Log at debug level unless RUST_LOG says otherwise
    pub verbose: bool,
    /// Append JSONL records to this file
    pub log_file: Option<PathBuf>,
}

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging.
///
/// Returns a guard that MUST be kept alive for the duration of the program.
/// A log file that cannot be opened is reported on stderr and skipped.
pub fn init(options: &LogOptions) -> LoggingGuard {
    let default_filter = if options.verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let (file_writer, file_guard) = match options.log_file.as_ref().and_then(open_log_file) {
        Some(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    // JSONL layer for file output
    let json_layer = file_writer.map(|writer| {
        fmt::layer()
            .json()
            .with_writer(writer)
            .with_timer(fmt::time::UtcTime::new(TIMESTAMP_FORMAT))
            .with_target(true)
            .with_level(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .with_span_events(FmtSpan::NONE)
    });

    // Pretty layer for stderr; stdout is reserved for command output
    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .compact()
        .with_filter(filter_fn(|metadata| shown_on_stderr(metadata.target())));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();

    tracing::debug!(
        event_type = "app_lifecycle",
        action = "started",
        log_file = ?options.log_file,
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

fn open_log_file(path: &PathBuf) -> Option<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("[LOGGING] Failed to create log directory: {}", e);
            return None;
        }
    }
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("[LOGGING] Failed to open log file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_timestamp_format() {
        let at = datetime!(2026-10-17 10:30:45.123456 UTC);
        assert_eq!(at.format(TIMESTAMP_FORMAT).unwrap(), "2026-10-17T10:30:45.123Z");
    }

    #[test]
    fn test_file_only_records_skip_stderr() {
        assert!(!shown_on_stderr(FILE_ONLY_TARGET));
        assert!(shown_on_stderr("tw_theme::config::loader"));
    }
}
