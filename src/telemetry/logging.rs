//! Logging configuration and initialization
//!
//! Structured logging with tracing: compact console output for development,
//! JSON for log aggregation, and an optional daily-rotated log file.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Env var holding the filter directive
pub const LOG_FILTER_VAR: &str = "TRYON_LOG";
/// Env var selecting the output format (`json` or `compact`)
pub const LOG_FORMAT_VAR: &str = "TRYON_LOG_FORMAT";

/// Console line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    /// Parse a format name, `None` when unrecognized
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "compact" | "text" | "pretty" => Some(LogFormat::Compact),
            _ => None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Enable console output (default: true)
    pub console_enabled: bool,
    /// Directory for daily-rotated log files; `None` disables file logging
    pub file_dir: Option<PathBuf>,
    pub format: LogFormat,
    /// Filter used when neither `TRYON_LOG` nor `RUST_LOG` is set
    pub default_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            console_enabled: true,
            file_dir: None,
            format: LogFormat::Compact,
            default_level: "info,tower_http=debug".to_string(),
        }
    }
}

impl LogConfig {
    /// Apply `TRYON_LOG_FORMAT` over the configured format
    pub fn effective_format(&self) -> LogFormat {
        std::env::var(LOG_FORMAT_VAR)
            .ok()
            .and_then(|v| LogFormat::from_name(&v))
            .unwrap_or(self.format)
    }
}

/// Initialize the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// life of the process. `TRYON_LOG` takes precedence over `RUST_LOG`.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_env(LOG_FILTER_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(&config.default_level))?;

    let format = config.effective_format();

    let mut file_guard = None;
    let file_layer = match &config.file_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, "tryon-server.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            file_guard = Some(guard);
            Some(
                fmt::layer()
                    .with_writer(writer)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    let (json_layer, compact_layer) = match (config.console_enabled, format) {
        (false, _) => (None, None),
        (true, LogFormat::Json) => (
            Some(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            ),
            None,
        ),
        (true, LogFormat::Compact) => (
            None,
            Some(fmt::layer().with_target(true).with_thread_ids(false).compact()),
        ),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(json_layer)
        .with(compact_layer)
        .try_init()?;

    tracing::info!(
        target: "tryon_server",
        version = env!("CARGO_PKG_VERSION"),
        json = format == LogFormat::Json,
        file_dir = ?config.file_dir,
        "Logging initialized"
    );

    Ok(file_guard)
}
