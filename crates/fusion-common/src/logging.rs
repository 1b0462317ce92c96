//! Logging configuration using tracing

use tracing_subscriber::{fmt, EnvFilter};

/// Log format options
#[derive(Debug, Clone, Copy, Default)]
pub enum LogFormat {
    /// Compact single-line format (default)
    #[default]
    Compact,
    /// JSON format (for log aggregation)
    Json,
}

/// Initialize the global tracing subscriber at info level, compact format
pub fn init_logging() {
    init_logging_with("info", LogFormat::Compact);
}

/// Initialize the global tracing subscriber with explicit filter and format
///
/// `RUST_LOG` takes precedence over `directives` when set. A second call
/// in the same process is a no-op, so test setup can call this freely.
pub fn init_logging_with(directives: &str, format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    let builder = fmt().with_env_filter(filter).with_target(true);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}
