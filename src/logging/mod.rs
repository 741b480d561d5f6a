//! Structured logging setup using tracing
//!
//! Provides console logging (plain or JSON) with an optional
//! daily-rotated JSON file, driven by [`LoggingConfig`].
//!
//! # Example
//!
//! ```no_run
//! use veil::config::LoggingConfig;
//! use veil::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging(&config).expect("Failed to initialize logging");
//! tracing::info!("engine starting");
//! ```

use crate::config::LoggingConfig;
use crate::domain::{Result, VeilError};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

/// Guard that must be kept alive for the duration of the program
/// so buffered file logs are flushed on shutdown
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initializes the global tracing subscriber from configuration.
///
/// `RUST_LOG` takes precedence over the configured level when set.
///
/// # Errors
///
/// Returns a configuration error for an unknown log level or when a
/// global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard> {
    validate_level(&config.level)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("veil={}", config.level)));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    let console_layer = if config.json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().boxed()
    };
    layers.push(console_layer);

    let mut file_guard = None;
    if let Some(ref directory) = config.directory {
        let appender = rolling::daily(directory, "veil.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        layers.push(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed(),
        );
        file_guard = Some(guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .map_err(|e| VeilError::Configuration(format!("Failed to initialize logging: {e}")))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

fn validate_level(level: &str) -> Result<()> {
    match level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        other => Err(VeilError::Configuration(format!(
            "Invalid log level: {other}"
        ))),
    }
}
