//! File logging via tracing
//!
//! The terminal belongs to the chart while it runs, so every log line goes
//! to `<data_local_dir>/isotype/logs/isotype.log` instead.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable holding an `EnvFilter` directive string
pub const LOG_ENV: &str = "ISOTYPE_LOG";

/// Directives used when `ISOTYPE_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "isotype=info,warn";

/// Directives used when the caller asks for verbose output
pub const VERBOSE_FILTER: &str = "isotype=debug,info";

const LOG_FILE: &str = "isotype.log";

/// Install the global file subscriber
///
/// `ISOTYPE_LOG` always wins; otherwise `verbose` picks between the default
/// and verbose directives.
///
/// # Examples
/// ```bash
/// ISOTYPE_LOG=debug isotype
/// ISOTYPE_LOG=isotype_app=trace isotype export --step federal_split
/// ```
pub fn init(verbose: bool) -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::NEVER, &log_dir, LOG_FILE);
    let env_filter = build_filter(std::env::var(LOG_ENV).ok().as_deref(), verbose);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::config(format!("Logging already initialized: {}", e)))?;

    tracing::info!(
        "isotype {} starting, logging to {}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );
    Ok(())
}

/// Filter from an `ISOTYPE_LOG` value, falling back on missing or bad directives
pub fn build_filter(env_value: Option<&str>, verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    env_value
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Directory the log file lives in
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("isotype")
        .join("logs")
}

/// Full path of the log file
pub fn log_file() -> PathBuf {
    log_directory().join(LOG_FILE)
}
