//! Tracing infrastructure for diagnostics
//!
//! Provides structured logging for theme resolution and persistence.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=aetherion::theme=debug` - theme resolution only
//! - `RUST_LOG=aetherion::theme::store=debug` - override store only
//!
//! # Log Files
//!
//! Logs are written to `~/.config/aetherion/logs/aetherion.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use std::path::PathBuf;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `logs_dir` when given, else `~/.config/aetherion/logs/`, with daily rotation.
pub fn init(logs_dir: Option<PathBuf>) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let logs_dir = match logs_dir {
        Some(dir) => std::fs::create_dir_all(&dir)
            .map(|()| dir)
            .map_err(|e| format!("Failed to create logs directory: {}", e)),
        None => crate::config_paths::ensure_logs_dir(),
    };

    // File layer - always debug level for troubleshooting
    let file_layer = match logs_dir {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "aetherion.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
