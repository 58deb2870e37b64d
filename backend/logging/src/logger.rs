//! Structured Logger
//!
//! Wraps `tracing` to provide console output plus a timestamp-named
//! diagnostic log file. The file receives only error-level entries (failed
//! extractions and failed saves); everything else stays on the console.

use std::path::Path;

use chrono::Local;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Name of the log file for a process started now, e.g. `2026-08-25_14:03:59.log`.
fn log_file_name() -> String {
    format!("{}.log", Local::now().format("%Y-%m-%d_%H:%M:%S"))
}

/// Initialize the global logger with a console layer and the error-level
/// file layer. Used by the CLI.
pub fn init_logger<P: AsRef<Path>>(log_dir: P, level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true);

    let _ = std::fs::create_dir_all(log_dir.as_ref());
    let file_appender = tracing_appender::rolling::never(log_dir, log_file_name());
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_filter(LevelFilter::ERROR);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Initialize file-only logging. Used by the TUI, which owns the terminal
/// screen and must not have log lines drawn over it.
pub fn init_file_logger<P: AsRef<Path>>(log_dir: P) {
    let _ = std::fs::create_dir_all(log_dir.as_ref());
    let file_appender = tracing_appender::rolling::never(log_dir, log_file_name());
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_filter(LevelFilter::ERROR);

    let _ = tracing_subscriber::registry().with(file_layer).try_init();
}
