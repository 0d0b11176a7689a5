//! File-based structured logging
//!
//! The terminal belongs to the UI, so logs go to JSON lines under
//! `~/.flightfare-tui/logs/`.

use crate::config::Config;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "flightfare_tui=info";

/// Directory log files are written to
pub fn log_dir() -> PathBuf {
    Config::config_dir()
        .map(|dir| dir.join("logs"))
        .unwrap_or_else(|| PathBuf::from(".flightfare-tui/logs"))
}

/// Filter from the CLI, then `RUST_LOG`, then the default
fn build_filter(cli_filter: Option<&str>) -> EnvFilter {
    cli_filter
        .and_then(|f| EnvFilter::try_new(f).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Returns the log file path, or `None` when
/// the file could not be opened and logging stays disabled.
pub fn setup_logging(cli_filter: Option<&str>) -> Option<PathBuf> {
    let dir = log_dir();
    fs::create_dir_all(&dir).ok()?;

    let path = dir.join(format!(
        "flightfare-tui-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(build_filter(cli_filter))
        .try_init()
        .ok()?;

    Some(path)
}
