//! Logging setup for embedding applications.
//!
//! The stores emit breadcrumbs through the `log` facade; the presentation
//! layer picks one of these initializers at startup (or installs its own
//! logger). Levels come from the usual RUST_LOG environment variable.

use eyre::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Log to stderr.
pub fn init() {
    env_logger::Builder::from_default_env().init();
}

/// Log to a file under the platform local-data directory, appending across
/// runs. Returns the log file path.
pub fn init_to_file() -> Result<PathBuf> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("trackr")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("trackr.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    log::info!("Logging initialized, writing to: {}", log_file.display());
    Ok(log_file)
}
