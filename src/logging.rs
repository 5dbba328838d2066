//! Logging System
//!
//! Structured logging with `tracing`. Events go to stderr, or to a log file
//! when one is configured. The interactive browser must never write logs to
//! the terminal it draws on, so it passes `Destination::FileOnly`.

use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::LoggingConfig;
use crate::error::{CatalogError, CatalogResult};

/// Where log events may be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Configured file, else stderr
    FileOrStderr,
    /// Configured file, else nothing
    FileOnly,
}

/// Filter directive: `-v` count wins, then the configured level, then `warn`.
pub fn filter_directive(verbose: u8, config: &LoggingConfig) -> String {
    match verbose {
        0 => config
            .level
            .clone()
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| "warn".to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init_logging(
    verbose: u8,
    config: &LoggingConfig,
    destination: Destination,
    use_color: bool,
) -> CatalogResult<()> {
    let directive = filter_directive(verbose, config);
    let filter = EnvFilter::try_new(&directive).map_err(|e| CatalogError::InvalidConfig {
        file: "logging.level".into(),
        message: format!("bad filter '{}': {}", directive, e),
    })?;

    let base = Registry::default().with(filter);

    match (&config.file, destination) {
        (Some(path), _) => {
            let file = open_log_file(path)?;
            let _ = base
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init();
        }
        (None, Destination::FileOrStderr) => {
            let _ = base
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_ansi(use_color)
                        .with_writer(std::io::stderr),
                )
                .try_init();
        }
        (None, Destination::FileOnly) => {
            let _ = Registry::default().with(EnvFilter::new("off")).try_init();
        }
    }

    Ok(())
}

fn open_log_file(path: &Path) -> CatalogResult<std::fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    Ok(file)
}
