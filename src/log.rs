// src/log.rs
//
// Logging goes through `tracing`. The app installs one subscriber at startup
// that appends plain-text lines to LOG_FILE; the logf!/logd!/loge! macros are
// the only call sites the rest of the crate uses.

use std::{
    fs::{self, OpenOptions},
    io,
    path::Path,
    sync::Mutex,
};

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILE, LOG_FILTER};

#[doc(hidden)]
pub use tracing;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("cannot open log file {path}: {source}")]
    Open { path: String, source: io::Error },
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("logger already initialized")]
    AlreadySet,
}

/// Install the file logger. `RUST_LOG` overrides the default filter.
pub fn init() -> Result<(), LogError> {
    init_at(Path::new(LOG_FILE))
}

pub fn init_at(path: &Path) -> Result<(), LogError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = fs::create_dir_all(parent);
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::Open { path: path.display().to_string(), source })?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(LOG_FILTER)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|_| LogError::AlreadySet)
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
