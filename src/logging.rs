//! 日志初始化
//!
//! The battle view owns the terminal, so logs only go to a file. Without a
//! log file no subscriber is installed and `tracing` macros are no-ops.
//! Filtering follows `RUST_LOG` and defaults to `info`.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use error::GameError;
use tracing_subscriber::EnvFilter;

fn open_log_file(path: &Path) -> Result<File, GameError> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Installs a global file subscriber when `path` is given.
pub fn init(path: Option<&Path>) -> Result<(), GameError> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = open_log_file(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| GameError::InvalidConfig(format!("logging already initialised: {}", e)))
}
