//! Per-user locations of the console's files

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "umh";

/// Holds `settings.json`
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|base| base.join(APP_DIR))
}

pub fn data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .context("Could not determine data directory")
        .map(|base| base.join(APP_DIR))
}

/// Rolling JSON logs written by the console
pub fn logs_dir() -> Result<PathBuf> {
    data_dir().map(|dir| dir.join("logs"))
}
