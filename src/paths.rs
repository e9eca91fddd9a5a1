//! Common paths for eventmap data storage
//!
//! All eventmap data is stored under ~/.config/eventmap/ on all platforms:
//! - config.toml - User configuration
//! - eventmap.sqlite - Key-value store (favorites, theme, language)

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Directory name under ~/.config
const APP_DIR: &str = "eventmap";

/// Get the eventmap data directory (~/.config/eventmap/)
pub fn app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let app_dir = home.join(".config").join(APP_DIR);
    fs::create_dir_all(&app_dir).context("Failed to create eventmap directory")?;
    Ok(app_dir)
}

/// Get the config file path (~/.config/eventmap/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(app_dir()?.join("config.toml"))
}

/// Get the database file path (~/.config/eventmap/eventmap.sqlite)
pub fn database_path() -> Result<PathBuf> {
    Ok(app_dir()?.join("eventmap.sqlite"))
}
