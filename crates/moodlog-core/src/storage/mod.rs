mod config;

pub use config::{
    offset_from_minutes, AnalyticsConfig, Config, LoggingConfig, ReportingZone, SourceConfig,
};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/moodlog[-dev]/` based on MOODLOG_ENV, creating it.
///
/// Set MOODLOG_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = data_dir_path();
    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// Location of the data directory without touching the filesystem.
pub fn data_dir_path() -> PathBuf {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("MOODLOG_ENV").unwrap_or_else(|_| "production".to_string());

    if env == "dev" {
        base_dir.join("moodlog-dev")
    } else {
        base_dir.join("moodlog")
    }
}
