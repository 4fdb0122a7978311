//! Core error types for moodlog-core.
//!
//! The analytics themselves never fail; errors only come from the edges
//! (reading an entry source, loading or saving configuration).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for moodlog-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Entry source errors
    #[error("Entry source error: {0}")]
    Source(#[from] SourceError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while reading entries from a source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Failed to read the backing file
    #[error("Failed to read entries from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Payload is not valid JSON
    #[error("Malformed entry payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Payload is JSON but neither an entry array nor a user envelope
    #[error("Unexpected payload shape: expected {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Home/config directory could not be prepared
    #[error("Failed to prepare config directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
