//! Error types for hopdir.
//!
//! Navigation itself never fails: refusals are reported as notices. These
//! errors come from the edges (path parsing, the host session, configuration
//! and logging setup).

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the session bridge, configuration and CLI layers.
#[derive(Debug, Error)]
pub enum HopError {
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Cannot change directory to {path:?}: {source}")]
    ChangeDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot represent {0:?} as a shell word")]
    ShellQuote(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to render configuration: {0}")]
    Render(String),
}

impl HopError {
    pub(crate) fn invalid_path(path: &str, reason: &str) -> Self {
        HopError::InvalidPath {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}
