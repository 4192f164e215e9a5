//! Error types for `astro_cli`.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::Scope;

/// Primary error type for astro operations.
#[derive(Error, Debug)]
pub enum AstroError {
    // === Configuration Errors ===
    /// Creating, reading or writing a config file failed.
    #[error("Error {action} config in {scope} dir: {source}")]
    ConfigIo {
        action: &'static str,
        scope: Scope,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file exists but is not valid YAML for the known keys.
    #[error("Error parsing config file {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// Searching upward for the project directory failed.
    #[error("Error searching for project dir: {0}")]
    ProjectSearch(#[source] std::io::Error),

    /// A project-scoped write was requested outside any project.
    #[error("You are attempting to set a project config outside of a project directory")]
    NotInProject,

    /// The dotted path does not name a registered setting.
    #[error("Config key not found: {key}")]
    UnknownKey { key: String },

    // === API Errors ===
    /// Houston call failed; the server message is passed through unchanged.
    #[error(transparent)]
    Houston(#[from] houston::HoustonError),

    // === I/O Errors ===
    /// File system or output I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AstroError {
    #[must_use]
    pub fn config_io(
        action: &'static str,
        scope: Scope,
        dir: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::ConfigIo {
            action,
            scope,
            dir: dir.into(),
            source,
        }
    }

    /// Raw server message when the failure came back from Houston as a
    /// GraphQL error.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Houston(err) => err.server_message(),
            _ => None,
        }
    }
}

/// Result type using `AstroError`.
pub type Result<T> = std::result::Result<T, AstroError>;
