use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors raised by a clipboard backend
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The external clipboard program could not be started (usually not installed)
    #[error("{program} could not be started: {source}")]
    BackendUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external clipboard program ran but reported failure
    #[error("{program} failed with {status}: {stderr}")]
    ExecutionError {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{program} returned clipboard content that is not valid UTF-8")]
    InvalidUtf8 { program: String },
}

/// Errors raised while starting or stopping a file watch session
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Failed to create file watcher: {0}")]
    Backend(#[source] notify::Error),

    #[error("Cannot watch {path:?}: {source}")]
    PathUnavailable {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    #[error("Failed to release watch on {path:?}: {source}")]
    Release {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    #[error("Failed to spawn watcher thread: {0}")]
    Thread(#[source] std::io::Error),
}

/// Errors raised while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Cannot determine config directory: HOME environment variable not set")]
    NoHome,
}

impl ConfigError {
    /// True when the config file simply doesn't exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
