//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Media Browser
//!
//! The browsing core (listing, filtering, layout) never surfaces errors to the
//! user; every failure there degrades locally. This enum covers the places
//! that can genuinely fail: reading a directory, configuration, logging
//! setup and starting the external player.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for all browser operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// A directory could not be listed.
    #[error("Cannot read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The player command template could not be split into arguments.
    #[error("Invalid player command: {0:?}")]
    InvalidPlayerCommand(String),

    /// The player process could not be started.
    #[error("Failed to launch `{cmd}`: {source}")]
    Launch {
        cmd: String,
        #[source]
        source: io::Error,
    },

    /// Logging could not be initialized.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl AppError {
    /// Create a directory read error
    pub fn read_dir<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    /// Create a player launch error
    pub fn launch<S: Into<String>>(cmd: S, source: io::Error) -> Self {
        Self::Launch {
            cmd: cmd.into(),
            source,
        }
    }
}
