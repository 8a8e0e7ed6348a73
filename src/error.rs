//! Error types for djot formatting.

use std::path::PathBuf;

use thiserror::Error;

use crate::tree::NodeKind;

/// Errors that can occur while formatting or while reading and writing files.
#[derive(Error, Debug)]
pub enum Error {
    /// The tree holds a node kind the renderer has no handler for.
    #[error("unsupported node kind: {kind}")]
    UnsupportedNode { kind: NodeKind },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[cfg(feature = "cli")]
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
