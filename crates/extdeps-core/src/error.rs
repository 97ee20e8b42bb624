//! Error types for extdeps-core

use std::path::PathBuf;

/// Result type for extdeps-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while synchronizing sources
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A registry entry that cannot be synchronized safely
    #[error("Invalid source '{directory}': {reason}")]
    InvalidDescriptor { directory: String, reason: String },

    /// Failure reported by git
    #[error(transparent)]
    Git(#[from] extdeps_git::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(directory: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            directory: directory.to_string(),
            reason: reason.into(),
        }
    }
}
