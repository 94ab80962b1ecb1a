//! Errors raised while loading a manifest or resolving tags

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the manifest API
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Entry not found in manifest: {0}")]
    EntryNotFound(String),

    #[error("Chunk is not an entry point: {0}")]
    NotAnEntryPoint(String),

    #[error("Failed to read manifest: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias for manifest operations
pub type Result<T> = std::result::Result<T, ManifestError>;
