//! Error types for catalogue loading, progress persistence and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the catalogue. Fatal for the initial render.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalogue: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
}

/// Progress persistence failure.
///
/// Mutations update the in-memory store before persisting, so receiving one
/// of these means the durable copy is stale, not that the change was lost.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read progress from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write progress to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to clear progress at {path}: {source}")]
    Clear {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize progress: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing medium refused the write (quota, read-only medium).
    #[error("progress storage rejected the write: {reason}")]
    Rejected { reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
