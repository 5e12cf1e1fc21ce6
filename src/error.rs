use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring a comparison run.
///
/// Evaluation itself never fails; these only come out of checker
/// construction and submission resolution.
#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("Checker type '{0}' is not supported (expected one of: cosine_similarity, sequence_matcher)")]
    UnsupportedStrategy(String),

    #[error("Similarity threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("Failed to read submission manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: ManifestError,
    },

    #[error("Failed to list repositories under {path}: {source}")]
    RepoDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a manifest file could not be turned into a submission set.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("entry for '{0}' is not a string path")]
    NotAPath(String),

    #[error("manifest must be a JSON object mapping identity to path")]
    NotAnObject,
}
