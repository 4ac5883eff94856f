//! Error types and error handling for the Ilmify search core.
//!
//! Per-resource failures (`Extraction`, `InsufficientText`) are
//! isolated by the build pipeline; `CorruptIndex` is turned into a
//! cold start by the index store. Everything else propagates to the
//! caller.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Ilmify operations
pub type Result<T> = std::result::Result<T, IlmifyError>;

/// Main error type for the Ilmify search core
#[derive(Error, Debug)]
pub enum IlmifyError {
    #[error("Text extraction failed for {path:?}: {message}")]
    Extraction { path: PathBuf, message: String },

    #[error("Too little text extracted from {path:?}: {chars} chars (need {required})")]
    InsufficientText {
        path: PathBuf,
        chars: usize,
        required: usize,
    },

    #[error("Failed to persist index: {0}")]
    Persistence(String),

    #[error("Corrupt index file: {0}")]
    CorruptIndex(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Catalog not found: {0:?}")]
    CatalogNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl IlmifyError {
    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            IlmifyError::InvalidQuery(_) | IlmifyError::ConfigError(_)
        )
    }

    /// Per-resource failure: skip the resource, keep building
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            IlmifyError::Extraction { .. } | IlmifyError::InsufficientText { .. }
        )
    }

    /// Persisted index could not be understood (cold start)
    pub fn is_corrupt_index(&self) -> bool {
        matches!(self, IlmifyError::CorruptIndex(_))
    }
}
