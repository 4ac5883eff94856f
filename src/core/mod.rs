//! Core domain logic (adapter-agnostic)
//!
//! Everything the CLI (or any other front end) needs to build and
//! query the offline index.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **indexer**: Catalog, text extraction, chunking, tokenization
//! - **search**: Vocabulary/IDF, TF-IDF vectors, similarity ranking
//! - **storage**: Index snapshots, persistence, incremental builds
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod indexer;
pub mod search;
pub mod services;
pub mod storage;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{IlmifyError, Result};
pub use services::Services;
