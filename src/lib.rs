//! Ilmify - Offline TF-IDF search over extracted PDF text
//!
//! Builds a bounded-vocabulary TF-IDF index over the PDF resources
//! of a content catalog and answers cosine-similarity queries,
//! entirely offline.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - indexer (catalog, extraction, chunking, tokenization)
//!   - search (vocabulary, vectors, ranking)
//!   - storage (snapshots, persistence, incremental builds)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Key Features
//!
//! - Incremental rebuilds keyed on file path, mtime and size
//! - Atomic index persistence, snapshot publication on completion
//! - Character-based chunking (safe on multi-byte text)
//! - No network access, no external models

pub mod cli;
pub mod core;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{IlmifyError, Result};
pub use core::services::Services;
pub use core::types::*;
