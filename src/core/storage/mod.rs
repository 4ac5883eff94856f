//! Storage layer for the vector index.
//!
//! # Architecture
//!
//! - **VectorIndex**: Immutable snapshot (vocabulary, chunks, file hashes)
//! - **IndexBuilder**: Incremental build pass producing a new snapshot
//! - **index_file**: Versioned JSON record with atomic save
//! - **IndexStore**: Publishes snapshots and serializes builds
//!
//! # Storage Structure
//!
//! ```text
//! {index_dir}/
//! ├── index.json          # Current index
//! └── .index.json.tmp     # Only present while a save is in flight
//! ```

mod builder;
pub mod index_file;
mod store;
mod vector_index;

pub use builder::{content_hash, IndexBuilder};
pub use index_file::{IndexRecord, INDEX_VERSION};
pub use store::IndexStore;
pub use vector_index::VectorIndex;
