//! Core data types for the Ilmify search core.
//!
//! Catalog resources come in, document chunks are stored, search
//! results and statistics go out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Catalog identifier; the scanner emits integers, hand-written
/// catalogs sometimes use strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Number(n) => write!(f, "{n}"),
            ResourceId::Text(s) => f.write_str(s),
        }
    }
}

/// A content catalog entry (read-only input)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,

    pub title: String,

    #[serde(default = "default_category")]
    pub category: String,

    /// Path relative to the content root
    pub filepath: String,

    /// File format tag (`pdf`, `mp4`, `video`, ...)
    pub format: String,
}

fn default_category() -> String {
    "uncategorized".to_string()
}

impl Resource {
    /// Only PDF resources carry extractable text
    pub fn is_pdf(&self) -> bool {
        self.format.eq_ignore_ascii_case("pdf")
    }

    /// Chunk id for the `index`-th chunk of this resource
    pub fn chunk_id(&self, index: usize) -> String {
        format!("{}_{}", self.id, index)
    }
}

/// One indexed chunk of a source document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentChunk {
    /// `<resourceId>_<chunkIndex>`
    pub id: String,

    pub title: String,

    pub category: String,

    pub source_path: String,

    pub chunk_index: usize,

    /// Truncated chunk text used as the result snippet
    pub content: String,

    /// Bounded token sample, reused for incremental vocabulary rebuilds
    pub tokens: Vec<String>,

    /// Unit-length (or all-zero) TF-IDF vector over the current vocabulary
    pub vector: Vec<f64>,
}

/// Search result returned by query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,

    pub title: String,

    pub category: String,

    /// Chunk snippet
    pub content: String,

    /// Cosine similarity rounded to 4 decimals
    pub score: f64,
}

/// Response for a single query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,

    pub results: Vec<SearchResult>,

    pub count: usize,

    pub duration_ms: u64,
}

/// Statistics from a build pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Newly created chunk records (re-extracted files only)
    pub chunks_created: usize,

    /// Chunks in the published index
    pub total_chunks: usize,

    /// Files extracted and chunked in this pass
    pub files_processed: usize,

    /// Files whose content hash was unchanged
    pub files_unchanged: usize,

    /// Files skipped because of missing, unreadable or short text
    pub files_skipped: usize,

    pub vocabulary_size: usize,

    pub duration_ms: u64,
}

/// Size summary of an index snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub total_documents: usize,

    pub vocabulary_size: usize,

    pub total_files: usize,
}

/// Lifecycle state of the index store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexState {
    Empty,
    Building,
    Ready,
}

impl fmt::Display for IndexState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndexState::Empty => "empty",
            IndexState::Building => "building",
            IndexState::Ready => "ready",
        };
        f.write_str(name)
    }
}

/// Store-level view of the published snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStatus {
    pub state: IndexState,

    #[serde(flatten)]
    pub stats: IndexStats,

    /// When the published snapshot was built
    pub built_at: Option<DateTime<Utc>>,

    pub index_path: PathBuf,
}
