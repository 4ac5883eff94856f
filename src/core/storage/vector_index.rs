//! In-memory vector index snapshot.
//!
//! A `VectorIndex` is immutable once built. Builds assemble a fresh
//! value and the store publishes it whole, so readers never observe
//! a vocabulary and documents from different passes.

use crate::core::error::{IlmifyError, Result};
use crate::core::search::Vocabulary;
use crate::core::types::{DocumentChunk, IndexStats};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};

/// Vocabulary, chunk records and per-file content hashes of one build pass
#[derive(Debug, Clone, Default)]
pub struct VectorIndex {
    vocabulary: Vocabulary,
    documents: Vec<DocumentChunk>,
    file_hashes: BTreeMap<String, String>,
    built_at: Option<DateTime<Utc>>,
}

impl VectorIndex {
    pub fn new(
        vocabulary: Vocabulary,
        documents: Vec<DocumentChunk>,
        file_hashes: BTreeMap<String, String>,
        built_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            vocabulary,
            documents,
            file_hashes,
            built_at,
        }
    }

    /// Index with no vocabulary and no documents
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Chunk records in storage order
    pub fn documents(&self) -> &[DocumentChunk] {
        &self.documents
    }

    pub fn file_hashes(&self) -> &BTreeMap<String, String> {
        &self.file_hashes
    }

    pub fn file_hash(&self, source_path: &str) -> Option<&str> {
        self.file_hashes.get(source_path).map(String::as_str)
    }

    /// Chunks of one source file, in chunk order
    pub fn chunks_for(&self, source_path: &str) -> Vec<&DocumentChunk> {
        self.documents
            .iter()
            .filter(|doc| doc.source_path == source_path)
            .collect()
    }

    pub fn built_at(&self) -> Option<DateTime<Utc>> {
        self.built_at
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            total_documents: self.documents.len(),
            vocabulary_size: self.vocabulary.len(),
            total_files: self.file_hashes.len(),
        }
    }

    /// Verify the structural invariants of a snapshot.
    ///
    /// - every vector has one component per vocabulary term
    /// - `file_hashes` keys are exactly the source paths of stored chunks
    pub fn check_invariants(&self) -> Result<()> {
        let dims = self.vocabulary.len();
        if let Some(doc) = self.documents.iter().find(|d| d.vector.len() != dims) {
            return Err(IlmifyError::CorruptIndex(format!(
                "chunk '{}' has {} vector components, vocabulary has {}",
                doc.id,
                doc.vector.len(),
                dims
            )));
        }

        let sources: BTreeSet<&str> = self
            .documents
            .iter()
            .map(|d| d.source_path.as_str())
            .collect();
        let hashed: BTreeSet<&str> = self.file_hashes.keys().map(String::as_str).collect();
        if sources != hashed {
            return Err(IlmifyError::CorruptIndex(format!(
                "file hashes cover {} files but chunks come from {}",
                hashed.len(),
                sources.len()
            )));
        }

        Ok(())
    }
}
