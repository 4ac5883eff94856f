//! Incremental index assembly.
//!
//! One build pass walks the PDF resources of the catalog in order:
//!
//! - unchanged files (same content hash, not forced) keep their chunk
//!   records and contribute their stored reference tokens to the
//!   vocabulary corpus
//! - new or changed files are extracted, chunked and tokenized again
//! - missing or unreadable files are skipped and drop out of the index
//!
//! Vocabulary and IDF are then recomputed over the union corpus and
//! every surviving chunk is vectorized against them, so all vectors
//! of the resulting snapshot share one vocabulary.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::indexer::{IndexingPipeline, ProcessedChunk, TextExtractor};
use crate::core::search::{vectorize, Vocabulary};
use crate::core::storage::VectorIndex;
use crate::core::types::{BuildStats, DocumentChunk, Resource};
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Instant, UNIX_EPOCH};

/// Change-detection fingerprint of a file: path, mtime and size
pub fn content_hash(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path)?;
    let mtime_nanos = metadata
        .modified()?
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);

    let mut hasher = Sha256::new();
    hasher.update(format!("{}:{}:{}", path.display(), mtime_nanos, metadata.len()).as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Per-file outcome of the scan phase
enum Source<'a> {
    Kept {
        resource: &'a Resource,
        chunks: Vec<&'a DocumentChunk>,
    },
    Fresh {
        resource: &'a Resource,
        chunks: Vec<ProcessedChunk>,
    },
}

struct ScannedFile<'a> {
    source_path: String,
    hash: String,
    source: Source<'a>,
}

/// Assembles new [`VectorIndex`] snapshots
pub struct IndexBuilder {
    pipeline: IndexingPipeline,
    content_root: PathBuf,
    max_terms: usize,
    snippet_chars: usize,
    reference_tokens: usize,
}

impl IndexBuilder {
    pub fn new(config: &Config, extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            pipeline: IndexingPipeline::new(&config.indexing, extractor),
            content_root: config.content.root.clone(),
            max_terms: config.vocabulary.max_terms,
            snippet_chars: config.indexing.snippet_chars,
            reference_tokens: config.indexing.reference_tokens,
        }
    }

    /// Resolved on-disk location of a resource
    pub fn resolve(&self, resource: &Resource) -> PathBuf {
        self.content_root.join(&resource.filepath)
    }

    /// Build the next snapshot from `previous` and the current resources.
    ///
    /// Never fails: per-file problems are logged and counted as skipped.
    pub fn assemble(
        &self,
        previous: &VectorIndex,
        resources: &[Resource],
        force: bool,
    ) -> (VectorIndex, BuildStats) {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        let scanned = self.scan(previous, resources, force, &mut stats);

        let mut corpus: Vec<&[String]> = Vec::new();
        for file in &scanned {
            match &file.source {
                Source::Kept { chunks, .. } => {
                    corpus.extend(chunks.iter().map(|c| c.tokens.as_slice()))
                }
                Source::Fresh { chunks, .. } => {
                    corpus.extend(chunks.iter().map(|c| c.tokens.as_slice()))
                }
            }
        }
        let vocabulary = Vocabulary::build(&corpus, self.max_terms);

        let mut documents = Vec::new();
        let mut file_hashes = BTreeMap::new();

        for file in &scanned {
            match &file.source {
                Source::Kept { resource, chunks } => {
                    // Catalog ids and labels may have moved since the chunk was stored
                    for chunk in chunks {
                        documents.push(DocumentChunk {
                            id: resource.chunk_id(chunk.chunk_index),
                            title: resource.title.clone(),
                            category: resource.category.clone(),
                            vector: vectorize(&chunk.tokens, &vocabulary),
                            ..(*chunk).clone()
                        });
                    }
                }
                Source::Fresh { resource, chunks } => {
                    for (i, chunk) in chunks.iter().enumerate() {
                        documents.push(DocumentChunk {
                            id: resource.chunk_id(i),
                            title: resource.title.clone(),
                            category: resource.category.clone(),
                            source_path: file.source_path.clone(),
                            chunk_index: i,
                            content: chunk.text.chars().take(self.snippet_chars).collect(),
                            tokens: chunk
                                .tokens
                                .iter()
                                .take(self.reference_tokens)
                                .cloned()
                                .collect(),
                            vector: vectorize(&chunk.tokens, &vocabulary),
                        });
                    }
                    stats.chunks_created += chunks.len();
                }
            }
            file_hashes.insert(file.source_path.clone(), file.hash.clone());
        }

        stats.total_chunks = documents.len();
        stats.vocabulary_size = vocabulary.len();
        stats.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Build pass: {} new chunks, {} total, {} processed, {} unchanged, {} skipped, {} terms",
            stats.chunks_created,
            stats.total_chunks,
            stats.files_processed,
            stats.files_unchanged,
            stats.files_skipped,
            stats.vocabulary_size
        );

        let index = VectorIndex::new(vocabulary, documents, file_hashes, Some(Utc::now()));
        (index, stats)
    }

    /// Decide keep / re-extract / skip for every PDF resource
    fn scan<'a>(
        &self,
        previous: &'a VectorIndex,
        resources: &'a [Resource],
        force: bool,
        stats: &mut BuildStats,
    ) -> Vec<ScannedFile<'a>> {
        let mut seen = HashSet::new();
        let mut scanned = Vec::new();

        for resource in resources.iter().filter(|r| r.is_pdf()) {
            let path = self.resolve(resource);
            let source_path = path.to_string_lossy().into_owned();

            if !seen.insert(source_path.clone()) {
                tracing::debug!("Duplicate catalog entry for {:?}, ignoring", path);
                continue;
            }

            let hash = match content_hash(&path) {
                Ok(hash) => hash,
                Err(e) => {
                    tracing::warn!("Skipping '{}': {}", resource.title, e);
                    stats.files_skipped += 1;
                    continue;
                }
            };

            if !force && previous.file_hash(&source_path) == Some(hash.as_str()) {
                let kept = previous.chunks_for(&source_path);
                if !kept.is_empty() {
                    tracing::debug!("Unchanged: {:?} ({} chunks)", path, kept.len());
                    stats.files_unchanged += 1;
                    scanned.push(ScannedFile {
                        source_path,
                        hash,
                        source: Source::Kept {
                            resource,
                            chunks: kept,
                        },
                    });
                    continue;
                }
            }

            match self.pipeline.process_file(&path) {
                Ok(chunks) => {
                    tracing::info!("Processed '{}': {} chunks", resource.title, chunks.len());
                    stats.files_processed += 1;
                    scanned.push(ScannedFile {
                        source_path,
                        hash,
                        source: Source::Fresh { resource, chunks },
                    });
                }
                Err(e) => {
                    tracing::warn!("Skipping '{}': {}", resource.title, e);
                    stats.files_skipped += 1;
                }
            }
        }

        scanned
    }
}
