//! Per-document indexing pipeline.
//!
//! Coordinates the text side of a build for one source file:
//! 1. Extract text (bounded by the page cap)
//! 2. Reject documents with too little text
//! 3. Clean and chunk
//! 4. Tokenize every chunk
//!
//! Vocabulary and vectors are computed later, once the whole
//! corpus of a build pass is known.

use std::path::Path;
use std::sync::Arc;

use crate::core::config::IndexingConfig;
use crate::core::error::{IlmifyError, Result};
use crate::core::indexer::{tokenize, Chunker, TextExtractor};

/// A chunk of cleaned text with its full token list
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedChunk {
    pub text: String,
    pub tokens: Vec<String>,
}

/// Extract → clean → chunk → tokenize
pub struct IndexingPipeline {
    extractor: Arc<dyn TextExtractor>,
    chunker: Chunker,
    max_pages: usize,
    min_text_chars: usize,
}

impl IndexingPipeline {
    /// Create a new indexing pipeline
    pub fn new(config: &IndexingConfig, extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            extractor,
            chunker: Chunker::new(config.chunk_size, config.overlap),
            max_pages: config.max_pages,
            min_text_chars: config.min_text_chars,
        }
    }

    /// Process a single file into ordered chunks.
    ///
    /// Returns [`IlmifyError::Extraction`] or
    /// [`IlmifyError::InsufficientText`] for documents that should be
    /// skipped.
    pub fn process_file(&self, path: &Path) -> Result<Vec<ProcessedChunk>> {
        let text = self.extractor.extract_text(path, self.max_pages)?;

        let chars = text.chars().count();
        if chars < self.min_text_chars {
            return Err(IlmifyError::InsufficientText {
                path: path.to_path_buf(),
                chars,
                required: self.min_text_chars,
            });
        }

        let cleaned = Chunker::clean_text(&text);
        let chunks: Vec<ProcessedChunk> = self
            .chunker
            .chunk_text(&cleaned)
            .into_iter()
            .map(|text| {
                let tokens = tokenize(&text);
                ProcessedChunk { text, tokens }
            })
            .collect();

        if chunks.is_empty() {
            return Err(IlmifyError::InsufficientText {
                path: path.to_path_buf(),
                chars: 0,
                required: self.min_text_chars,
            });
        }

        tracing::debug!("Chunked {:?} into {} chunks", path, chunks.len());

        Ok(chunks)
    }
}
