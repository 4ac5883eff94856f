//! Document indexing module.
//!
//! Turns catalog resources into tokenized chunks ready for
//! vectorization. Key pieces:
//!
//! - Catalog loading (`metadata.json`)
//! - Pluggable text extraction (PDF by default)
//! - Sentence-aware, character-based chunking with word overlap
//! - ASCII term tokenization with stopword filtering
//! - Per-file pipeline orchestration
//!
//! # Safety
//!
//! The chunker measures and slices by characters, never bytes, so
//! multilingual text (Urdu, Arabic, emoji) never causes a panic.

pub mod catalog;
pub mod chunker;
pub mod extractor;
pub mod pipeline;
pub mod tokenizer;

pub use catalog::Catalog;
pub use chunker::Chunker;
pub use extractor::{PdfTextExtractor, TextExtractor};
pub use pipeline::{IndexingPipeline, ProcessedChunk};
pub use tokenizer::{is_stopword, tokenize};
