//! Sentence-aware text chunking.
//!
//! Extracted PDF text is first cleaned (whitespace collapsed,
//! symbols and control characters dropped, punctuation runs folded)
//! and then packed sentence by sentence into chunks of roughly
//! `chunk_size` characters. Each new chunk starts with the tail
//! words of the previous one so that phrases spanning a boundary
//! stay searchable.
//!
//! All lengths are measured in **characters**, never bytes, so the
//! chunker is safe on Urdu, Arabic or any other multi-byte text.
//!
//! # Example
//!
//! ```
//! use ilmify::core::indexer::Chunker;
//!
//! let chunker = Chunker::new(500, 100);
//! let text = Chunker::clean_text("Rivers  flow.\n\nMountains rise!");
//! let chunks = chunker.chunk_text(&text);
//! assert_eq!(chunks, vec!["Rivers flow. Mountains rise!".to_string()]);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is not a word character, whitespace or basic punctuation
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^\w\s.,!?;:'"()\-]"#).expect("valid disallowed-char pattern"));

static PUNCTUATION_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.,!?;:]{2,}").expect("valid punctuation pattern"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Average characters per word used to turn the overlap budget into words
const CHARS_PER_WORD: usize = 5;

/// Sentence-packing chunker.
#[derive(Debug, Clone)]
pub struct Chunker {
    /// Target characters per chunk
    chunk_size: usize,

    /// Words carried from the end of one chunk into the next
    overlap_words: usize,
}

impl Chunker {
    /// Create a new chunker.
    ///
    /// `overlap` is a character budget; it is carried forward as
    /// `overlap / 5` whole words.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is 0 or if `overlap >= chunk_size`.
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be > 0");
        assert!(overlap < chunk_size, "overlap must be < chunk_size");

        Self {
            chunk_size,
            overlap_words: overlap / CHARS_PER_WORD,
        }
    }

    /// Get the chunk size in characters.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Get the number of overlap words.
    pub fn overlap_words(&self) -> usize {
        self.overlap_words
    }

    /// Normalise raw extracted text before chunking.
    ///
    /// Letters and digits of every script survive; symbols, control
    /// characters and stray glyphs become spaces. Runs of sentence
    /// punctuation collapse to a single period.
    pub fn clean_text(text: &str) -> String {
        let text = DISALLOWED.replace_all(text, " ");
        let text = PUNCTUATION_RUN.replace_all(&text, ".");
        let text = WHITESPACE_RUN.replace_all(&text, " ");
        text.trim().to_string()
    }

    /// Split cleaned text into ordered, overlapping chunks.
    ///
    /// Text shorter than `chunk_size` becomes a single chunk. Blank
    /// chunks are never emitted.
    pub fn chunk_text(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        if text.chars().count() < self.chunk_size {
            return vec![text.to_string()];
        }

        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for sentence in split_sentences(text) {
            let sentence_len = sentence.chars().count();

            if current_len + sentence_len > self.chunk_size {
                if current.is_empty() {
                    current = sentence.to_string();
                } else {
                    push_chunk(&mut chunks, &current);
                    let carried = self.overlap_tail(&current);
                    current = if carried.is_empty() {
                        sentence.to_string()
                    } else {
                        format!("{carried} {sentence}")
                    };
                }
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(sentence);
            }

            current_len = current.chars().count();
        }

        push_chunk(&mut chunks, &current);
        chunks
    }

    /// Last `overlap_words` words of a finished chunk
    fn overlap_tail(&self, chunk: &str) -> String {
        if self.overlap_words == 0 {
            return String::new();
        }

        let words: Vec<&str> = chunk.split_whitespace().collect();
        let start = words.len().saturating_sub(self.overlap_words);
        words[start..].join(" ")
    }
}

fn push_chunk(chunks: &mut Vec<String>, chunk: &str) {
    let trimmed = chunk.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

/// Split at whitespace that follows `.`, `?` or `!`.
///
/// The terminal punctuation stays with its sentence and the
/// separating whitespace is dropped.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch.is_whitespace() && matches!(prev, Some('.' | '?' | '!')) {
            if idx > start {
                sentences.push(&text[start..idx]);
            }
            // Swallow the rest of the whitespace run
            let mut next_start = text.len();
            while let Some(&(next_idx, next_ch)) = chars.peek() {
                if next_ch.is_whitespace() {
                    chars.next();
                } else {
                    next_start = next_idx;
                    break;
                }
            }
            start = next_start;
            prev = None;
            continue;
        }
        prev = Some(ch);
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}
