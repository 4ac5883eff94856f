//! Index term extraction.
//!
//! Terms are whole ASCII-letter words of three or more characters,
//! lowercased, minus a fixed stopword list. Order and repeats are
//! preserved so callers can compute term frequencies.
//!
//! Non-Latin scripts (Urdu, Arabic, ...) produce no terms and are
//! therefore not searchable. Words mixing ASCII letters with digits
//! or accented letters (`covid19`, `café`) are dropped whole.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z]{3,}\b").expect("valid word pattern"));

/// English function words plus PDF layout artifacts
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did",
        "will", "would", "could", "should", "this", "that", "these", "those", "it", "its", "as",
        "from", "can", "may", "which", "who", "what", "when", "where", "how", "all", "each",
        "every", "both", "few", "more", "most", "other", "some", "such", "no", "not", "only",
        "same", "than", "too", "very", "just", "also", "into", "over", "after", "before",
        "between", "under", "above", "below", "about", "there", "here", "your", "you", "he",
        "she", "they", "we", "i", "my", "our", "his", "her", "their", "them", "us", "me", "him",
        "any", "if", "then", "so", "because", "while",
        // Document structure
        "page", "chapter", "section", "figure", "table", "ref", "see", "note",
    ]
    .into_iter()
    .collect()
});

/// Check whether a lowercased word is filtered out
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Convert text into its ordered list of index terms.
///
/// # Example
///
/// ```
/// use ilmify::core::indexer::tokenize;
///
/// assert_eq!(tokenize("The war of 1947 was big"), vec!["war", "big"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| !is_stopword(word))
        .map(str::to_string)
        .collect()
}
