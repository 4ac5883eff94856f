//! Query validation and vectorization.
//!
//! Queries go through the same tokenizer as documents and are
//! weighted against the current vocabulary. Terms outside the
//! vocabulary are dropped; a query never extends it.

use crate::core::error::{IlmifyError, Result};
use crate::core::indexer::tokenize;
use crate::core::search::{vectorize, Vocabulary};

/// Reject queries that cannot be searched.
///
/// Empty or whitespace-only queries and queries longer than
/// `max_length` characters are [`IlmifyError::InvalidQuery`].
pub fn validate_query(query: &str, max_length: usize) -> Result<()> {
    if query.trim().is_empty() {
        return Err(IlmifyError::InvalidQuery(
            "Query cannot be empty".to_string(),
        ));
    }

    let length = query.chars().count();
    if length > max_length {
        return Err(IlmifyError::InvalidQuery(format!(
            "Query is {length} characters long (max {max_length})"
        )));
    }

    Ok(())
}

/// Unit-length (or all-zero) query vector over `vocabulary`
///
/// # Examples
///
/// ```
/// use ilmify::core::search::{query_vector, Vocabulary};
///
/// let corpus = vec![vec!["river".to_string()], vec!["mountain".to_string()]];
/// let vocab = Vocabulary::build(&corpus, 300);
///
/// assert_eq!(query_vector("the river", &vocab), vec![1.0, 0.0]);
/// assert_eq!(query_vector("desert", &vocab), vec![0.0, 0.0]);
/// ```
pub fn query_vector(query: &str, vocabulary: &Vocabulary) -> Vec<f64> {
    let tokens = tokenize(query);
    vectorize(&tokens, vocabulary)
}
