//! Cosine similarity search over the published snapshot.
//!
//! Every stored chunk is scored with a dot product against the query
//! vector (both are unit length). This is a full linear scan; the
//! corpus of an offline portal is small enough that no inverted index
//! is kept.

use crate::core::config::SearchConfig;
use crate::core::error::Result;
use crate::core::search::{dot, query_vector, round_to, validate_query, SCORE_DIGITS};
use crate::core::storage::{IndexStore, VectorIndex};
use crate::core::types::{SearchResponse, SearchResult};
use std::sync::Arc;
use std::time::Instant;

/// Score all chunks and return the best `limit` above `min_score`.
///
/// Scores are rounded to 4 decimals before the threshold is applied,
/// so no returned score equals `min_score`. Results are sorted
/// descending; equal scores keep storage order.
pub fn rank(
    index: &VectorIndex,
    query_vector: &[f64],
    min_score: f64,
    limit: usize,
) -> Vec<SearchResult> {
    if limit == 0 {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = index
        .documents()
        .iter()
        .filter_map(|doc| {
            // Threshold applies to the reported (rounded) score
            let score = round_to(dot(query_vector, &doc.vector), SCORE_DIGITS);
            (score > min_score).then(|| SearchResult {
                id: doc.id.clone(),
                title: doc.title.clone(),
                category: doc.category.clone(),
                content: doc.content.clone(),
                score,
            })
        })
        .collect();

    // Stable sort keeps storage order among ties
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(limit);
    results
}

/// Similarity search service
pub struct SearchService {
    store: Arc<IndexStore>,
    default_k: usize,
    max_k: usize,
    min_score: f64,
    max_query_length: usize,
}

impl SearchService {
    /// Create a new search service
    pub fn new(store: Arc<IndexStore>, config: &SearchConfig) -> Self {
        Self {
            store,
            default_k: config.default_k,
            max_k: config.max_k,
            min_score: config.min_score,
            max_query_length: config.max_query_length,
        }
    }

    /// Execute a search query.
    ///
    /// `k` defaults to the configured `default_k` and is clamped to
    /// `max_k`. Out-of-vocabulary queries return no results.
    pub fn search(&self, query: &str, k: Option<usize>) -> Result<SearchResponse> {
        let start = Instant::now();
        validate_query(query, self.max_query_length)?;

        let limit = k.unwrap_or(self.default_k).min(self.max_k);
        let snapshot = self.store.snapshot()?;

        let vector = query_vector(query, snapshot.vocabulary());
        let results = rank(&snapshot, &vector, self.min_score, limit);

        let count = results.len();
        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::debug!("Query {:?}: {} results in {}ms", query, count, duration_ms);

        Ok(SearchResponse {
            query: query.to_string(),
            results,
            count,
            duration_ms,
        })
    }
}
