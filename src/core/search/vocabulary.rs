//! Vocabulary and IDF table for one build pass.
//!
//! The vocabulary is the `max_terms` most frequent distinct terms of
//! the pass corpus, ties broken by first appearance. Each term owns
//! one vector dimension, in vocabulary order.

use crate::core::error::{IlmifyError, Result};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Bounded, ordered term set with per-term IDF weights
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    idf: Vec<f64>,
    positions: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build the vocabulary from the token lists of every chunk in a pass.
    ///
    /// `idf(t) = ln((N + 1) / (df(t) + 1)) + 1` where `N` is the number
    /// of token lists (empty ones included) and `df(t)` the number of
    /// lists containing `t`.
    pub fn build<T: AsRef<[String]>>(corpus: &[T], max_terms: usize) -> Self {
        // Counts in discovery order
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for tokens in corpus {
            for token in tokens.as_ref() {
                match seen.get(token.as_str()) {
                    Some(&slot) => counts[slot].1 += 1,
                    None => {
                        seen.insert(token.as_str(), counts.len());
                        counts.push((token.as_str(), 1));
                    }
                }
            }
        }

        // Stable: equal counts keep discovery order
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(max_terms);

        let terms: Vec<String> = counts.iter().map(|(term, _)| term.to_string()).collect();
        let positions: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        let mut df = vec![0usize; terms.len()];
        for tokens in corpus {
            let present: HashSet<usize> = tokens
                .as_ref()
                .iter()
                .filter_map(|token| positions.get(token).copied())
                .collect();
            for position in present {
                df[position] += 1;
            }
        }

        let n_docs = corpus.len() as f64;
        let idf = df
            .iter()
            .map(|&count| ((n_docs + 1.0) / (count as f64 + 1.0)).ln() + 1.0)
            .collect();

        tracing::debug!(
            "Vocabulary built: {} terms from {} token lists",
            terms.len(),
            corpus.len()
        );

        Self {
            terms,
            idf,
            positions,
        }
    }

    /// Rebuild from persisted parts.
    ///
    /// Every term must be distinct and have exactly one IDF entry.
    pub fn from_parts(terms: Vec<String>, idf: &BTreeMap<String, f64>) -> Result<Self> {
        if terms.len() != idf.len() {
            return Err(IlmifyError::CorruptIndex(format!(
                "vocabulary has {} terms but idf has {} entries",
                terms.len(),
                idf.len()
            )));
        }

        let mut positions = HashMap::with_capacity(terms.len());
        let mut weights = Vec::with_capacity(terms.len());

        for (i, term) in terms.iter().enumerate() {
            if positions.insert(term.clone(), i).is_some() {
                return Err(IlmifyError::CorruptIndex(format!(
                    "duplicate vocabulary term '{term}'"
                )));
            }
            let weight = idf.get(term).ok_or_else(|| {
                IlmifyError::CorruptIndex(format!("no idf weight for term '{term}'"))
            })?;
            weights.push(*weight);
        }

        Ok(Self {
            terms,
            idf: weights,
            positions,
        })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in dimension order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Dimension of a term, if it is in the vocabulary
    pub fn position(&self, term: &str) -> Option<usize> {
        self.positions.get(term).copied()
    }

    pub fn idf_at(&self, position: usize) -> f64 {
        self.idf[position]
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.position(term).map(|i| self.idf[i])
    }

    /// Term → weight map in persisted form
    pub fn idf_map(&self) -> BTreeMap<String, f64> {
        self.terms
            .iter()
            .cloned()
            .zip(self.idf.iter().copied())
            .collect()
    }
}
