//! TF-IDF vector arithmetic.
//!
//! Raw components are `tf * idf` rounded to 6 fractional digits; the
//! vector is then scaled to unit length. A vector with no
//! in-vocabulary terms stays all-zero.

use crate::core::search::Vocabulary;

/// Fractional digits kept for raw TF-IDF components
pub const COMPONENT_DIGITS: i32 = 6;

/// Fractional digits kept for similarity scores
pub const SCORE_DIGITS: i32 = 4;

/// Round half away from zero to `digits` fractional digits
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Raw (unnormalized) TF-IDF vector of a token list
pub fn tfidf_vector(tokens: &[String], vocabulary: &Vocabulary) -> Vec<f64> {
    let mut counts = vec![0usize; vocabulary.len()];
    for token in tokens {
        if let Some(position) = vocabulary.position(token) {
            counts[position] += 1;
        }
    }

    let total = tokens.len().max(1) as f64;
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            if count == 0 {
                0.0
            } else {
                round_to(count as f64 / total * vocabulary.idf_at(i), COMPONENT_DIGITS)
            }
        })
        .collect()
}

pub fn l2_norm(vector: &[f64]) -> f64 {
    vector.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Scale to unit length in place; zero vectors are left untouched
pub fn normalize(vector: &mut [f64]) {
    let magnitude = l2_norm(vector);
    if magnitude == 0.0 {
        return;
    }
    for component in vector.iter_mut() {
        *component /= magnitude;
    }
}

/// Normalized TF-IDF vector of a token list
pub fn vectorize(tokens: &[String], vocabulary: &Vocabulary) -> Vec<f64> {
    let mut vector = tfidf_vector(tokens, vocabulary);
    normalize(&mut vector);
    vector
}

/// Dot product; equals cosine similarity for unit vectors
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
