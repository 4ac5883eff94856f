//! TF-IDF search module.
//!
//! Vocabulary/IDF construction, vector arithmetic and cosine
//! similarity ranking over the published index snapshot.

mod query;
mod similarity;
mod vector;
mod vocabulary;

pub use query::{query_vector, validate_query};
pub use similarity::{rank, SearchService};
pub use vector::{
    dot, l2_norm, normalize, round_to, tfidf_vector, vectorize, COMPONENT_DIGITS, SCORE_DIGITS,
};
pub use vocabulary::Vocabulary;
