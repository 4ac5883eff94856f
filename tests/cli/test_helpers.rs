//! CLI test helpers
//!
//! Arc<Services> wrappers matching the CLI execute() signatures,
//! backed by a [`TestCorpus`] and the plain-text extractor.

use crate::common::{PlainTextExtractor, TestCorpus};
use ilmify::core::services::Services;
use std::sync::Arc;

/// Create test services wrapped in Arc (matching CLI execute() signatures)
pub fn create_cli_test_services(corpus: &TestCorpus) -> Arc<Services> {
    Arc::new(Services::with_extractor(
        corpus.config(),
        Arc::new(PlainTextExtractor::new()),
    ))
}

/// Sample corpus with its index already built
pub fn setup_indexed_corpus() -> (Arc<Services>, TestCorpus) {
    let corpus = TestCorpus::sample();
    let services = create_cli_test_services(&corpus);
    services.build(false).expect("Failed to build index");
    (services, corpus)
}
