// Test helper functions

use super::fixtures::{PlainTextExtractor, TestCorpus};
use ilmify::core::search::l2_norm;
use ilmify::core::services::Services;
use ilmify::core::storage::VectorIndex;
use std::sync::Arc;

/// Services over `corpus` using the plain-text extractor
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services(corpus: &TestCorpus) -> Services {
    Services::with_extractor(corpus.config(), Arc::new(PlainTextExtractor::new()))
}

/// Services plus a handle on the extractor, for counting extractions
#[allow(dead_code)] // Used in integration tests
pub fn create_counting_services(corpus: &TestCorpus) -> (Services, Arc<PlainTextExtractor>) {
    let extractor = Arc::new(PlainTextExtractor::new());
    let services = Services::with_extractor(corpus.config(), extractor.clone());
    (services, extractor)
}

/// Assert the structural invariants every published snapshot must hold
#[allow(dead_code)] // Used in integration tests
pub fn assert_index_consistent(index: &VectorIndex) {
    let dims = index.vocabulary().len();
    for doc in index.documents() {
        assert_eq!(
            doc.vector.len(),
            dims,
            "chunk {} has {} components, vocabulary has {}",
            doc.id,
            doc.vector.len(),
            dims
        );

        let norm = l2_norm(&doc.vector);
        assert!(
            norm == 0.0 || (norm - 1.0).abs() < 1e-9,
            "chunk {} has norm {}",
            doc.id,
            norm
        );
    }

    assert!(
        index.check_invariants().is_ok(),
        "file hashes do not match stored chunks"
    );
}
