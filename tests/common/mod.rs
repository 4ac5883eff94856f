// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{
    PlainTextExtractor, TestCorpus, CATALOG_FILE, GEOGRAPHY_TEXT, HEALTH_TEXT, HISTORY_TEXT,
};
#[allow(unused_imports)]
pub use helpers::{assert_index_consistent, create_counting_services, create_test_services};
