//! Tests for the stats CLI command

use crate::cli::test_helpers::{create_cli_test_services, setup_indexed_corpus};
use crate::common::TestCorpus;
use ilmify::cli::commands::stats::{execute, StatsArgs, StatsResponse};
use ilmify::cli::OutputFormat;

/// Test stats after a build
#[tokio::test]
async fn test_stats_human() {
    let (services, _corpus) = setup_indexed_corpus();

    let result = execute(StatsArgs { catalog: true }, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Stats should succeed: {:?}", result.err());
}

/// Test stats on an empty index in JSON format
#[tokio::test]
async fn test_stats_empty_index_json() {
    let corpus = TestCorpus::sample();
    let services = create_cli_test_services(&corpus);

    let result = execute(StatsArgs { catalog: false }, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

/// Test stats --catalog with the catalog missing
#[tokio::test]
async fn test_stats_catalog_missing() {
    let corpus = TestCorpus::new();
    std::fs::remove_file(corpus.root().join(crate::common::CATALOG_FILE)).unwrap();
    let services = create_cli_test_services(&corpus);

    let result = execute(StatsArgs { catalog: true }, &services, OutputFormat::Human).await;
    assert!(result.is_err());
}

/// Test the JSON shape of the stats response
#[test]
fn test_stats_response_serialization() {
    let (services, _corpus) = setup_indexed_corpus();

    let response = StatsResponse {
        status: services.status().unwrap(),
        index_size_bytes: Some(2048),
        catalog_pdfs: None,
    };
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["state"], "ready");
    assert_eq!(value["totalDocuments"], 3);
    assert_eq!(value["totalFiles"], 3);
    assert_eq!(value["index_size_bytes"], 2048);
    assert!(value.get("catalog_pdfs").is_none());
}
