// Index file persistence, cold starts and failed saves

use crate::common::{assert_index_consistent, create_test_services, TestCorpus, HEALTH_TEXT};
use ilmify::core::error::IlmifyError;
use ilmify::core::storage::INDEX_VERSION;
use ilmify::core::types::IndexState;
use std::fs;

#[test]
fn test_fresh_services_load_saved_index() {
    let corpus = TestCorpus::sample();
    let first = create_test_services(&corpus);
    first.build(false).unwrap();
    let stats = first.stats().unwrap();

    let second = create_test_services(&corpus);
    assert_eq!(second.stats().unwrap(), stats);
    assert_eq!(second.store.state(), IndexState::Ready);

    let a = first.search("rivers mountains", None).unwrap();
    let b = second.search("rivers mountains", None).unwrap();
    assert_eq!(a, b);
    assert_index_consistent(&second.store.snapshot().unwrap());
}

#[test]
fn test_saved_record_layout() {
    let corpus = TestCorpus::sample();
    let services = create_test_services(&corpus);
    services.build(false).unwrap();

    let raw = fs::read_to_string(corpus.index_file()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["version"], INDEX_VERSION);
    assert!(value["timestamp"].is_string());
    assert!(value["vocabulary"].is_array());
    assert!(value["idf"].is_object());
    assert_eq!(value["documents"].as_array().unwrap().len(), 3);
    assert_eq!(value["fileHashes"].as_object().unwrap().len(), 3);
    assert_eq!(value["stats"]["totalDocuments"], 3);
    assert!(value["documents"][0]["sourcePath"].is_string());

    // No temp file left behind
    assert!(!corpus.index_dir().join(".index.json.tmp").exists());
}

#[test]
fn test_corrupt_index_is_cold_start() {
    let corpus = TestCorpus::sample();
    fs::create_dir_all(corpus.index_dir()).unwrap();
    fs::write(corpus.index_file(), "{ not json").unwrap();

    let services = create_test_services(&corpus);
    assert!(services.search("history", None).unwrap().is_empty());
    assert_eq!(services.store.state(), IndexState::Empty);

    // Rebuild replaces the corrupt file
    let stats = services.build(false).unwrap();
    assert_eq!(stats.files_processed, 3);
    assert!(!services.search("history", None).unwrap().is_empty());

    let reloaded = create_test_services(&corpus);
    assert_eq!(reloaded.stats().unwrap().total_documents, 3);
}

#[test]
fn test_version_mismatch_is_cold_start() {
    let corpus = TestCorpus::sample();
    let services = create_test_services(&corpus);
    services.build(false).unwrap();

    let raw = fs::read_to_string(corpus.index_file()).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    value["version"] = serde_json::Value::String("1.0".to_string());
    fs::write(corpus.index_file(), value.to_string()).unwrap();

    let stale = create_test_services(&corpus);
    assert_eq!(stale.stats().unwrap().total_documents, 0);

    let err = ilmify::core::storage::index_file::load(&corpus.index_file()).unwrap_err();
    assert!(matches!(err, IlmifyError::CorruptIndex(_)));
}

#[test]
fn test_mismatched_vector_length_is_corrupt() {
    let corpus = TestCorpus::sample();
    let services = create_test_services(&corpus);
    services.build(false).unwrap();

    let raw = fs::read_to_string(corpus.index_file()).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    value["documents"][0]["vector"] = serde_json::json!([0.5]);
    fs::write(corpus.index_file(), value.to_string()).unwrap();

    let result = ilmify::core::storage::index_file::load(&corpus.index_file());
    assert!(matches!(result, Err(IlmifyError::CorruptIndex(_))));
}

#[test]
fn test_failed_save_keeps_previous_index() {
    let corpus = TestCorpus::sample();
    let services = create_test_services(&corpus);
    services.build(false).unwrap();

    let before_disk = fs::read(corpus.index_file()).unwrap();
    let before = services.store.snapshot().unwrap();

    // A directory where the temp file must go makes the save fail
    fs::create_dir_all(corpus.index_dir().join(".index.json.tmp")).unwrap();
    let longer = format!("{HEALTH_TEXT} Vaccines protect children from measles.");
    corpus.write_file("content/textbooks/doc-3.pdf", &longer);

    let err = services.build(false).unwrap_err();
    assert!(matches!(err, IlmifyError::Persistence(_)));

    let after = services.store.snapshot().unwrap();
    assert_eq!(after.documents(), before.documents());
    assert_eq!(after.file_hashes(), before.file_hashes());
    assert_eq!(fs::read(corpus.index_file()).unwrap(), before_disk);
    assert!(services.search("vaccines", None).unwrap().is_empty());
    assert_eq!(services.store.state(), IndexState::Ready);
}

#[test]
fn test_empty_catalog_persists_empty_index() {
    let corpus = TestCorpus::new();
    let services = create_test_services(&corpus);

    let stats = services.build(false).unwrap();
    assert_eq!(stats.total_chunks, 0);
    assert!(corpus.index_file().exists());

    let status = services.status().unwrap();
    assert_eq!(status.stats.total_documents, 0);
    assert!(status.built_at.is_some());
    assert_eq!(status.index_path, corpus.index_file());
}
