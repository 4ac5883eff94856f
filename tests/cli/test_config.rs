//! Tests for the show-config CLI command

use crate::cli::test_helpers::create_cli_test_services;
use crate::common::TestCorpus;
use ilmify::cli::commands::config::{execute, ConfigArgs};
use ilmify::cli::OutputFormat;
use ilmify::core::xdg::XdgDirs;
use tempfile::TempDir;

fn test_xdg(temp: &TempDir) -> XdgDirs {
    XdgDirs {
        config_dir: temp.path().join("config"),
        data_dir: temp.path().join("data"),
    }
}

/// Test config display in human format
#[tokio::test]
async fn test_config_human() {
    let corpus = TestCorpus::new();
    let services = create_cli_test_services(&corpus);
    let temp = TempDir::new().unwrap();

    let result = execute(
        ConfigArgs { all: false },
        &services,
        &test_xdg(&temp),
        OutputFormat::Human,
    )
    .await;
    assert!(result.is_ok(), "Config should succeed: {:?}", result.err());
}

/// Test config display with directories in JSON format
#[tokio::test]
async fn test_config_all_json() {
    let corpus = TestCorpus::new();
    let services = create_cli_test_services(&corpus);
    let temp = TempDir::new().unwrap();

    let result = execute(
        ConfigArgs { all: true },
        &services,
        &test_xdg(&temp),
        OutputFormat::Json,
    )
    .await;
    assert!(result.is_ok());
}
