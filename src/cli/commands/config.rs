//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::{IndexingConfig, SearchConfig, VocabularyConfig};
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show resolved XDG directories
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub content_root: String,
    pub catalog_file: String,
    pub index_file: String,
    pub indexing: IndexingConfig,
    pub vocabulary: VocabularyConfig,
    pub search: SearchConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dirs: Option<DirsResponse>,
}

#[derive(Debug, Serialize)]
pub struct DirsResponse {
    pub config_dir: String,
    pub config_file: String,
    pub data_dir: String,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    xdg: &XdgDirs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let dirs = args.all.then(|| DirsResponse {
        config_dir: xdg.config_dir.display().to_string(),
        config_file: xdg.config_file().display().to_string(),
        data_dir: xdg.data_dir.display().to_string(),
    });

    let response = ConfigResponse {
        content_root: config.content.root.display().to_string(),
        catalog_file: config.catalog_path().display().to_string(),
        index_file: config.index_file().display().to_string(),
        indexing: config.indexing.clone(),
        vocabulary: config.vocabulary.clone(),
        search: config.search.clone(),
        dirs,
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  content_root: {}", response.content_root);
            println!("  catalog_file: {}", response.catalog_file);
            println!("  index_file: {}", response.index_file);
            println!("  indexing:");
            println!("    chunk_size: {}", response.indexing.chunk_size);
            println!("    overlap: {}", response.indexing.overlap);
            println!("    max_pages: {}", response.indexing.max_pages);
            println!("    min_text_chars: {}", response.indexing.min_text_chars);
            println!("    snippet_chars: {}", response.indexing.snippet_chars);
            println!("    reference_tokens: {}", response.indexing.reference_tokens);
            println!("  vocabulary:");
            println!("    max_terms: {}", response.vocabulary.max_terms);
            println!("  search:");
            println!("    default_k: {}", response.search.default_k);
            println!("    max_k: {}", response.search.max_k);
            println!("    min_score: {}", response.search.min_score);
            println!("    max_query_length: {}", response.search.max_query_length);
            if let Some(dirs) = &response.dirs {
                println!("  dirs:");
                println!("    config_dir: {}", dirs.config_dir);
                println!("    config_file: {}", dirs.config_file);
                println!("    data_dir: {}", dirs.data_dir);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
