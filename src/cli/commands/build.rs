//! Build command - build or update the index from the catalog

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Discard the existing index and re-extract every document
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Build result response
#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub chunks_created: usize,
    pub total_chunks: usize,
    pub files_processed: usize,
    pub files_unchanged: usize,
    pub files_skipped: usize,
    pub vocabulary_size: usize,
    pub duration_secs: f64,
    pub index_file: String,
}

/// Execute the build command
pub async fn execute(
    args: BuildArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog_path = services.config.catalog_path();
    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "{} index from {}...",
            if args.force { "Rebuilding" } else { "Updating" },
            colors::file_path(&catalog_path.display().to_string())
        );
    }

    // Extraction and vectorization are CPU bound
    let worker = Arc::clone(services);
    let force = args.force;
    let stats = tokio::task::spawn_blocking(move || worker.build(force)).await??;

    let response = BuildResponse {
        chunks_created: stats.chunks_created,
        total_chunks: stats.total_chunks,
        files_processed: stats.files_processed,
        files_unchanged: stats.files_unchanged,
        files_skipped: stats.files_skipped,
        vocabulary_size: stats.vocabulary_size,
        duration_secs: stats.duration_ms as f64 / 1000.0,
        index_file: services.store.index_path().display().to_string(),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} new chunks in {}",
                colors::success("Indexed"),
                colors::number(&response.chunks_created.to_string()),
                colors::number(&format_duration(response.duration_secs))
            );
            println!(
                "Files: {} processed, {} unchanged, {} skipped",
                colors::number(&response.files_processed.to_string()),
                colors::number(&response.files_unchanged.to_string()),
                colors::number(&response.files_skipped.to_string())
            );
            println!(
                "Index: {} chunks, {} terms",
                colors::number(&response.total_chunks.to_string()),
                colors::number(&response.vocabulary_size.to_string())
            );
            println!("Saved to {}", colors::file_path(&response.index_file));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
