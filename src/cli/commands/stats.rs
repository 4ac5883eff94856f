//! Stats command - show index statistics

use crate::cli::output::{colors, format_bytes, format_relative_time};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Also check the catalog and report how many PDFs it lists
    #[arg(long, short = 'c')]
    pub catalog: bool,
}

/// Stats response
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub status: crate::core::types::IndexStatus,
    pub index_size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_pdfs: Option<usize>,
}

/// Execute the stats command
pub async fn execute(
    args: StatsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = services.status()?;
    let index_size_bytes = std::fs::metadata(&status.index_path).ok().map(|m| m.len());

    let catalog_pdfs = if args.catalog {
        Some(services.load_catalog()?.pdf_resources().count())
    } else {
        None
    };

    let response = StatsResponse {
        status,
        index_size_bytes,
        catalog_pdfs,
    };

    match format {
        OutputFormat::Human => {
            let status = &response.status;
            println!("{}", colors::label("Index:"));
            println!("  State: {}", colors::success(&status.state.to_string()));
            println!(
                "  Documents: {}",
                colors::number(&status.stats.total_documents.to_string())
            );
            println!(
                "  Vocabulary: {}",
                colors::number(&status.stats.vocabulary_size.to_string())
            );
            println!(
                "  Files: {}",
                colors::number(&status.stats.total_files.to_string())
            );
            if let Some(built_at) = &status.built_at {
                println!(
                    "  Built: {} ({})",
                    built_at.to_rfc3339(),
                    colors::dim(&format_relative_time(built_at))
                );
            }
            match response.index_size_bytes {
                Some(bytes) => println!(
                    "  File: {} ({})",
                    colors::file_path(&status.index_path.display().to_string()),
                    colors::number(&format_bytes(bytes))
                ),
                None => println!(
                    "  File: {} {}",
                    colors::file_path(&status.index_path.display().to_string()),
                    colors::dim("(not built yet)")
                ),
            }
            if let Some(count) = response.catalog_pdfs {
                println!("  Catalog PDFs: {}", colors::number(&count.to_string()));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
