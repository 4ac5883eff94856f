//! Search command - query the index

use crate::cli::output::{colors, truncate_chars};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (plain words; English terms of 3+ letters are matched)
    pub query: String,

    /// Maximum number of results (defaults to search.default_k, capped at search.max_k)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only show titles (no content)
    #[arg(long)]
    pub titles_only: bool,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub id: String,
    pub title: String,
    pub category: String,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub total_results: usize,
    pub duration_ms: u64,
    pub results: Vec<SearchResultItem>,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = services.search.search(&args.query, args.limit)?;

    let output = SearchResponseOutput {
        query: args.query.clone(),
        total_results: response.count,
        duration_ms: response.duration_ms,
        results: response
            .results
            .into_iter()
            .enumerate()
            .map(|(i, r)| SearchResultItem {
                rank: i + 1,
                id: r.id,
                title: r.title,
                category: r.category,
                score: r.score,
                content: if args.titles_only {
                    None
                } else {
                    Some(r.content)
                },
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!("No results found for '{}'", colors::label(&args.query));
            } else {
                println!(
                    "Found {} result(s):\n",
                    colors::number(&output.total_results.to_string())
                );

                for result in &output.results {
                    if args.titles_only {
                        println!("{}", colors::title(&result.title));
                        continue;
                    }
                    println!(
                        "[{}] {} {} {}",
                        colors::rank(&result.rank.to_string()),
                        colors::title(&result.title),
                        colors::dim(&format!("[{}]", result.category)),
                        colors::score(&format!("(score: {:.4})", result.score))
                    );
                    if let Some(content) = &result.content {
                        println!("    {}", colors::dim(&truncate_chars(content, 200)));
                    }
                    println!();
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
