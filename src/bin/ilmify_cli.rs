//! Ilmify CLI - offline search over the portal's PDF library
//!
//! # Examples
//!
//! ```bash
//! # Build (or incrementally update) the index from the catalog
//! ilmify build
//!
//! # Rebuild everything from scratch
//! ilmify build --force
//!
//! # Search
//! ilmify search "water purification" -k 3
//!
//! # Index statistics
//! ilmify stats
//! ```

use clap::Parser;
use ilmify::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout stays clean for `--format json`
fn init_logging(verbose: bool, json: bool) {
    let default_level = if verbose { "ilmify=info" } else { "ilmify=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
