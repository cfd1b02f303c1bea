mod browse;
mod digest;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use thainews_core::Window;

#[derive(Debug, Parser)]
#[command(name = "thainews")]
#[command(about = "Thailand electronics-industry news digest for LLM summarizers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the news feeds and print a summarizer-ready digest
    Digest {
        /// Recency window in days: 1, 3, 7, 14 or 30
        #[arg(long, default_value = "7")]
        window: Window,

        /// Deep-dive on one keyword instead of the three-category scan
        #[arg(long)]
        keyword: Option<String>,

        /// Write the digest to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the planned queries without fetching anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Browse and search the entries saved by the last digest run
    Browse {
        /// Case-insensitive substring to match against titles
        #[arg(long)]
        search: Option<String>,

        /// Only show entries from this category
        #[arg(long)]
        category: Option<String>,

        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = thainews_core::load_app_config()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Digest {
            window,
            keyword,
            output,
            dry_run,
        } => {
            digest::run_digest(
                &config,
                window,
                keyword.as_deref(),
                output.as_deref(),
                dry_run,
            )
            .await
        }
        Commands::Browse {
            search,
            category,
            limit,
        } => browse::run_browse(&config, search.as_deref(), category.as_deref(), limit),
    }
}
