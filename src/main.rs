mod fetch;
mod merge;
mod output;
mod parser;

use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::warn;

#[derive(Parser)]
#[command(name = "li_scraper", about = "LinkedIn search results to CSV")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a search-results page and export contacts to CSV
    Run {
        /// Search keywords (URL-encoded automatically)
        #[arg(short, long)]
        keywords: String,
        /// Output CSV path
        #[arg(short, long)]
        output: String,
        /// li_at session cookie value (default: LI_AT environment variable)
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Run the extraction pipeline over a saved search-results page
    Parse {
        /// Path to a saved HTML page
        #[arg(short, long)]
        input: String,
        /// Output CSV path
        #[arg(short, long)]
        output: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            keywords,
            output,
            token,
        } => {
            let token = token
                .or_else(|| std::env::var("LI_AT").ok())
                .context("Pass --token or set the LI_AT environment variable")?;
            let html = fetch::fetch_search_page(&token, &keywords).await?;
            export(&html, &output)?;
        }
        Commands::Parse { input, output } => {
            let html = std::fs::read_to_string(&input)
                .with_context(|| format!("Cannot read input file {}", input))?;
            export(&html, &output)?;
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}

fn export(html: &str, out_path: &str) -> anyhow::Result<()> {
    let results = parser::process_page(html)?;
    if results.blocks == 0 {
        warn!("No payload blocks found; page layout unrecognized or login required");
    }

    let rows = results.merger.completed();
    let incomplete = results.merger.len() - rows.len();
    output::write_csv(out_path, &rows)?;

    println!(
        "Parsed {} profile and {} search records ({} skipped); wrote {} rows to {} ({} incomplete dropped).",
        results.counts.profiles,
        results.counts.search_results,
        results.counts.skipped,
        rows.len(),
        out_path,
        incomplete,
    );
    Ok(())
}
