//! # Finance News
//!
//! Aggregates Brazilian financial news from NewsAPI and three market news
//! sites into one list that can be filtered by source.
//!
//! ## Sources
//!
//! - NewsAPI `everything` search (requires an API key)
//! - Valor Econômico, Exame and InfoMoney listing pages (HTML scraping, ten
//!   articles each at most)
//!
//! ## Usage
//!
//! ```sh
//! NEWSAPI_KEY=... finance_news -s Exame -f markdown
//! ```
//!
//! ## Architecture
//!
//! 1. **Fetching**: each source is queried in turn; a failing source is
//!    logged and contributes no articles
//! 2. **Filtering**: the combined list is narrowed to the selected sources
//! 3. **Output**: the digest is printed as text, Markdown or JSON and
//!    optionally written to a dated JSON file

use chrono::Local;
use clap::Parser;
use reqwest::Client;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod aggregator;
mod cli;
mod filter;
mod models;
mod outputs;
mod scrapers;
mod utils;

use aggregator::Aggregator;
use cli::{Cli, Format};
use filter::{build_digest, distinct_sources, SourceSelection};
use outputs::{json, markdown, text};
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("finance_news starting up");

    let args = Cli::parse();
    debug!(query = %args.query, language = %args.language, sources = ?args.sources, format = ?args.format, "Parsed CLI arguments");

    // Early check: ensure JSON output dir is writable
    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "JSON output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    // ---- Fetch ----
    let aggregator = Aggregator::standard(&args.newsapi_key, &args.query, &args.language)?;
    info!(sources = ?aggregator.labels(), "Fetching news");
    let articles = aggregator.collect(&client).await;

    if args.list_sources {
        for label in distinct_sources(&articles) {
            println!("{label}");
        }
        return Ok(());
    }

    // ---- Filter ----
    let selection = SourceSelection::from_labels(args.sources);
    let digest = build_digest(articles, &selection, Local::now().naive_local());
    info!(
        available = digest.sources.len(),
        selected = ?digest.selected,
        displayed = digest.articles.len(),
        "Applied source filter"
    );

    // ---- Output ----
    let rendered = match args.format {
        Format::Text => text::render(&digest),
        Format::Markdown => markdown::render(&digest),
        Format::Json => json::render(&digest)?,
    };
    println!("{rendered}");

    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = json::write_digest(&digest, dir).await {
            error!(error = %e, "Failed to write JSON digest");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
