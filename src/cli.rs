//! Command-line interface definitions.
//!
//! All arguments can be provided via command-line flags; the API key can also
//! come from the `NEWSAPI_KEY` environment variable.

use crate::scrapers::newsapi::{DEFAULT_LANGUAGE, DEFAULT_QUERY};
use clap::{Parser, ValueEnum};

/// How the digest is printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Markdown,
    Json,
}

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Every source, plain listing
/// NEWSAPI_KEY=... finance_news
///
/// # Only two sources, as Markdown
/// finance_news --newsapi-key KEY -s Exame -s InfoMoney -f markdown
///
/// # Show which sources produced articles in this run
/// finance_news --list-sources
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// NewsAPI key
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    pub newsapi_key: String,

    /// NewsAPI search query
    #[arg(short, long, default_value = DEFAULT_QUERY)]
    pub query: String,

    /// NewsAPI language code
    #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Only show articles from this source (repeatable; default: all sources)
    #[arg(short, long = "source", value_name = "LABEL")]
    pub sources: Vec<String>,

    /// Print the sources found in this run and exit
    #[arg(long)]
    pub list_sources: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Also write the digest as JSON under this directory
    #[arg(short, long)]
    pub json_output_dir: Option<String>,
}
