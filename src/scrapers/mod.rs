//! News sources that feed the aggregator.
//!
//! Every source follows the same contract: one HTTP GET against its own fixed
//! configuration, normalized into a list of [`Article`]s. Failures never escape a
//! source; they are logged and the source contributes nothing to the run.
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | NewsAPI | [`newsapi`] | JSON API | Requires API key; query and language configurable |
//! | Valor Econômico | [`sites`] | HTML scraping | Homepage feed |
//! | Exame | [`sites`] | HTML scraping | Markets section |
//! | InfoMoney | [`sites`] | HTML scraping | Markets section |
//!
//! The three scraped sites share one implementation, [`site::SiteScraper`],
//! configured with a URL, CSS selectors and a source label.

pub mod newsapi;
pub mod site;
pub mod sites;

use crate::models::Article;
use newsapi::NewsApiSource;
use reqwest::{Client, RequestBuilder, StatusCode};
use site::SiteScraper;
use thiserror::Error;
use tracing::{error, info};

/// Maximum number of articles taken from one scraped site per run.
pub const MAX_ARTICLES_PER_SITE: usize = 10;

/// Everything that can go wrong while fetching or extracting from a source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Connection, TLS or body read failure. The request URL is stripped so
    /// credentials in the query string never reach the logs.
    #[error("request failed: {0}")]
    Transport(reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
    #[error("no element matches `{0}`")]
    MissingElement(String),
    #[error("element matching `{selector}` has no `{attribute}` attribute")]
    MissingAttribute {
        selector: String,
        attribute: &'static str,
    },
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        SourceError::Transport(e.without_url())
    }
}

/// A source of normalized articles.
///
/// Implementors only provide [`NewsSource::try_fetch`]; the provided
/// [`NewsSource::fetch_articles`] turns any failure into an empty result.
pub trait NewsSource {
    /// Human-readable name used in logs.
    fn label(&self) -> &str;

    /// Fetch and normalize, reporting failures to the caller.
    async fn try_fetch(&self, client: &Client) -> Result<Vec<Article>, SourceError>;

    /// Fetch and normalize. A failed source yields no articles.
    async fn fetch_articles(&self, client: &Client) -> Vec<Article> {
        match self.try_fetch(client).await {
            Ok(articles) => {
                info!(source = %self.label(), count = articles.len(), "Fetched articles");
                articles
            }
            Err(e) => {
                error!(source = %self.label(), error = %e, "Error fetching news; skipping source");
                Vec::new()
            }
        }
    }
}

/// All source kinds the aggregator can hold.
#[derive(Debug)]
pub enum Source {
    NewsApi(NewsApiSource),
    Site(SiteScraper),
}

impl From<NewsApiSource> for Source {
    fn from(source: NewsApiSource) -> Self {
        Source::NewsApi(source)
    }
}

impl From<SiteScraper> for Source {
    fn from(source: SiteScraper) -> Self {
        Source::Site(source)
    }
}

impl NewsSource for Source {
    fn label(&self) -> &str {
        match self {
            Source::NewsApi(s) => s.label(),
            Source::Site(s) => s.label(),
        }
    }

    async fn try_fetch(&self, client: &Client) -> Result<Vec<Article>, SourceError> {
        match self {
            Source::NewsApi(s) => s.try_fetch(client).await,
            Source::Site(s) => s.try_fetch(client).await,
        }
    }
}

/// Send a request and return the body, treating anything but `200 OK` as a failure.
pub(crate) async fn get_text(request: RequestBuilder) -> Result<String, SourceError> {
    let response = request.send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(SourceError::Status(status));
    }
    Ok(response.text().await?)
}
