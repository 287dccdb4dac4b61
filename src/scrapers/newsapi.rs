//! NewsAPI `everything` search.
//!
//! One GET per run against `https://newsapi.org/v2/everything` with the query,
//! language and API key as query parameters. Only the first page of results is
//! used. Fields missing from an article element, or of an unexpected type,
//! become `None` instead of failing the whole response.

use super::{get_text, NewsSource, SourceError};
use crate::models::Article;
use crate::utils::truncate_for_log;
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use tracing::{debug, instrument, warn};

/// The NewsAPI search endpoint.
pub const NEWSAPI_ENDPOINT: &str = "https://newsapi.org/v2/everything";
/// Default search query ("financial market").
pub const DEFAULT_QUERY: &str = "mercado financeiro";
/// Default language code.
pub const DEFAULT_LANGUAGE: &str = "pt";

const LABEL: &str = "NewsAPI";

/// Articles from the NewsAPI search endpoint.
///
/// The source label of each article is the publisher name NewsAPI reports,
/// not [`NewsSource::label`].
pub struct NewsApiSource {
    api_key: String,
    query: String,
    language: String,
    endpoint: String,
}

impl NewsApiSource {
    pub fn new(api_key: &str, query: &str, language: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            query: query.to_string(),
            language: language.to_string(),
            endpoint: NEWSAPI_ENDPOINT.to_string(),
        }
    }

    /// Point the source at a different search endpoint.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }
}

impl fmt::Debug for NewsApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiSource")
            .field("query", &self.query)
            .field("language", &self.language)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl NewsSource for NewsApiSource {
    fn label(&self) -> &str {
        LABEL
    }

    #[instrument(level = "info", skip_all, fields(query = %self.query, language = %self.language))]
    async fn try_fetch(&self, client: &Client) -> Result<Vec<Article>, SourceError> {
        let request = client.get(&self.endpoint).query(&[
            ("q", self.query.as_str()),
            ("language", self.language.as_str()),
            ("apiKey", self.api_key.as_str()),
        ]);
        let body = get_text(request).await?;

        let articles = parse_response(&body).inspect_err(|e| {
            warn!(error = %e, body_preview = %truncate_for_log(&body, 300), "NewsAPI returned unparseable body");
        })?;
        debug!(count = articles.len(), "Parsed NewsAPI response");
        Ok(articles)
    }
}

/// Normalize a NewsAPI response body.
///
/// A body without an `articles` array yields no articles.
pub fn parse_response(body: &str) -> Result<Vec<Article>, SourceError> {
    let value: Value = serde_json::from_str(body)?;
    let articles = value
        .get("articles")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(to_article).collect())
        .unwrap_or_default();
    Ok(articles)
}

fn to_article(item: &Value) -> Article {
    let text = |key: &str| item.get(key).and_then(Value::as_str).map(str::to_string);
    Article {
        title: text("title"),
        source: item
            .get("source")
            .and_then(|s| s.get("name"))
            .and_then(Value::as_str)
            .map(str::to_string),
        date: text("publishedAt"),
        url: text("url"),
        image: text("urlToImage"),
    }
}
