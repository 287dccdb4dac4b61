//! Data models shared by every news source.
//!
//! - [`Article`]: the normalized record every source produces
//! - [`Digest`]: one aggregation run, filtered and stamped, ready to render

use serde::{Deserialize, Serialize};

/// A news article normalized to the shape shared by all sources.
///
/// Every field is optional so that sources with unexpected formatting still
/// produce a record. Missing values serialize as `null`, never as absent keys,
/// which keeps the JSON shape identical across sources.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Article {
    /// The headline.
    pub title: Option<String>,
    /// Label naming the origin (publisher or NewsAPI source name). Used as the filter key.
    pub source: Option<String>,
    /// Publish time as given by the source (ISO-8601), when the source provides one.
    pub date: Option<String>,
    /// Link to the full article.
    pub url: Option<String>,
    /// Thumbnail URL.
    pub image: Option<String>,
}

impl Article {
    /// Build an article scraped from a site listing, which carries no date or image.
    pub fn scraped(title: String, url: String, source: &str) -> Self {
        Self {
            title: Some(title),
            source: Some(source.to_string()),
            date: None,
            url: Some(url),
            image: None,
        }
    }

    /// Source label, if set and non-empty.
    pub fn source_label(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !s.is_empty())
    }
}

/// The result of one run as handed to the view layer.
///
/// `sources` lists every label found before filtering, so a consumer can
/// offer them as filter options; `selected` is empty when no filter applies.
#[derive(Debug, Deserialize, Serialize)]
pub struct Digest {
    /// The date of the run in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The local time of the run in `HH:MM:SS` format.
    pub local_time: String,
    /// Distinct source labels of the unfiltered run, in first-appearance order.
    pub sources: Vec<String>,
    /// Source labels the articles were filtered by. Empty means all sources.
    pub selected: Vec<String>,
    /// The filtered articles, in aggregation order.
    pub articles: Vec<Article>,
}
