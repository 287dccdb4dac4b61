//! Runs every source in turn and concatenates their articles.

use crate::models::Article;
use crate::scrapers::newsapi::NewsApiSource;
use crate::scrapers::{sites, NewsSource, Source, SourceError};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use tracing::{info, instrument};

/// An ordered list of news sources.
#[derive(Debug)]
pub struct Aggregator {
    sources: Vec<Source>,
}

impl Aggregator {
    pub fn new(sources: Vec<Source>) -> Self {
        Self { sources }
    }

    /// NewsAPI followed by Valor Econômico, Exame and InfoMoney.
    pub fn standard(api_key: &str, query: &str, language: &str) -> Result<Self, SourceError> {
        let mut sources = vec![Source::from(NewsApiSource::new(api_key, query, language))];
        sources.extend(sites::all()?.into_iter().map(Source::from));
        Ok(Self::new(sources))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.label()).collect()
    }

    /// Fetch every source, one after the other, and concatenate the results.
    ///
    /// Articles keep their per-source order and sources keep their position in
    /// the list. A failing source contributes no articles.
    #[instrument(level = "info", skip_all, fields(sources = self.sources.len()))]
    pub async fn collect(&self, client: &Client) -> Vec<Article> {
        let batches: Vec<Vec<Article>> = stream::iter(&self.sources)
            .then(|source| source.fetch_articles(client))
            .collect()
            .await;

        for (label, batch) in self.labels().iter().zip(&batches) {
            info!(source = %label, count = batch.len(), "Source contribution");
        }

        let articles: Vec<Article> = batches.into_iter().flatten().collect();
        info!(count = articles.len(), "Total articles aggregated");
        articles
    }
}
