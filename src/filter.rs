//! Source filtering for the view layer.
//!
//! The aggregated list offers its distinct source labels as filter options;
//! a [`SourceSelection`] then narrows the list down. Selecting nothing means
//! "no filter", the same as selecting every source.

use crate::models::{Article, Digest};
use chrono::NaiveDateTime;
use itertools::Itertools;
use std::collections::BTreeSet;
use tracing::warn;

/// Distinct source labels in order of first appearance.
pub fn distinct_sources(articles: &[Article]) -> Vec<String> {
    articles
        .iter()
        .filter_map(Article::source_label)
        .unique()
        .map(str::to_string)
        .collect()
}

/// Which sources to display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SourceSelection {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl SourceSelection {
    /// Build a selection from labels. No labels selects every source.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = labels.into_iter().map(Into::into).collect();
        if set.is_empty() {
            SourceSelection::All
        } else {
            SourceSelection::Only(set)
        }
    }

    pub fn labels(&self) -> Vec<String> {
        match self {
            SourceSelection::All => Vec::new(),
            SourceSelection::Only(set) => set.iter().cloned().collect(),
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        match self {
            SourceSelection::All => true,
            SourceSelection::Only(set) => article.source_label().is_some_and(|s| set.contains(s)),
        }
    }

    /// Keep the matching articles, in their original order.
    pub fn apply(&self, articles: Vec<Article>) -> Vec<Article> {
        match self {
            SourceSelection::All => articles,
            SourceSelection::Only(_) => articles.into_iter().filter(|a| self.matches(a)).collect(),
        }
    }
}

/// Filter one run's articles and stamp the result with `now`.
///
/// Selected labels that no article carries are reported with a warning.
pub fn build_digest(articles: Vec<Article>, selection: &SourceSelection, now: NaiveDateTime) -> Digest {
    let sources = distinct_sources(&articles);
    for label in selection.labels() {
        if !sources.contains(&label) {
            warn!(source = %label, available = ?sources, "Selected source has no articles in this run");
        }
    }

    Digest {
        local_date: now.date().to_string(),
        local_time: now.time().format("%H:%M:%S").to_string(),
        sources,
        selected: selection.labels(),
        articles: selection.apply(articles),
    }
}
