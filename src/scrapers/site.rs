//! Generic listing-page scraper.
//!
//! A [`SiteScraper`] downloads one page, selects article cards with a CSS
//! selector and reads a title and a link out of each of the first
//! [`MAX_ARTICLES_PER_SITE`] cards. Cards that don't have the expected markup
//! are skipped with a warning; they never fail the page.

use super::{get_text, NewsSource, SourceError, MAX_ARTICLES_PER_SITE};
use crate::models::Article;
use crate::utils::collapse_whitespace;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::fmt;
use tracing::{debug, instrument, warn};
use url::Url;

/// A CSS selector kept together with its source text for error messages.
#[derive(Clone)]
struct Css {
    text: String,
    selector: Selector,
}

impl Css {
    fn parse(text: &str) -> Result<Self, SourceError> {
        let selector = Selector::parse(text).map_err(|e| SourceError::Selector {
            selector: text.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            text: text.to_string(),
            selector,
        })
    }

    fn first<'a>(&self, parent: ElementRef<'a>) -> Result<ElementRef<'a>, SourceError> {
        parent
            .select(&self.selector)
            .next()
            .ok_or_else(|| SourceError::MissingElement(self.text.clone()))
    }
}

impl fmt::Debug for Css {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Scraper for one site's listing page.
#[derive(Debug, Clone)]
pub struct SiteScraper {
    url: String,
    label: String,
    item: Css,
    title: Css,
    link: Css,
}

impl SiteScraper {
    /// Create a scraper for the page at `url`.
    ///
    /// Article cards are matched by `item_selector`; the title is the text of the
    /// first `title_selector` match inside a card and the link is the `href` of
    /// the card's first `a` (see [`SiteScraper::with_link_selector`]). Every
    /// article is labeled with `source_label`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Selector`] if a selector is not valid CSS.
    pub fn new(
        url: &str,
        item_selector: &str,
        title_selector: &str,
        source_label: &str,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            url: url.to_string(),
            label: source_label.to_string(),
            item: Css::parse(item_selector)?,
            title: Css::parse(title_selector)?,
            link: Css::parse("a")?,
        })
    }

    /// Read the link from the first match of `link_selector` instead of the first `a`.
    pub fn with_link_selector(mut self, link_selector: &str) -> Result<Self, SourceError> {
        self.link = Css::parse(link_selector)?;
        Ok(self)
    }

    /// Extract articles from a listing page.
    ///
    /// Relative links are resolved against the scraper's URL.
    pub fn parse_listing(&self, html: &str) -> Vec<Article> {
        let document = Html::parse_document(html);
        let base = Url::parse(&self.url).ok();

        document
            .select(&self.item.selector)
            .take(MAX_ARTICLES_PER_SITE)
            .enumerate()
            .filter_map(|(index, card)| match self.extract(card, base.as_ref()) {
                Ok(article) => Some(article),
                Err(e) => {
                    warn!(source = %self.label, index, error = %e, "Skipping malformed article card");
                    None
                }
            })
            .collect()
    }

    fn extract(&self, card: ElementRef<'_>, base: Option<&Url>) -> Result<Article, SourceError> {
        let title = collapse_whitespace(self.title.first(card)?.text());
        let href = self
            .link
            .first(card)?
            .value()
            .attr("href")
            .ok_or_else(|| SourceError::MissingAttribute {
                selector: self.link.text.clone(),
                attribute: "href",
            })?;

        Ok(Article::scraped(title, resolve_href(base, href), &self.label))
    }
}

impl NewsSource for SiteScraper {
    fn label(&self) -> &str {
        &self.label
    }

    #[instrument(level = "info", skip_all, fields(source = %self.label, url = %self.url))]
    async fn try_fetch(&self, client: &Client) -> Result<Vec<Article>, SourceError> {
        let html = get_text(client.get(&self.url)).await?;
        let articles = self.parse_listing(&html);
        debug!(count = articles.len(), bytes = html.len(), "Parsed listing page");
        Ok(articles)
    }
}

fn resolve_href(base: Option<&Url>, href: &str) -> String {
    base.and_then(|b| b.join(href).ok())
        .map(String::from)
        .unwrap_or_else(|| href.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(count: usize) -> String {
        let mut html = String::from("<html><body>");
        for i in 0..count {
            html.push_str(&format!(
                r#"<div class="card"><h2> Title {i} </h2><a href="/news/{i}">read</a></div>"#
            ));
        }
        html.push_str("</body></html>");
        html
    }

    fn scraper(url: &str) -> SiteScraper {
        SiteScraper::new(url, "div.card", "h2", "Test Site").unwrap()
    }

    #[test]
    fn test_parse_listing_caps_at_ten() {
        let articles = scraper("https://example.com/").parse_listing(&cards(15));
        assert_eq!(articles.len(), MAX_ARTICLES_PER_SITE);
        for (i, article) in articles.iter().enumerate() {
            assert_eq!(article.title, Some(format!("Title {i}")));
            assert_eq!(article.url, Some(format!("https://example.com/news/{i}")));
            assert_eq!(article.source.as_deref(), Some("Test Site"));
            assert_eq!(article.date, None);
            assert_eq!(article.image, None);
        }
    }

    #[test]
    fn test_parse_listing_fewer_than_cap() {
        let articles = scraper("https://example.com/").parse_listing(&cards(3));
        assert_eq!(articles.len(), 3);
    }

    #[test]
    fn test_title_whitespace_is_collapsed() {
        let html = r#"<div class="card"><h2>
            Dólar   <span>fecha</span>
            em alta
        </h2><a href="https://other.com/x">x</a></div>"#;
        let articles = scraper("https://example.com/").parse_listing(html);
        assert_eq!(articles[0].title.as_deref(), Some("Dólar fecha em alta"));
        assert_eq!(articles[0].url.as_deref(), Some("https://other.com/x"));
    }

    #[test]
    fn test_malformed_cards_are_skipped() {
        let html = r#"
            <div class="card"><h2>Good 1</h2><a href="/1">1</a></div>
            <div class="card"><a href="/2">no title</a></div>
            <div class="card"><h2>No link</h2></div>
            <div class="card"><h2>No href</h2><a>3</a></div>
            <div class="card"><h2>Good 2</h2><a href="/5">5</a></div>
        "#;
        let articles = scraper("https://example.com/").parse_listing(html);
        let titles: Vec<_> = articles.iter().filter_map(|a| a.title.as_deref()).collect();
        assert_eq!(titles, vec!["Good 1", "Good 2"]);
    }

    #[test]
    fn test_cap_counts_skipped_cards() {
        let mut html = String::from(r#"<div class="card"><p>broken</p></div>"#);
        html.push_str(&cards(12));
        let articles = scraper("https://example.com/").parse_listing(&html);
        assert_eq!(articles.len(), MAX_ARTICLES_PER_SITE - 1);
    }

    #[test]
    fn test_custom_link_selector() {
        let html = r#"<div class="card"><a href="/tag">tag</a><h2>T</h2><a class="main" href="/story">s</a></div>"#;
        let articles = scraper("https://example.com/")
            .with_link_selector("a.main")
            .unwrap()
            .parse_listing(html);
        assert_eq!(articles[0].url.as_deref(), Some("https://example.com/story"));
    }

    #[test]
    fn test_invalid_selector() {
        let result = SiteScraper::new("https://example.com/", "div[", "h2", "Bad");
        assert!(matches!(result, Err(SourceError::Selector { .. })));
    }

    #[test]
    fn test_unparseable_base_keeps_raw_href() {
        let articles = scraper("not a url").parse_listing(&cards(1));
        assert_eq!(articles[0].url.as_deref(), Some("/news/0"));
    }

    #[tokio::test]
    async fn test_fetch_fifteen_cards() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/mercados/")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(cards(15))
            .create_async()
            .await;

        let site = scraper(&format!("{}/mercados/", server.url()));
        let articles = site.fetch_articles(&Client::new()).await;

        assert_eq!(articles.len(), 10);
        assert!(articles.iter().all(|a| a.date.is_none() && a.image.is_none()));
        assert!(articles.iter().all(|a| a.source.as_deref() == Some("Test Site")));
        assert_eq!(
            articles[0].url,
            Some(format!("{}/news/0", server.url()))
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(500)
            .with_body(cards(3))
            .create_async()
            .await;

        let site = scraper(&format!("{}/", server.url()));
        assert!(site.fetch_articles(&Client::new()).await.is_empty());
    }
}
