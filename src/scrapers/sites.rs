//! The scraped Brazilian market news sites.

use super::site::SiteScraper;
use super::SourceError;

pub const VALOR_ECONOMICO_URL: &str = "https://valor.globo.com/";
pub const EXAME_URL: &str = "https://exame.com/mercados/";
pub const INFOMONEY_URL: &str = "https://www.infomoney.com.br/mercados/";

/// Valor Econômico homepage feed. Title and link share the same anchor.
pub fn valor_economico() -> Result<SiteScraper, SourceError> {
    SiteScraper::new(
        VALOR_ECONOMICO_URL,
        "div.feed-post-body",
        "a.feed-post-link",
        "Valor Econômico",
    )?
    .with_link_selector("a.feed-post-link")
}

/// Exame markets section.
pub fn exame() -> Result<SiteScraper, SourceError> {
    SiteScraper::new(EXAME_URL, "div.feed-item-wrapper", "h3", "Exame")
}

/// InfoMoney markets section.
pub fn infomoney() -> Result<SiteScraper, SourceError> {
    SiteScraper::new(
        INFOMONEY_URL,
        "div.col-xs-12.col-sm-8.col-md-8.news-item",
        "h2",
        "InfoMoney",
    )
}

/// All scraped sites, in aggregation order.
pub fn all() -> Result<Vec<SiteScraper>, SourceError> {
    Ok(vec![valor_economico()?, exame()?, infomoney()?])
}
