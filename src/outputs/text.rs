//! Plain-text rendering for the terminal.

use crate::models::Digest;
use std::fmt::Write;

/// Render a digest as a plain listing followed by the displayed total.
pub fn render(digest: &Digest) -> String {
    let mut out = String::new();
    for article in &digest.articles {
        let _ = writeln!(out, "{}", article.title.as_deref().unwrap_or("(sem título)"));
        let _ = writeln!(out, "  Fonte: {}", article.source.as_deref().unwrap_or("-"));
        if let Some(date) = &article.date {
            let _ = writeln!(out, "  Data: {date}");
        }
        let _ = writeln!(out, "  Leia mais: {}", article.url.as_deref().unwrap_or("-"));
        out.push('\n');
    }
    let _ = writeln!(out, "Total de notícias exibidas: {}", digest.articles.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;

    #[test]
    fn test_render_text() {
        let digest = Digest {
            local_date: "2024-09-20".to_string(),
            local_time: "08:00:00".to_string(),
            sources: vec!["Exame".to_string()],
            selected: vec![],
            articles: vec![
                Article::scraped("Ibovespa sobe".to_string(), "https://exame.com/a".to_string(), "Exame"),
                Article::default(),
            ],
        };

        let out = render(&digest);
        assert!(out.starts_with("Ibovespa sobe\n  Fonte: Exame\n  Leia mais: https://exame.com/a\n"));
        assert!(out.contains("(sem título)\n  Fonte: -\n  Leia mais: -\n"));
        assert!(out.ends_with("Total de notícias exibidas: 2\n"));
    }
}
