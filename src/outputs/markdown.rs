//! Markdown rendering.
//!
//! Mirrors the dashboard: a title, the "recent news" section with one
//! heading per article (thumbnail, source and link underneath) and the
//! displayed total at the end.

use crate::models::Digest;
use std::fmt::Write;

pub fn render(digest: &Digest) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# Dashboard de Notícias Financeiras\n");
    let _ = writeln!(md, "_{} {}_\n", digest.local_date, digest.local_time);

    let filters = if digest.selected.is_empty() {
        digest.sources.join(", ")
    } else {
        digest.selected.join(", ")
    };
    let _ = writeln!(md, "**Fontes:** {filters}\n");

    let _ = writeln!(md, "## Notícias Recentes\n");
    for article in &digest.articles {
        let _ = writeln!(md, "### {}\n", article.title.as_deref().unwrap_or("(sem título)"));
        if let Some(image) = &article.image {
            let _ = writeln!(md, "![]({image})\n");
        }
        let _ = writeln!(md, "**Fonte:** {}\n", article.source.as_deref().unwrap_or("-"));
        if let Some(url) = &article.url {
            let _ = writeln!(md, "[Leia mais]({url})\n");
        }
    }

    let _ = writeln!(md, "---\n\nTotal de notícias exibidas: {}", digest.articles.len());
    md
}
