//! Text and file system helpers.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Join text fragments into one line.
///
/// Fragments are joined with spaces, runs of whitespace collapse to a single
/// space and the result is trimmed.
pub fn collapse_whitespace<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let joined = parts.into_iter().collect::<Vec<_>>().join(" ");
    WHITESPACE.replace_all(joined.trim(), " ").into_owned()
}

/// Truncate a string for logging purposes.
///
/// Strings longer than `max` characters are cut and get `"…(+N bytes)"`
/// appended, N being the number of bytes dropped.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then creates and removes a probe file.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace(["  Ibovespa ", "\n fecha\t", "em alta "]), "Ibovespa fecha em alta");
        assert_eq!(collapse_whitespace(["", "  "]), "");
        assert_eq!(collapse_whitespace(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Olá, mundo!", 100), "Olá, mundo!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.ends_with("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        let result = truncate_for_log("çççç", 2);
        assert_eq!(result, "çç…(+4 bytes)");
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_nested() {
        let dir = std::env::temp_dir()
            .join(format!("finance_news_utils_{}", std::process::id()))
            .join("nested");
        let path = dir.to_str().unwrap();

        ensure_writable_dir(path).await.unwrap();
        assert!(dir.is_dir());
        assert!(!dir.join("..__probe_write__").exists());

        let _ = std::fs::remove_dir_all(dir.parent().unwrap());
    }
}
