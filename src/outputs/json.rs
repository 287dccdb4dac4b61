//! JSON output.
//!
//! Digests are written to `{json_output_dir}/{local_date}/{HH-MM-SS}.json`,
//! one file per run.

use crate::models::Digest;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize a digest for stdout.
pub fn render(digest: &Digest) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(digest)
}

/// Write a [`Digest`] to a dated JSON file and return its path.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_digest(digest: &Digest, json_output_dir: &str) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string(digest)?;

    let dir = PathBuf::from(json_output_dir).join(&digest.local_date);
    if let Err(e) = fs::create_dir_all(&dir).await {
        error!(dir = %dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let path = dir.join(format!("{}.json", digest.local_time.replace(':', "-")));
    fs::write(&path, json).await?;
    info!(path = %path.display(), articles = digest.articles.len(), "Wrote JSON digest");
    Ok(path)
}
