//! Fetching feed bodies over HTTP.

use anyhow::{Context, Result};

/// Fetch one feed's raw ICS body.
///
/// Any failure here is fatal for the whole run: a partial artifact is
/// meaningless without knowing every feed was complete, so nothing is
/// retried or skipped at this level.
pub async fn fetch_feed(url: &str) -> Result<String> {
    let response = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("fetching feed {url}"))?;

    response
        .text()
        .await
        .with_context(|| format!("reading feed body from {url}"))
}
