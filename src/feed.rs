//! Fetching and parsing of the repository releases feed.

use anyhow::Result;
use feed_rs::parser;
use reqwest::StatusCode;
use std::io::Cursor;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::TARGET_WEB_REQUEST;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One release item from the upstream feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseEntry {
    pub title: String,
    pub link: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    BadStatus(StatusCode),
    #[error("feed parse error: {0}")]
    Parse(#[from] feed_rs::parser::ParseFeedError),
}

/// Creates the shared HTTP client used for feed and Slack requests.
pub fn create_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .gzip(true)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))
}

/// Builds the releases feed URL for a repository.
pub fn releases_feed_url(base_url: &str, owner: &str, repo: &str) -> String {
    format!(
        "{}/{}/{}/releases.atom",
        base_url.trim_end_matches('/'),
        owner,
        repo
    )
}

/// Fetches the releases feed for a repository and parses it into entries,
/// ordered as served upstream (newest first).
pub async fn fetch_releases(
    client: &reqwest::Client,
    base_url: &str,
    owner: &str,
    repo: &str,
) -> Result<Vec<ReleaseEntry>, FetchError> {
    let feed_url = releases_feed_url(base_url, owner, repo);
    info!(target: TARGET_WEB_REQUEST, "Loading releases feed from {}", feed_url);

    let response = client.get(&feed_url).send().await?;
    let status = response.status();
    debug!(target: TARGET_WEB_REQUEST, "Request to {} returned status {}", feed_url, status);

    if !status.is_success() {
        error!(target: TARGET_WEB_REQUEST, "Non-success status {} from {}", status, feed_url);
        return Err(FetchError::BadStatus(status));
    }

    let body = response.text().await?;
    debug!(target: TARGET_WEB_REQUEST, "Received body from {}: {}", feed_url, body);

    let entries = parse_release_feed(&body)?;
    debug!(
        target: TARGET_WEB_REQUEST,
        "Parsed feed from {} with {} entries: {:?}",
        feed_url,
        entries.len(),
        entries
    );
    Ok(entries)
}

/// Parses an Atom document into release entries. Entries with a missing
/// title or link are kept with empty-string defaults rather than dropped.
pub fn parse_release_feed(body: &str) -> Result<Vec<ReleaseEntry>, FetchError> {
    let reader = Cursor::new(body);
    let feed = parser::parse(reader)?;

    let entries = feed
        .entries
        .into_iter()
        .map(|entry| ReleaseEntry {
            title: entry.title.map(|t| t.content).unwrap_or_default(),
            link: entry
                .links
                .first()
                .map(|link| link.href.clone())
                .unwrap_or_default(),
        })
        .collect();

    Ok(entries)
}
