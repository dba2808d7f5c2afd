use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE, USER_AGENT};
use tracing::info;

const SERVER: &str = "https://www.linkedin.com";
const UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const TIMEOUT: Duration = Duration::from_secs(30);

/// Build the search URL for a keyword query.
pub fn search_url(keywords: &str) -> String {
    format!(
        "{}/search/results/index/?keywords={}",
        SERVER,
        urlencoding::encode(keywords)
    )
}

/// Fetch one search-results page, authenticated by the li_at session cookie.
/// One attempt, no pagination; a non-success status is fatal.
pub async fn fetch_search_page(access_token: &str, keywords: &str) -> Result<String> {
    let url = search_url(keywords);

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(UA));
    let cookie = format!("li_at={}", access_token);
    headers.insert(
        COOKIE,
        HeaderValue::from_str(&cookie).context("Access token is not a valid cookie value")?,
    );

    let client = reqwest::Client::builder()
        .timeout(TIMEOUT)
        .default_headers(headers)
        .build()?;

    info!("Fetching search results: {}", url);
    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        anyhow::bail!("Search request failed with status {}", response.status());
    }

    response
        .text()
        .await
        .context("Failed to read search response body")
}

// ── Tests ──
