//! HTTP client wrapper for fetching glossary pages.

use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{GlossarError, Result};

/// User agent string identifying this scraper.
const USER_AGENT: &str = concat!("kofam-glossar/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` configured with appropriate timeout and user agent.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Download the body of a page as text.
///
/// A single attempt: connection failures and non-success statuses are
/// returned to the caller, which decides whether the stage is fatal.
pub fn fetch_text(client: &Client, url: &str) -> Result<String> {
    let page_fetch = |source| GlossarError::PageFetch {
        url: url.to_string(),
        source,
    };

    tracing::debug!(url, "Fetching page");
    let response = client.get(url).send().map_err(page_fetch)?;
    let response = response.error_for_status().map_err(page_fetch)?;
    response.text().map_err(page_fetch)
}

/// Download a page and parse it into a queryable HTML document.
pub fn fetch_html(client: &Client, url: &str) -> Result<Html> {
    let body = fetch_text(client, url)?;
    Ok(Html::parse_document(&body))
}
