//! Network-facing collaborators for newsgrep: RSS feed-list and feed parsing
//! plus article HTML fetch-and-tokenize, all over one shared HTTP client.

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

pub mod html;
pub mod rss;

pub use rss::FeedHead;

const USER_AGENT: &str = concat!("newsgrep/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// Build the HTTP client shared by every fetch in a run. Collaborators own
/// their I/O timeouts; callers treat a timeout as an ordinary fetch failure.
pub fn http_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(5))
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("failed to build HTTP client")
}

pub(crate) async fn get_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request to \"{url}\" failed"))?
        .error_for_status()
        .with_context(|| format!("request to \"{url}\" was refused"))?;
    let bytes = resp
        .bytes()
        .await
        .with_context(|| format!("failed to read response body from \"{url}\""))?;
    Ok(bytes.to_vec())
}
