// src/core/net.rs
// Blocking HTTPS GET. Called from worker threads, so no async runtime.

use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::options::FetchOptions;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("reading body of {url} failed: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

pub fn client(opts: &FetchOptions) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(opts.timeout_secs))
        .user_agent(opts.user_agent.clone())
        .build()
}

/// Body of a 2xx response. A non-success status is `Ok(None)`: the page
/// isn't published (yet), which is normal, not an error.
pub fn http_get(client: &Client, url: &str) -> Result<Option<String>, FetchError> {
    let resp = client
        .get(url)
        .send()
        .map_err(|source| FetchError::Transport { url: s!(url), source })?;

    let status = resp.status();
    if !status.is_success() {
        logd!("Net: {status} {url}");
        return Ok(None);
    }

    resp.text()
        .map(Some)
        .map_err(|source| FetchError::Body { url: s!(url), source })
}
