// src/core/net.rs
// Blocking HTTP GET for catalogue pages. One request per call, no retries.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::config::options::ScrapeOptions;
use crate::scrape::PageSource;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("cannot build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error: {status} {url}")]
    Status { url: String, status: u16 },
}

pub fn build_client() -> Result<Client, FetchError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(FetchError::Client)
}

/// GET `url`, returning the body on a success status.
pub fn http_get(client: &Client, url: &str) -> Result<String, FetchError> {
    let transport = |source| FetchError::Transport { url: s!(url), source };

    let resp = client.get(url).send().map_err(transport)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
    }
    resp.text().map_err(transport)
}

/// Live catalogue pages, addressed through the options' URL template.
pub struct HttpSource {
    client: Client,
    opts: ScrapeOptions,
}

impl HttpSource {
    pub fn new(opts: &ScrapeOptions) -> Result<Self, FetchError> {
        Ok(Self { client: build_client()?, opts: opts.clone() })
    }
}

impl PageSource for HttpSource {
    fn fetch_page(&mut self, page: u32) -> Result<String, FetchError> {
        let url = self.opts.page_url(page);
        logd!("Net: GET {}", url);
        http_get(&self.client, &url)
    }
}
