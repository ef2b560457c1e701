// src/core/net.rs

// One GET per listing page, no retry.

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::{BASE_URL, PAGE_PARAM};
use crate::error::FetchError;

/// Source of raw listing markup, one page at a time.
///
/// `Sync` so several fetch workers can share one instance.
pub trait Fetch: Sync {
    /// Body of 1-based listing page `page`, or why it could not be had.
    fn fetch_page(&self, page: u32) -> Result<String, FetchError>;
}

/// The live site.
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { client: Client::new(), base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn fetch_page(&self, page: u32) -> Result<String, FetchError> {
        let http = |source| FetchError::Http { page, source };

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[(PAGE_PARAM, page)])
            .send()
            .map_err(http)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { page, status: status.as_u16() });
        }
        let body = resp.text().map_err(http)?;
        debug!("page {page}: {} bytes", body.len());
        Ok(body)
    }
}
