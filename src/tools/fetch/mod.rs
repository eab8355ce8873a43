//! Fetch Tools
//!
//! Retrieves raw chart markup. One GET per call: no retries, no caching.
//! Failover between sources belongs to the engine.

mod client;
mod headers;
mod tests;
mod urls;
mod utils;

pub use urls::{fallback_url, primary_url, source_url};

use crate::error::{ChartError, Result};
use crate::types::HydrateConfig;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Anything that can turn a URL into markup.
#[async_trait]
pub trait Fetcher: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fails with [`ChartError::Transport`] on a non-success status or when the
    /// connection itself is rejected.
    async fn fetch_markup(&self, url: &str) -> Result<String>;
}

pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(cfg: &HydrateConfig) -> Result<Self> {
        let client = client::build_client(cfg)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn fetch_markup(&self, url: &str) -> Result<String> {
        debug!(url, "fetching chart markup");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ChartError::transport(url, format!("HTTP request failed: {e}")))?;

        let status = response.status();
        utils::validate_status(status).map_err(|reason| ChartError::transport(url, reason))?;

        response
            .text()
            .await
            .map_err(|e| ChartError::transport(url, format!("Failed to read response: {e}")))
    }
}
