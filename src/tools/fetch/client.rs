use super::headers::default_headers;
use crate::error::{ChartError, Result};
use crate::types::HydrateConfig;
use reqwest::{redirect, Client};
use std::time::Duration;

const REDIRECT_LIMIT: usize = 10;
const POOL_IDLE_TIMEOUT_SEC: u64 = 90;

/// Build the shared reqwest client for chart fetches.
pub(super) fn build_client(cfg: &HydrateConfig) -> Result<Client> {
    Client::builder()
        .default_headers(default_headers(&cfg.user_agent))
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(Duration::from_millis(cfg.timeout_ms))
        .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SEC))
        .build()
        .map_err(|e| ChartError::Config(format!("Failed to build client: {e}")))
}
