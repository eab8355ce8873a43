use thiserror::Error;

use crate::types::Source;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Non-success status or a rejected connection.
    #[error("fetch failed for {url}: {reason}")]
    Transport { url: String, reason: String },

    /// Fetch succeeded but nothing usable came out of the markup.
    #[error("no items from {origin} source")]
    EmptyResult { origin: Source },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ChartError {
    pub fn transport(url: &str, reason: impl Into<String>) -> Self {
        ChartError::Transport {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

/* Conversions so `?` works smoothly */
impl From<reqwest::Error> for ChartError {
    fn from(e: reqwest::Error) -> Self {
        let url = e.url().map(|u| u.to_string()).unwrap_or_default();
        ChartError::Transport {
            url,
            reason: e.to_string(),
        }
    }
}

impl From<url::ParseError> for ChartError {
    fn from(e: url::ParseError) -> Self {
        ChartError::InvalidUrl(e.to_string())
    }
}
