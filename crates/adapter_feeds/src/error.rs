//! Error types for snapshot feeds.

use std::path::PathBuf;

use pricer_core::types::{Ticker, TickerError};
use thiserror::Error;

/// Feed error type
#[derive(Debug, Error)]
pub enum FeedError {
    /// No snapshot is available for the ticker
    #[error("No data found for {ticker} in {source_name}")]
    NotFound {
        /// Requested ticker
        ticker: Ticker,
        /// Provider or location searched
        source_name: String,
    },

    /// Reading the payload failed
    #[error("IO error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Payload is not valid JSON
    #[error("Failed to parse data for {ticker}: {message}")]
    Parse {
        /// Ticker whose payload failed to parse
        ticker: Ticker,
        /// Parser message
        message: String,
    },

    /// Payload is valid JSON but not an object
    #[error("Unsupported payload for {ticker}: expected a JSON object, found {found}")]
    UnsupportedPayload {
        /// Ticker whose payload was rejected
        ticker: Ticker,
        /// JSON kind found instead
        found: &'static str,
    },

    /// Ticker symbol could not be parsed
    #[error(transparent)]
    InvalidTicker(#[from] TickerError),
}

impl FeedError {
    /// Create a not-found error
    pub fn not_found(ticker: &Ticker, source_name: impl Into<String>) -> Self {
        Self::NotFound {
            ticker: ticker.clone(),
            source_name: source_name.into(),
        }
    }

    /// Returns true if the error means the ticker is simply unavailable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
