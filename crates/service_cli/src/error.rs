//! CLI error types.

use adapter_feeds::FeedError;
use pricer_core::types::{TickerError, ValuationError};
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Valuation error
    #[error(transparent)]
    Valuation(#[from] ValuationError),

    /// Snapshot feed error
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// Ticker symbol rejected
    #[error(transparent)]
    Ticker(#[from] TickerError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Every requested ticker failed
    #[error("No ticker could be valued ({0} failed)")]
    AllFailed(usize),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
