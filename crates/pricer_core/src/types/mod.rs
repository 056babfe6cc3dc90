//! Core financial types.
//!
//! This module provides:
//! - `ticker`: Normalised stock ticker identifiers
//! - `snapshot`: Raw and validated financial snapshots for one ticker
//! - `error`: Structured error types for tickers and the valuation pipeline
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Ticker`] from `ticker`
//! - [`FinancialField`], [`FinancialSnapshot`], [`CompleteSnapshot`] from `snapshot`
//! - [`ValuationError`], [`TickerError`] from `error`

pub mod error;
pub mod snapshot;
pub mod ticker;

pub use error::{TickerError, ValuationError};
pub use snapshot::{CompleteSnapshot, FinancialField, FinancialSnapshot};
pub use ticker::Ticker;
