//! Error types for structured error handling.
//!
//! This module provides:
//! - `TickerError`: Errors from ticker parsing
//! - `ValuationError`: Errors from snapshot validation and the DCF pipeline

use thiserror::Error;

use super::snapshot::FinancialField;
use super::ticker::Ticker;

/// Ticker parsing errors.
///
/// # Examples
/// ```
/// use pricer_core::types::TickerError;
///
/// let err = TickerError::InvalidCharacter { ticker: "AB C".to_string(), ch: ' ' };
/// assert_eq!(format!("{}", err), "Invalid character ' ' in ticker: AB C");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickerError {
    /// Ticker is empty after trimming whitespace.
    #[error("Ticker symbol is empty")]
    Empty,

    /// Ticker contains a character outside `[A-Z0-9.-^=]`.
    #[error("Invalid character '{ch}' in ticker: {ticker}")]
    InvalidCharacter {
        /// The offending ticker (after normalisation)
        ticker: String,
        /// The rejected character
        ch: char,
    },
}

/// Categorised valuation errors.
///
/// Every failure of the valuation pipeline is reported through this type;
/// the pipeline never returns NaN, infinity, or a partially computed value.
///
/// # Variants
/// - `IncompleteSnapshot`: One or more required fields missing
/// - `DegenerateCapitalStructure`: Enterprise value proxy is zero
/// - `NonConvergentGrowth`: WACC does not exceed the terminal growth rate
/// - `InvalidShareCount`: Shares outstanding is not positive
/// - `InvalidAssumptions`: Model parameters rejected
/// - `NonFiniteValue`: A stage produced NaN or infinity
///
/// # Examples
/// ```
/// use pricer_core::types::{FinancialField, Ticker, ValuationError};
///
/// let err = ValuationError::IncompleteSnapshot {
///     ticker: Ticker::parse("AAPL").unwrap(),
///     missing: vec![FinancialField::Beta, FinancialField::EarningsGrowth],
/// };
/// assert_eq!(format!("{}", err), "Missing data for AAPL: beta, earningsGrowth");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    /// Required snapshot fields are absent or null.
    #[error("Missing data for {ticker}: {}", join_fields(.missing))]
    IncompleteSnapshot {
        /// Ticker of the rejected snapshot
        ticker: Ticker,
        /// Missing fields in canonical order
        missing: Vec<FinancialField>,
    },

    /// marketCap + totalDebt - totalCash is zero, so capital weights are undefined.
    #[error(
        "Degenerate capital structure: market cap {market_cap} + debt {total_debt} - cash {total_cash} is zero"
    )]
    DegenerateCapitalStructure {
        /// Market capitalisation
        market_cap: f64,
        /// Total debt
        total_debt: f64,
        /// Total cash
        total_cash: f64,
    },

    /// WACC <= terminal growth rate; the perpetuity does not converge.
    #[error("Non-convergent growth: WACC {wacc} must exceed terminal growth rate {terminal_growth_rate}")]
    NonConvergentGrowth {
        /// Derived discount rate
        wacc: f64,
        /// Terminal growth rate assumption
        terminal_growth_rate: f64,
    },

    /// Shares outstanding must be strictly positive.
    #[error("Invalid share count: {shares_outstanding}")]
    InvalidShareCount {
        /// Reported shares outstanding
        shares_outstanding: f64,
    },

    /// Model assumptions rejected by validation.
    #[error("Invalid assumptions: {0}")]
    InvalidAssumptions(String),

    /// A pipeline stage produced NaN or infinity.
    #[error("Non-finite value produced during {stage}")]
    NonFiniteValue {
        /// Pipeline stage name
        stage: &'static str,
    },
}

fn join_fields(fields: &[FinancialField]) -> String {
    fields
        .iter()
        .map(|f| f.provider_key())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValuationError {
    /// Returns true if the failure is caused by the input data rather than
    /// the model assumptions.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            ValuationError::IncompleteSnapshot { .. }
                | ValuationError::DegenerateCapitalStructure { .. }
                | ValuationError::InvalidShareCount { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_snapshot_display_uses_provider_keys() {
        let err = ValuationError::IncompleteSnapshot {
            ticker: Ticker::parse("ibm").unwrap(),
            missing: vec![FinancialField::FreeCashFlow, FinancialField::TotalCash],
        };
        assert_eq!(err.to_string(), "Missing data for IBM: freeCashflow, totalCash");
    }

    #[test]
    fn test_degenerate_display() {
        let err = ValuationError::DegenerateCapitalStructure {
            market_cap: 100.0,
            total_debt: 0.0,
            total_cash: 100.0,
        };
        assert!(err.to_string().contains("is zero"));
    }

    #[test]
    fn test_non_convergent_display() {
        let err = ValuationError::NonConvergentGrowth {
            wacc: 0.02,
            terminal_growth_rate: 0.02,
        };
        assert!(err.to_string().contains("must exceed terminal growth rate"));
    }

    #[test]
    fn test_is_data_error() {
        assert!(ValuationError::InvalidShareCount {
            shares_outstanding: 0.0
        }
        .is_data_error());
        assert!(!ValuationError::InvalidAssumptions("x".to_string()).is_data_error());
        assert!(!ValuationError::NonConvergentGrowth {
            wacc: 0.01,
            terminal_growth_rate: 0.02
        }
        .is_data_error());
    }

    #[test]
    fn test_ticker_error_display() {
        assert_eq!(TickerError::Empty.to_string(), "Ticker symbol is empty");
    }
}
