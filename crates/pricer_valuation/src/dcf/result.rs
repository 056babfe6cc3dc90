//! Valuation outputs.

use pricer_core::types::Ticker;

use super::discount::PresentValues;
use super::growth::GrowthSelection;
use super::wacc::DiscountRate;

/// Outcome of one valuation.
///
/// # Examples
///
/// ```
/// use pricer_core::types::Ticker;
/// use pricer_valuation::dcf::ValuationResult;
///
/// let result = ValuationResult::new(Ticker::parse("ACME").unwrap(), 120.0, 100.0);
/// assert!(result.undervalued);
/// assert!((result.upside().unwrap() - 0.2).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuationResult {
    /// Ticker valued.
    pub ticker: Ticker,
    /// DCF equity value per share.
    pub intrinsic_value_per_share: f64,
    /// Market price per share at snapshot time.
    pub current_price: f64,
    /// `intrinsic_value_per_share > current_price`.
    pub undervalued: bool,
}

impl ValuationResult {
    /// Creates a result, deriving the undervalued flag.
    pub fn new(ticker: Ticker, intrinsic_value_per_share: f64, current_price: f64) -> Self {
        Self {
            ticker,
            intrinsic_value_per_share,
            current_price,
            undervalued: intrinsic_value_per_share > current_price,
        }
    }

    /// Relative gap between intrinsic value and price, `intrinsic / price - 1`.
    ///
    /// Returns `None` when the price is not positive.
    pub fn upside(&self) -> Option<f64> {
        if self.current_price > 0.0 {
            Some(self.intrinsic_value_per_share / self.current_price - 1.0)
        } else {
            None
        }
    }
}

/// Full breakdown of a valuation, including every intermediate value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuationReport {
    /// WACC and its components.
    pub discount_rate: DiscountRate,
    /// Selected FCF growth rate.
    pub growth: GrowthSelection,
    /// Projected free cash flows, year 1 first.
    pub projected_cash_flows: Vec<f64>,
    /// Discounted projected cash flows.
    pub present_values: PresentValues,
    /// Terminal value at the end of the horizon.
    pub terminal_value: f64,
    /// Terminal value discounted to today.
    pub terminal_present_value: f64,
    /// Sum of discounted cash flows and discounted terminal value.
    pub enterprise_value: f64,
    /// Enterprise value less debt plus cash.
    pub equity_value: f64,
    /// Headline result.
    pub result: ValuationResult,
}

impl ValuationReport {
    /// Share of enterprise value contributed by the terminal value.
    ///
    /// Returns `None` when the enterprise value is zero.
    pub fn terminal_weight(&self) -> Option<f64> {
        if self.enterprise_value == 0.0 {
            None
        } else {
            Some(self.terminal_present_value / self.enterprise_value)
        }
    }
}

impl From<ValuationReport> for ValuationResult {
    fn from(report: ValuationReport) -> Self {
        report.result
    }
}
