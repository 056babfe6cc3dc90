//! Present-value discounting of projected cash flows.
//!
//! Cash flow `i` (1-indexed) is discounted by `(1 + WACC)^i`; the terminal
//! value is discounted at the final projected year.

use pricer_core::math::compounding::present_value;

/// Discounted cash flows and their sum.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresentValues {
    /// Present value of each projected cash flow, in year order.
    pub values: Vec<f64>,
    /// Sum of `values`.
    pub sum: f64,
}

/// Discounts each projected cash flow to today.
///
/// # Examples
///
/// ```
/// use pricer_valuation::dcf::discount_to_present_value;
///
/// let pv = discount_to_present_value(&[110.0, 121.0], 0.10);
/// assert!((pv.values[0] - 100.0).abs() < 1e-9);
/// assert!((pv.values[1] - 100.0).abs() < 1e-9);
/// assert!((pv.sum - 200.0).abs() < 1e-9);
/// ```
pub fn discount_to_present_value(cash_flows: &[f64], wacc: f64) -> PresentValues {
    let values: Vec<f64> = cash_flows
        .iter()
        .zip(1..)
        .map(|(cf, year)| present_value(*cf, wacc, year))
        .collect();
    let sum = values.iter().sum();
    PresentValues { values, sum }
}

/// Discounts the terminal value from the end of year `years`.
#[inline]
pub fn discount_terminal_value(terminal_value: f64, wacc: f64, years: u32) -> f64 {
    present_value(terminal_value, wacc, years as i32)
}
