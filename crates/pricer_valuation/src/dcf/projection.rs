//! Free cash flow projection.

use pricer_core::math::compounding::compound;

/// Projects `years` free cash flows from the last reported FCF.
///
/// `FCF_i = last_fcf * (1 + growth_rate)^i` for `i = 1..=years`.
///
/// # Examples
///
/// ```
/// use pricer_valuation::dcf::project_cash_flows;
///
/// let flows = project_cash_flows(100.0, 0.10, 3);
/// assert_eq!(flows.len(), 3);
/// assert!((flows[2] - 133.1).abs() < 1e-9);
/// ```
pub fn project_cash_flows(last_fcf: f64, growth_rate: f64, years: u32) -> Vec<f64> {
    (1..=years)
        .map(|year| compound(last_fcf, growth_rate, year as i32))
        .collect()
}
