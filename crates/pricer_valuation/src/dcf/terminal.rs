//! Terminal value (Gordon growth model).
//!
//! # Formula
//!
//! ```text
//! TV = FCF_n * (1 + g) / (WACC - g)
//! ```

use pricer_core::types::ValuationError;

use super::ensure_finite;

/// Computes the terminal value at the end of the projection horizon.
///
/// # Errors
///
/// - `ValuationError::NonConvergentGrowth` if `wacc <= terminal_growth_rate`
/// - `ValuationError::NonFiniteValue` if the result overflows
///
/// # Examples
///
/// ```
/// use pricer_valuation::dcf::compute_terminal_value;
///
/// let tv = compute_terminal_value(100.0, 0.02, 0.10).unwrap();
/// assert!((tv - 1_275.0).abs() < 1e-9);
///
/// assert!(compute_terminal_value(100.0, 0.02, 0.02).is_err());
/// ```
pub fn compute_terminal_value(
    last_projected_fcf: f64,
    terminal_growth_rate: f64,
    wacc: f64,
) -> Result<f64, ValuationError> {
    if wacc <= terminal_growth_rate {
        return Err(ValuationError::NonConvergentGrowth {
            wacc,
            terminal_growth_rate,
        });
    }
    ensure_finite(
        last_projected_fcf * (1.0 + terminal_growth_rate) / (wacc - terminal_growth_rate),
        "terminal value",
    )
}
