//! Equity bridge and per-share intrinsic value.

use pricer_core::types::ValuationError;

use super::ensure_finite;

/// Equity value: `enterprise_value - total_debt + total_cash`.
#[inline]
pub fn equity_value(enterprise_value: f64, total_debt: f64, total_cash: f64) -> f64 {
    enterprise_value - total_debt + total_cash
}

/// Intrinsic value per share.
///
/// # Errors
///
/// - `ValuationError::InvalidShareCount` if `shares_outstanding <= 0`
/// - `ValuationError::NonFiniteValue` if the result overflows
///
/// # Examples
///
/// ```
/// use pricer_valuation::dcf::compute_intrinsic_value;
///
/// let per_share = compute_intrinsic_value(10_000.0, 2_000.0, 500.0, 100.0).unwrap();
/// assert!((per_share - 85.0).abs() < 1e-12);
///
/// assert!(compute_intrinsic_value(10_000.0, 2_000.0, 500.0, 0.0).is_err());
/// ```
pub fn compute_intrinsic_value(
    enterprise_value: f64,
    total_debt: f64,
    total_cash: f64,
    shares_outstanding: f64,
) -> Result<f64, ValuationError> {
    if shares_outstanding <= 0.0 {
        return Err(ValuationError::InvalidShareCount { shares_outstanding });
    }
    ensure_finite(
        equity_value(enterprise_value, total_debt, total_cash) / shares_outstanding,
        "per-share value",
    )
}
