//! Annual compounding and discounting.
//!
//! All helpers use discrete, end-of-year compounding:
//!
//! ```text
//! G(r, n) = (1 + r)^n
//! D(r, n) = 1 / (1 + r)^n
//! ```
//!
//! Functions are generic over [`num_traits::Float`] so they can be used
//! with `f32`, `f64`, or any compatible numeric type.

use num_traits::Float;

/// Growth factor `(1 + rate)^periods`.
///
/// # Examples
///
/// ```
/// use pricer_core::math::compounding::growth_factor;
///
/// let g = growth_factor(0.05_f64, 2);
/// assert!((g - 1.1025).abs() < 1e-12);
/// ```
#[inline]
pub fn growth_factor<T: Float>(rate: T, periods: i32) -> T {
    (T::one() + rate).powi(periods)
}

/// Discount factor `1 / (1 + rate)^periods`.
///
/// Returns infinity when `rate == -1`; callers are expected to reject
/// such rates before discounting.
///
/// # Examples
///
/// ```
/// use pricer_core::math::compounding::discount_factor;
///
/// let df = discount_factor(0.10_f64, 2);
/// assert!((df - 1.0 / 1.21).abs() < 1e-12);
/// ```
#[inline]
pub fn discount_factor<T: Float>(rate: T, periods: i32) -> T {
    growth_factor(rate, periods).recip()
}

/// Compounds `amount` forward by `periods` years at `rate`.
#[inline]
pub fn compound<T: Float>(amount: T, rate: T, periods: i32) -> T {
    amount * growth_factor(rate, periods)
}

/// Present value of `amount` received `periods` years from now.
#[inline]
pub fn present_value<T: Float>(amount: T, rate: T, periods: i32) -> T {
    amount / growth_factor(rate, periods)
}
