//! Free cash flow growth-rate selection.
//!
//! Policy, in order:
//! 1. revenue growth, if strictly positive
//! 2. earnings growth, if strictly positive
//! 3. the fallback rate from the assumptions
//!
//! Zero, negative and NaN signals are never projected forward.

use std::fmt;

use pricer_core::types::CompleteSnapshot;

use super::assumptions::ValuationAssumptions;

/// Where the selected growth rate came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GrowthSource {
    /// Reported revenue growth
    Revenue,
    /// Reported earnings growth
    Earnings,
    /// Assumption fallback
    Fallback,
}

impl fmt::Display for GrowthSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthSource::Revenue => write!(f, "revenue"),
            GrowthSource::Earnings => write!(f, "earnings"),
            GrowthSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// Selected growth rate and its source.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthSelection {
    /// Annual FCF growth rate.
    pub rate: f64,
    /// Signal the rate was taken from.
    pub source: GrowthSource,
}

/// Applies the growth policy to optional signals.
///
/// # Examples
///
/// ```
/// use pricer_valuation::dcf::{select_growth, GrowthSource};
///
/// let pick = select_growth(Some(-0.02), Some(0.08), 0.02);
/// assert_eq!(pick.rate, 0.08);
/// assert_eq!(pick.source, GrowthSource::Earnings);
///
/// let pick = select_growth(None, Some(-0.03), 0.02);
/// assert_eq!(pick.source, GrowthSource::Fallback);
/// ```
pub fn select_growth(
    revenue_growth: Option<f64>,
    earnings_growth: Option<f64>,
    fallback: f64,
) -> GrowthSelection {
    let positive = |g: Option<f64>| g.filter(|v| *v > 0.0);

    if let Some(rate) = positive(revenue_growth) {
        GrowthSelection {
            rate,
            source: GrowthSource::Revenue,
        }
    } else if let Some(rate) = positive(earnings_growth) {
        GrowthSelection {
            rate,
            source: GrowthSource::Earnings,
        }
    } else {
        GrowthSelection {
            rate: fallback,
            source: GrowthSource::Fallback,
        }
    }
}

/// Selects the FCF growth rate for a validated snapshot.
pub fn select_growth_rate(
    snapshot: &CompleteSnapshot,
    assumptions: &ValuationAssumptions,
) -> GrowthSelection {
    select_growth(
        Some(snapshot.revenue_growth()),
        Some(snapshot.earnings_growth()),
        assumptions.fallback_growth_rate,
    )
}
