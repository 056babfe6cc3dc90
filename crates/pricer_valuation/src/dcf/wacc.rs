//! Discount rate derivation (WACC).
//!
//! # Formula
//!
//! ```text
//! Ke   = Rf + beta * MRP                      (CAPM)
//! V    = MarketCap + Debt - Cash              (capital-structure proxy)
//! WACC = (MarketCap / V) * Ke + ((Debt - Cash) / V) * Kd * (1 - t)
//! ```
//!
//! `V` only weights the capital structure; it is not the enterprise value
//! reported by the valuation.

use pricer_core::types::{CompleteSnapshot, ValuationError};

use super::assumptions::ValuationAssumptions;
use super::ensure_finite;

/// Components of the derived discount rate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscountRate {
    /// CAPM cost of equity.
    pub cost_of_equity: f64,
    /// After-tax cost of debt, `Kd * (1 - t)`.
    pub after_tax_cost_of_debt: f64,
    /// `MarketCap + Debt - Cash`.
    pub enterprise_value_proxy: f64,
    /// Equity weight in the capital structure.
    pub weight_of_equity: f64,
    /// Net-debt weight in the capital structure.
    pub weight_of_debt: f64,
    /// Weighted average cost of capital.
    pub wacc: f64,
}

/// CAPM cost of equity: `risk_free_rate + beta * market_risk_premium`.
///
/// # Examples
///
/// ```
/// use pricer_valuation::dcf::cost_of_equity;
///
/// let ke = cost_of_equity(0.03, 1.2, 0.06);
/// assert!((ke - 0.102).abs() < 1e-12);
/// ```
#[inline]
pub fn cost_of_equity(risk_free_rate: f64, beta: f64, market_risk_premium: f64) -> f64 {
    risk_free_rate + beta * market_risk_premium
}

/// Derives the WACC for a validated snapshot.
///
/// # Errors
///
/// - `ValuationError::DegenerateCapitalStructure` if the capital-structure
///   proxy is zero
/// - `ValuationError::NonFiniteValue` if the weights overflow
/// - `ValuationError::NonConvergentGrowth` if WACC <= terminal growth rate
pub fn derive_discount_rate(
    snapshot: &CompleteSnapshot,
    assumptions: &ValuationAssumptions,
) -> Result<DiscountRate, ValuationError> {
    let market_cap = snapshot.market_cap();
    // Summed left to right so an exactly offsetting cash balance yields 0.0.
    let enterprise_value_proxy = market_cap + snapshot.total_debt() - snapshot.total_cash();

    if enterprise_value_proxy == 0.0 {
        return Err(ValuationError::DegenerateCapitalStructure {
            market_cap,
            total_debt: snapshot.total_debt(),
            total_cash: snapshot.total_cash(),
        });
    }

    let cost_of_equity = cost_of_equity(
        assumptions.risk_free_rate,
        snapshot.beta(),
        assumptions.market_risk_premium,
    );
    let after_tax_cost_of_debt = assumptions.cost_of_debt * (1.0 - assumptions.tax_rate);
    let weight_of_equity = market_cap / enterprise_value_proxy;
    let weight_of_debt = snapshot.net_debt() / enterprise_value_proxy;

    let wacc = ensure_finite(
        weight_of_equity * cost_of_equity + weight_of_debt * after_tax_cost_of_debt,
        "discount rate",
    )?;

    if wacc <= assumptions.terminal_growth_rate {
        return Err(ValuationError::NonConvergentGrowth {
            wacc,
            terminal_growth_rate: assumptions.terminal_growth_rate,
        });
    }

    Ok(DiscountRate {
        cost_of_equity,
        after_tax_cost_of_debt,
        enterprise_value_proxy,
        weight_of_equity,
        weight_of_debt,
        wacc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::{FinancialField as F, FinancialSnapshot, Ticker};

    fn snapshot(market_cap: f64, debt: f64, cash: f64, beta: f64) -> CompleteSnapshot {
        FinancialSnapshot::new(Ticker::parse("WACC").unwrap())
            .with_field(F::FreeCashFlow, 1_000.0)
            .with_field(F::OperatingCashFlow, 1_200.0)
            .with_field(F::TotalRevenue, 5_000.0)
            .with_field(F::Ebitda, 1_500.0)
            .with_field(F::TotalDebt, debt)
            .with_field(F::TotalCash, cash)
            .with_field(F::SharesOutstanding, 100.0)
            .with_field(F::CurrentPrice, 100.0)
            .with_field(F::MarketCap, market_cap)
            .with_field(F::Beta, beta)
            .with_field(F::RevenueGrowth, 0.05)
            .with_field(F::EarningsGrowth, 0.05)
            .validate()
            .unwrap()
    }

    #[test]
    fn test_wacc_matches_hand_calculation() {
        let rate =
            derive_discount_rate(&snapshot(10_000.0, 2_000.0, 500.0, 1.2), &Default::default())
                .unwrap();

        assert_relative_eq!(rate.cost_of_equity, 0.102, epsilon = 1e-12);
        assert_relative_eq!(rate.enterprise_value_proxy, 11_500.0, epsilon = 1e-9);
        assert_relative_eq!(rate.weight_of_equity, 10_000.0 / 11_500.0, epsilon = 1e-12);
        assert_relative_eq!(rate.weight_of_debt, 1_500.0 / 11_500.0, epsilon = 1e-12);
        assert_relative_eq!(rate.after_tax_cost_of_debt, 0.04 * 0.79, epsilon = 1e-12);
        assert_relative_eq!(rate.wacc, 0.092_817_391_304_347_8, max_relative = 1e-12);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let rate =
            derive_discount_rate(&snapshot(7_300.0, 900.0, 2_400.0, 0.8), &Default::default())
                .unwrap();
        assert_relative_eq!(rate.weight_of_equity + rate.weight_of_debt, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_proxy_is_degenerate() {
        let err = derive_discount_rate(&snapshot(100.0, 0.0, 100.0, 1.0), &Default::default())
            .unwrap_err();
        assert_eq!(
            err,
            ValuationError::DegenerateCapitalStructure {
                market_cap: 100.0,
                total_debt: 0.0,
                total_cash: 100.0,
            }
        );
    }

    #[test]
    fn test_fractional_offsetting_cash_is_degenerate() {
        for (market_cap, debt) in [(12.34, 56.78), (0.1, 0.2)] {
            let cash = market_cap + debt;
            let err =
                derive_discount_rate(&snapshot(market_cap, debt, cash, 1.0), &Default::default())
                    .unwrap_err();
            assert_eq!(
                err,
                ValuationError::DegenerateCapitalStructure {
                    market_cap,
                    total_debt: debt,
                    total_cash: cash,
                }
            );
        }
    }

    #[test]
    fn test_wacc_equal_to_terminal_growth_is_rejected() {
        // Unlevered, beta 0: WACC == risk-free rate.
        let assumptions = ValuationAssumptions::default()
            .with_risk_free_rate(0.02)
            .with_terminal_growth_rate(0.02);
        let err = derive_discount_rate(&snapshot(1_000.0, 0.0, 0.0, 0.0), &assumptions)
            .unwrap_err();
        assert_eq!(
            err,
            ValuationError::NonConvergentGrowth {
                wacc: 0.02,
                terminal_growth_rate: 0.02,
            }
        );
    }

    #[test]
    fn test_wacc_below_terminal_growth_is_rejected() {
        let assumptions = ValuationAssumptions::default().with_terminal_growth_rate(0.2);
        let err = derive_discount_rate(&snapshot(10_000.0, 2_000.0, 500.0, 1.2), &assumptions)
            .unwrap_err();
        assert!(matches!(err, ValuationError::NonConvergentGrowth { .. }));
    }

    #[test]
    fn test_net_cash_company_has_negative_debt_weight() {
        let rate =
            derive_discount_rate(&snapshot(10_000.0, 100.0, 1_100.0, 1.0), &Default::default())
                .unwrap();
        assert!(rate.weight_of_debt < 0.0);
        assert!(rate.weight_of_equity > 1.0);
    }
}
