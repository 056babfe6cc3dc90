//! DCF valuation engine.
//!
//! [`ValuationEngine`] holds validated assumptions and nothing else; every
//! call to [`ValuationEngine::run`] is independent and reentrant.

use pricer_core::types::{CompleteSnapshot, FinancialSnapshot, ValuationError};
use tracing::debug;

use super::assumptions::ValuationAssumptions;
use super::discount::{discount_terminal_value, discount_to_present_value};
use super::ensure_finite;
use super::equity::{compute_intrinsic_value, equity_value};
use super::growth::select_growth_rate;
use super::projection::project_cash_flows;
use super::result::{ValuationReport, ValuationResult};
use super::terminal::compute_terminal_value;
use super::wacc::derive_discount_rate;

/// Stateless DCF valuation pipeline.
///
/// # Examples
///
/// ```
/// use pricer_valuation::dcf::{ValuationAssumptions, ValuationEngine};
///
/// let engine = ValuationEngine::new(ValuationAssumptions::default()).unwrap();
/// assert_eq!(engine.assumptions().projection_years, 5);
///
/// let invalid = ValuationAssumptions::default().with_projection_years(0);
/// assert!(ValuationEngine::new(invalid).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ValuationEngine {
    assumptions: ValuationAssumptions,
}

impl ValuationEngine {
    /// Creates an engine after validating the assumptions.
    ///
    /// # Errors
    ///
    /// Returns `ValuationError::InvalidAssumptions` if validation fails.
    pub fn new(assumptions: ValuationAssumptions) -> Result<Self, ValuationError> {
        assumptions.validate()?;
        Ok(Self { assumptions })
    }

    /// Returns the model assumptions.
    #[inline]
    pub fn assumptions(&self) -> &ValuationAssumptions {
        &self.assumptions
    }

    /// Checks that every required field is present.
    pub fn validate(
        &self,
        snapshot: &FinancialSnapshot,
    ) -> Result<CompleteSnapshot, ValuationError> {
        snapshot.validate()
    }

    /// Values a snapshot and returns the headline result.
    pub fn run(&self, snapshot: &FinancialSnapshot) -> Result<ValuationResult, ValuationError> {
        self.run_detailed(snapshot).map(ValuationResult::from)
    }

    /// Values a snapshot and returns every intermediate value.
    pub fn run_detailed(
        &self,
        snapshot: &FinancialSnapshot,
    ) -> Result<ValuationReport, ValuationError> {
        let complete = self.validate(snapshot)?;
        self.value(&complete)
    }

    /// Values an already validated snapshot.
    pub fn value(&self, snapshot: &CompleteSnapshot) -> Result<ValuationReport, ValuationError> {
        let a = &self.assumptions;
        let ticker = snapshot.ticker();

        let discount_rate = derive_discount_rate(snapshot, a)?;
        let wacc = discount_rate.wacc;
        debug!(
            %ticker,
            cost_of_equity = discount_rate.cost_of_equity,
            weight_of_equity = discount_rate.weight_of_equity,
            weight_of_debt = discount_rate.weight_of_debt,
            wacc,
            "derived discount rate"
        );

        let growth = select_growth_rate(snapshot, a);
        debug!(%ticker, rate = growth.rate, source = %growth.source, "selected growth rate");

        let projected_cash_flows =
            project_cash_flows(snapshot.free_cash_flow(), growth.rate, a.projection_years);
        // projection_years >= 1 is guaranteed by assumption validation.
        let last_fcf = projected_cash_flows.last().copied().unwrap_or_default();
        ensure_finite(last_fcf, "cash flow projection")?;

        let terminal_value = compute_terminal_value(last_fcf, a.terminal_growth_rate, wacc)?;
        let present_values = discount_to_present_value(&projected_cash_flows, wacc);
        let terminal_present_value =
            discount_terminal_value(terminal_value, wacc, a.projection_years);
        let enterprise_value =
            ensure_finite(present_values.sum + terminal_present_value, "enterprise value")?;
        debug!(
            %ticker,
            pv_cash_flows = present_values.sum,
            terminal_value,
            terminal_present_value,
            enterprise_value,
            "discounted cash flows"
        );

        let intrinsic_value_per_share = compute_intrinsic_value(
            enterprise_value,
            snapshot.total_debt(),
            snapshot.total_cash(),
            snapshot.shares_outstanding(),
        )?;
        let equity_value = equity_value(
            enterprise_value,
            snapshot.total_debt(),
            snapshot.total_cash(),
        );

        let result = ValuationResult::new(
            ticker.clone(),
            intrinsic_value_per_share,
            snapshot.current_price(),
        );
        debug!(
            %ticker,
            intrinsic_value_per_share,
            current_price = result.current_price,
            undervalued = result.undervalued,
            "valuation complete"
        );

        Ok(ValuationReport {
            discount_rate,
            growth,
            projected_cash_flows,
            present_values,
            terminal_value,
            terminal_present_value,
            enterprise_value,
            equity_value,
            result,
        })
    }
}

/// Values `snapshot` under `assumptions`.
///
/// Convenience wrapper around [`ValuationEngine::new`] and
/// [`ValuationEngine::run`].
pub fn run(
    snapshot: &FinancialSnapshot,
    assumptions: &ValuationAssumptions,
) -> Result<ValuationResult, ValuationError> {
    ValuationEngine::new(assumptions.clone())?.run(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::{FinancialField as F, Ticker};

    fn reference_snapshot() -> FinancialSnapshot {
        FinancialSnapshot::new(Ticker::parse("REF").unwrap())
            .with_field(F::FreeCashFlow, 1_000.0)
            .with_field(F::OperatingCashFlow, 1_300.0)
            .with_field(F::TotalRevenue, 9_000.0)
            .with_field(F::Ebitda, 2_100.0)
            .with_field(F::TotalDebt, 2_000.0)
            .with_field(F::TotalCash, 500.0)
            .with_field(F::SharesOutstanding, 100.0)
            .with_field(F::CurrentPrice, 150.0)
            .with_field(F::MarketCap, 10_000.0)
            .with_field(F::Beta, 1.2)
            .with_field(F::RevenueGrowth, 0.05)
            .with_field(F::EarningsGrowth, 0.10)
    }

    #[test]
    fn test_detailed_report_components() {
        let report = ValuationEngine::default()
            .run_detailed(&reference_snapshot())
            .unwrap();

        assert_eq!(report.projected_cash_flows.len(), 5);
        assert_eq!(report.present_values.values.len(), 5);
        assert_relative_eq!(report.present_values.sum, 4_442.103_376_230_618, max_relative = 1e-9);
        assert_relative_eq!(report.terminal_value, 17_877.696_116_700_507, max_relative = 1e-9);
        assert_relative_eq!(
            report.terminal_present_value,
            11_470.267_908_031_585,
            max_relative = 1e-9
        );
        assert_relative_eq!(report.enterprise_value, 15_912.371_284_262_203, max_relative = 1e-9);
        assert_relative_eq!(report.equity_value, 14_412.371_284_262_203, max_relative = 1e-9);
        assert_relative_eq!(
            report.result.intrinsic_value_per_share,
            144.123_712_842_622,
            max_relative = 1e-9
        );
        assert!(!report.result.undervalued);
    }

    #[test]
    fn test_terminal_weight() {
        let report = ValuationEngine::default()
            .run_detailed(&reference_snapshot())
            .unwrap();
        let weight = report.terminal_weight().unwrap();
        assert!(weight > 0.7 && weight < 0.73);
    }

    #[test]
    fn test_incomplete_snapshot_short_circuits() {
        let mut snapshot = reference_snapshot();
        snapshot.set(F::Beta, None);
        // Degenerate structure too; the missing field must win.
        snapshot.set(F::TotalCash, Some(12_000.0));

        let err = ValuationEngine::default().run(&snapshot).unwrap_err();
        assert!(matches!(err, ValuationError::IncompleteSnapshot { .. }));
    }

    #[test]
    fn test_offsetting_cash_is_degenerate_not_divergent() {
        let snapshot = reference_snapshot()
            .with_field(F::MarketCap, 12.34)
            .with_field(F::TotalDebt, 56.78)
            .with_field(F::TotalCash, 12.34 + 56.78);
        let err = ValuationEngine::default().run(&snapshot).unwrap_err();
        assert!(matches!(err, ValuationError::DegenerateCapitalStructure { .. }));
    }

    #[test]
    fn test_invalid_share_count() {
        let snapshot = reference_snapshot().with_field(F::SharesOutstanding, 0.0);
        let err = ValuationEngine::default().run(&snapshot).unwrap_err();
        assert_eq!(
            err,
            ValuationError::InvalidShareCount {
                shares_outstanding: 0.0
            }
        );
    }

    #[test]
    fn test_free_function_rejects_bad_assumptions() {
        let bad = ValuationAssumptions::default().with_tax_rate(2.0);
        assert!(matches!(
            run(&reference_snapshot(), &bad),
            Err(ValuationError::InvalidAssumptions(_))
        ));
    }

    #[test]
    fn test_longer_horizon_changes_value() {
        let engine =
            ValuationEngine::new(ValuationAssumptions::default().with_projection_years(10))
                .unwrap();
        let report = engine.run_detailed(&reference_snapshot()).unwrap();
        assert_eq!(report.projected_cash_flows.len(), 10);
        assert!(report.result.intrinsic_value_per_share > 144.123_712_842_622);
    }
}
