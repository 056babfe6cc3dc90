//! Model assumptions for DCF valuation.

use pricer_core::types::ValuationError;

/// Longest supported explicit projection horizon, in years.
pub const MAX_PROJECTION_YEARS: u32 = 100;

/// Model parameters for DCF valuation.
///
/// These are not derived from the snapshot; they are supplied by the caller
/// or defaulted.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `risk_free_rate` | 0.03 | 10-year government yield |
/// | `market_risk_premium` | 0.06 | Equity premium over the risk-free rate |
/// | `cost_of_debt` | 0.04 | Pre-tax cost of debt |
/// | `tax_rate` | 0.21 | Corporate tax rate |
/// | `terminal_growth_rate` | 0.02 | Perpetual growth after the horizon |
/// | `projection_years` | 5 | Explicit projection horizon |
/// | `fallback_growth_rate` | 0.02 | FCF growth when no positive signal exists |
///
/// # Examples
///
/// ```
/// use pricer_valuation::dcf::ValuationAssumptions;
///
/// let assumptions = ValuationAssumptions::default()
///     .with_risk_free_rate(0.045)
///     .with_projection_years(10);
/// assert!(assumptions.validate().is_ok());
///
/// let bad = ValuationAssumptions::default().with_tax_rate(1.5);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValuationAssumptions {
    /// Risk-free rate used in CAPM.
    pub risk_free_rate: f64,
    /// Market risk premium used in CAPM.
    pub market_risk_premium: f64,
    /// Pre-tax cost of debt.
    pub cost_of_debt: f64,
    /// Corporate tax rate in [0, 1].
    pub tax_rate: f64,
    /// Perpetual growth rate applied after the projection horizon.
    pub terminal_growth_rate: f64,
    /// Number of explicitly projected years.
    pub projection_years: u32,
    /// FCF growth rate used when neither revenue nor earnings growth is positive.
    pub fallback_growth_rate: f64,
}

impl Default for ValuationAssumptions {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.03,
            market_risk_premium: 0.06,
            cost_of_debt: 0.04,
            tax_rate: 0.21,
            terminal_growth_rate: 0.02,
            projection_years: 5,
            fallback_growth_rate: 0.02,
        }
    }
}

impl ValuationAssumptions {
    /// Creates assumptions with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the risk-free rate.
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Sets the market risk premium.
    pub fn with_market_risk_premium(mut self, premium: f64) -> Self {
        self.market_risk_premium = premium;
        self
    }

    /// Sets the pre-tax cost of debt.
    pub fn with_cost_of_debt(mut self, rate: f64) -> Self {
        self.cost_of_debt = rate;
        self
    }

    /// Sets the corporate tax rate.
    pub fn with_tax_rate(mut self, rate: f64) -> Self {
        self.tax_rate = rate;
        self
    }

    /// Sets the terminal growth rate.
    pub fn with_terminal_growth_rate(mut self, rate: f64) -> Self {
        self.terminal_growth_rate = rate;
        self
    }

    /// Sets the projection horizon in years.
    pub fn with_projection_years(mut self, years: u32) -> Self {
        self.projection_years = years;
        self
    }

    /// Sets the fallback FCF growth rate.
    pub fn with_fallback_growth_rate(mut self, rate: f64) -> Self {
        self.fallback_growth_rate = rate;
        self
    }

    /// Validates the assumptions.
    ///
    /// # Errors
    ///
    /// Returns `ValuationError::InvalidAssumptions` naming the first
    /// offending parameter.
    pub fn validate(&self) -> Result<(), ValuationError> {
        let rates = [
            ("risk_free_rate", self.risk_free_rate),
            ("market_risk_premium", self.market_risk_premium),
            ("cost_of_debt", self.cost_of_debt),
            ("tax_rate", self.tax_rate),
            ("terminal_growth_rate", self.terminal_growth_rate),
            ("fallback_growth_rate", self.fallback_growth_rate),
        ];
        if let Some((name, value)) = rates.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ValuationError::InvalidAssumptions(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }
        if !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(ValuationError::InvalidAssumptions(format!(
                "tax_rate must be in [0, 1], got {}",
                self.tax_rate
            )));
        }
        let growth_rates = [
            ("terminal_growth_rate", self.terminal_growth_rate),
            ("fallback_growth_rate", self.fallback_growth_rate),
        ];
        if let Some((name, value)) = growth_rates.iter().find(|(_, v)| *v <= -1.0) {
            return Err(ValuationError::InvalidAssumptions(format!(
                "{} must exceed -1, got {}",
                name, value
            )));
        }
        if self.projection_years == 0 || self.projection_years > MAX_PROJECTION_YEARS {
            return Err(ValuationError::InvalidAssumptions(format!(
                "projection_years must be in [1, {}], got {}",
                MAX_PROJECTION_YEARS, self.projection_years
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assumptions() {
        let a = ValuationAssumptions::default();
        assert_eq!(a.risk_free_rate, 0.03);
        assert_eq!(a.market_risk_premium, 0.06);
        assert_eq!(a.cost_of_debt, 0.04);
        assert_eq!(a.tax_rate, 0.21);
        assert_eq!(a.terminal_growth_rate, 0.02);
        assert_eq!(a.projection_years, 5);
        assert_eq!(a.fallback_growth_rate, 0.02);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let a = ValuationAssumptions::new()
            .with_risk_free_rate(0.04)
            .with_market_risk_premium(0.055)
            .with_cost_of_debt(0.05)
            .with_tax_rate(0.25)
            .with_terminal_growth_rate(0.025)
            .with_projection_years(10)
            .with_fallback_growth_rate(0.01);

        assert_eq!(a.risk_free_rate, 0.04);
        assert_eq!(a.market_risk_premium, 0.055);
        assert_eq!(a.cost_of_debt, 0.05);
        assert_eq!(a.tax_rate, 0.25);
        assert_eq!(a.terminal_growth_rate, 0.025);
        assert_eq!(a.projection_years, 10);
        assert_eq!(a.fallback_growth_rate, 0.01);
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let a = ValuationAssumptions::default().with_cost_of_debt(f64::NAN);
        let err = a.validate().unwrap_err();
        assert!(err.to_string().contains("cost_of_debt"));
    }

    #[test]
    fn test_validate_tax_rate_bounds() {
        assert!(ValuationAssumptions::default()
            .with_tax_rate(-0.1)
            .validate()
            .is_err());
        assert!(ValuationAssumptions::default()
            .with_tax_rate(0.0)
            .validate()
            .is_ok());
        assert!(ValuationAssumptions::default()
            .with_tax_rate(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_projection_years() {
        assert!(ValuationAssumptions::default()
            .with_projection_years(0)
            .validate()
            .is_err());
        assert!(ValuationAssumptions::default()
            .with_projection_years(MAX_PROJECTION_YEARS + 1)
            .validate()
            .is_err());
        assert!(ValuationAssumptions::default()
            .with_projection_years(1)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_terminal_growth_floor() {
        let err = ValuationAssumptions::default()
            .with_terminal_growth_rate(-1.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ValuationError::InvalidAssumptions(_)));
    }

    #[test]
    fn test_validate_fallback_growth_floor() {
        for rate in [-1.0, -1.5] {
            let err = ValuationAssumptions::default()
                .with_fallback_growth_rate(rate)
                .validate()
                .unwrap_err();
            assert!(err.to_string().contains("fallback_growth_rate"));
        }
        assert!(ValuationAssumptions::default()
            .with_fallback_growth_rate(-0.5)
            .validate()
            .is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_deserialisation_uses_defaults() {
        let a: ValuationAssumptions =
            serde_json::from_str(r#"{ "risk_free_rate": 0.045, "projection_years": 7 }"#).unwrap();
        assert_eq!(a.risk_free_rate, 0.045);
        assert_eq!(a.projection_years, 7);
        assert_eq!(a.tax_rate, 0.21);
    }
}
