//! Financial snapshots for a single ticker.
//!
//! A [`FinancialSnapshot`] is the raw provider view: every field is optional.
//! [`FinancialSnapshot::validate`] is the only way to obtain a
//! [`CompleteSnapshot`], which the valuation kernel consumes without
//! further presence checks.

use std::fmt;

use super::error::ValuationError;
use super::ticker::Ticker;

/// Required financial fields, in canonical order.
///
/// The canonical order is the order of [`FinancialField::REQUIRED`] and is
/// the order in which missing fields are reported.
///
/// # Examples
///
/// ```
/// use pricer_core::types::FinancialField;
///
/// assert_eq!(FinancialField::FreeCashFlow.name(), "freeCashFlow");
/// assert_eq!(FinancialField::FreeCashFlow.provider_key(), "freeCashflow");
/// assert_eq!(
///     FinancialField::from_provider_key("marketCap"),
///     Some(FinancialField::MarketCap)
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum FinancialField {
    /// Trailing free cash flow (currency units)
    FreeCashFlow,
    /// Trailing operating cash flow (currency units)
    OperatingCashFlow,
    /// Trailing total revenue (currency units)
    TotalRevenue,
    /// Trailing EBITDA (currency units)
    Ebitda,
    /// Total debt (currency units)
    TotalDebt,
    /// Total cash and equivalents (currency units)
    TotalCash,
    /// Shares outstanding (count)
    SharesOutstanding,
    /// Current market price per share
    CurrentPrice,
    /// Market capitalisation (currency units)
    MarketCap,
    /// Equity beta (dimensionless)
    Beta,
    /// Year-over-year revenue growth (fraction)
    RevenueGrowth,
    /// Year-over-year earnings growth (fraction)
    EarningsGrowth,
}

impl FinancialField {
    /// All required fields in canonical order.
    pub const REQUIRED: [FinancialField; 12] = [
        FinancialField::FreeCashFlow,
        FinancialField::OperatingCashFlow,
        FinancialField::TotalRevenue,
        FinancialField::Ebitda,
        FinancialField::TotalDebt,
        FinancialField::TotalCash,
        FinancialField::SharesOutstanding,
        FinancialField::CurrentPrice,
        FinancialField::MarketCap,
        FinancialField::Beta,
        FinancialField::RevenueGrowth,
        FinancialField::EarningsGrowth,
    ];

    /// Canonical field name.
    pub fn name(&self) -> &'static str {
        match self {
            FinancialField::FreeCashFlow => "freeCashFlow",
            FinancialField::OperatingCashFlow => "operatingCashFlow",
            FinancialField::TotalRevenue => "totalRevenue",
            FinancialField::Ebitda => "ebitda",
            FinancialField::TotalDebt => "totalDebt",
            FinancialField::TotalCash => "totalCash",
            FinancialField::SharesOutstanding => "sharesOutstanding",
            FinancialField::CurrentPrice => "currentPrice",
            FinancialField::MarketCap => "marketCap",
            FinancialField::Beta => "beta",
            FinancialField::RevenueGrowth => "revenueGrowth",
            FinancialField::EarningsGrowth => "earningsGrowth",
        }
    }

    /// Key used by quote-summary style market data payloads.
    ///
    /// Differs from [`name`](Self::name) only for the two cash flow fields.
    pub fn provider_key(&self) -> &'static str {
        match self {
            FinancialField::FreeCashFlow => "freeCashflow",
            FinancialField::OperatingCashFlow => "operatingCashflow",
            other => other.name(),
        }
    }

    /// Looks up a field by provider key or canonical name.
    pub fn from_provider_key(key: &str) -> Option<Self> {
        Self::REQUIRED
            .iter()
            .copied()
            .find(|f| f.provider_key() == key || f.name() == key)
    }
}

impl fmt::Display for FinancialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.provider_key())
    }
}

/// Raw financial snapshot for one ticker; any field may be absent.
///
/// Non-finite values (NaN, infinity) are treated as absent.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{FinancialField, FinancialSnapshot, Ticker};
///
/// let snapshot = FinancialSnapshot::new(Ticker::parse("XYZ").unwrap())
///     .with_field(FinancialField::FreeCashFlow, 1_000.0)
///     .with_field(FinancialField::Beta, 1.1);
///
/// assert_eq!(snapshot.get(FinancialField::Beta), Some(1.1));
/// assert!(!snapshot.is_complete());
/// assert_eq!(snapshot.missing_fields().len(), 10);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FinancialSnapshot {
    /// Ticker the snapshot describes
    pub ticker: Ticker,
    /// Trailing free cash flow
    #[cfg_attr(feature = "serde", serde(default, alias = "freeCashflow"))]
    pub free_cash_flow: Option<f64>,
    /// Trailing operating cash flow
    #[cfg_attr(feature = "serde", serde(default, alias = "operatingCashflow"))]
    pub operating_cash_flow: Option<f64>,
    /// Trailing total revenue
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_revenue: Option<f64>,
    /// Trailing EBITDA
    #[cfg_attr(feature = "serde", serde(default))]
    pub ebitda: Option<f64>,
    /// Total debt
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_debt: Option<f64>,
    /// Total cash
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_cash: Option<f64>,
    /// Shares outstanding
    #[cfg_attr(feature = "serde", serde(default))]
    pub shares_outstanding: Option<f64>,
    /// Current market price per share
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_price: Option<f64>,
    /// Market capitalisation
    #[cfg_attr(feature = "serde", serde(default))]
    pub market_cap: Option<f64>,
    /// Equity beta
    #[cfg_attr(feature = "serde", serde(default))]
    pub beta: Option<f64>,
    /// Revenue growth rate
    #[cfg_attr(feature = "serde", serde(default))]
    pub revenue_growth: Option<f64>,
    /// Earnings growth rate
    #[cfg_attr(feature = "serde", serde(default))]
    pub earnings_growth: Option<f64>,
}

impl FinancialSnapshot {
    /// Creates an empty snapshot for `ticker`.
    pub fn new(ticker: Ticker) -> Self {
        Self {
            ticker,
            free_cash_flow: None,
            operating_cash_flow: None,
            total_revenue: None,
            ebitda: None,
            total_debt: None,
            total_cash: None,
            shares_outstanding: None,
            current_price: None,
            market_cap: None,
            beta: None,
            revenue_growth: None,
            earnings_growth: None,
        }
    }

    /// Sets a field value (builder style).
    pub fn with_field(mut self, field: FinancialField, value: f64) -> Self {
        self.set(field, Some(value));
        self
    }

    /// Sets or clears a field value.
    pub fn set(&mut self, field: FinancialField, value: Option<f64>) {
        *self.slot_mut(field) = value;
    }

    /// Returns the field value if present and finite.
    pub fn get(&self, field: FinancialField) -> Option<f64> {
        let value = match field {
            FinancialField::FreeCashFlow => self.free_cash_flow,
            FinancialField::OperatingCashFlow => self.operating_cash_flow,
            FinancialField::TotalRevenue => self.total_revenue,
            FinancialField::Ebitda => self.ebitda,
            FinancialField::TotalDebt => self.total_debt,
            FinancialField::TotalCash => self.total_cash,
            FinancialField::SharesOutstanding => self.shares_outstanding,
            FinancialField::CurrentPrice => self.current_price,
            FinancialField::MarketCap => self.market_cap,
            FinancialField::Beta => self.beta,
            FinancialField::RevenueGrowth => self.revenue_growth,
            FinancialField::EarningsGrowth => self.earnings_growth,
        };
        value.filter(|v| v.is_finite())
    }

    fn slot_mut(&mut self, field: FinancialField) -> &mut Option<f64> {
        match field {
            FinancialField::FreeCashFlow => &mut self.free_cash_flow,
            FinancialField::OperatingCashFlow => &mut self.operating_cash_flow,
            FinancialField::TotalRevenue => &mut self.total_revenue,
            FinancialField::Ebitda => &mut self.ebitda,
            FinancialField::TotalDebt => &mut self.total_debt,
            FinancialField::TotalCash => &mut self.total_cash,
            FinancialField::SharesOutstanding => &mut self.shares_outstanding,
            FinancialField::CurrentPrice => &mut self.current_price,
            FinancialField::MarketCap => &mut self.market_cap,
            FinancialField::Beta => &mut self.beta,
            FinancialField::RevenueGrowth => &mut self.revenue_growth,
            FinancialField::EarningsGrowth => &mut self.earnings_growth,
        }
    }

    /// Returns the missing fields in canonical order.
    pub fn missing_fields(&self) -> Vec<FinancialField> {
        FinancialField::REQUIRED
            .iter()
            .copied()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }

    /// Returns true if every required field is present.
    pub fn is_complete(&self) -> bool {
        FinancialField::REQUIRED
            .iter()
            .all(|f| self.get(*f).is_some())
    }

    /// Validates the snapshot into a [`CompleteSnapshot`].
    ///
    /// # Errors
    ///
    /// Returns `ValuationError::IncompleteSnapshot` listing every missing
    /// field in canonical order.
    pub fn validate(&self) -> Result<CompleteSnapshot, ValuationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValuationError::IncompleteSnapshot {
                ticker: self.ticker.clone(),
                missing,
            });
        }

        // Every field is present past this point.
        let value = |f: FinancialField| self.get(f).unwrap_or_default();

        Ok(CompleteSnapshot {
            ticker: self.ticker.clone(),
            free_cash_flow: value(FinancialField::FreeCashFlow),
            operating_cash_flow: value(FinancialField::OperatingCashFlow),
            total_revenue: value(FinancialField::TotalRevenue),
            ebitda: value(FinancialField::Ebitda),
            total_debt: value(FinancialField::TotalDebt),
            total_cash: value(FinancialField::TotalCash),
            shares_outstanding: value(FinancialField::SharesOutstanding),
            current_price: value(FinancialField::CurrentPrice),
            market_cap: value(FinancialField::MarketCap),
            beta: value(FinancialField::Beta),
            revenue_growth: value(FinancialField::RevenueGrowth),
            earnings_growth: value(FinancialField::EarningsGrowth),
        })
    }
}

/// Validated snapshot with every required field present and finite.
///
/// Only constructible through [`FinancialSnapshot::validate`].
#[derive(Clone, Debug, PartialEq)]
pub struct CompleteSnapshot {
    ticker: Ticker,
    free_cash_flow: f64,
    operating_cash_flow: f64,
    total_revenue: f64,
    ebitda: f64,
    total_debt: f64,
    total_cash: f64,
    shares_outstanding: f64,
    current_price: f64,
    market_cap: f64,
    beta: f64,
    revenue_growth: f64,
    earnings_growth: f64,
}

impl CompleteSnapshot {
    /// Ticker the snapshot describes.
    #[inline]
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Trailing free cash flow.
    #[inline]
    pub fn free_cash_flow(&self) -> f64 {
        self.free_cash_flow
    }

    /// Trailing operating cash flow.
    #[inline]
    pub fn operating_cash_flow(&self) -> f64 {
        self.operating_cash_flow
    }

    /// Trailing total revenue.
    #[inline]
    pub fn total_revenue(&self) -> f64 {
        self.total_revenue
    }

    /// Trailing EBITDA.
    #[inline]
    pub fn ebitda(&self) -> f64 {
        self.ebitda
    }

    /// Total debt.
    #[inline]
    pub fn total_debt(&self) -> f64 {
        self.total_debt
    }

    /// Total cash.
    #[inline]
    pub fn total_cash(&self) -> f64 {
        self.total_cash
    }

    /// Shares outstanding.
    #[inline]
    pub fn shares_outstanding(&self) -> f64 {
        self.shares_outstanding
    }

    /// Current market price per share.
    #[inline]
    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    /// Market capitalisation.
    #[inline]
    pub fn market_cap(&self) -> f64 {
        self.market_cap
    }

    /// Equity beta.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Revenue growth rate.
    #[inline]
    pub fn revenue_growth(&self) -> f64 {
        self.revenue_growth
    }

    /// Earnings growth rate.
    #[inline]
    pub fn earnings_growth(&self) -> f64 {
        self.earnings_growth
    }

    /// Net debt: total debt minus total cash.
    #[inline]
    pub fn net_debt(&self) -> f64 {
        self.total_debt - self.total_cash
    }
}
