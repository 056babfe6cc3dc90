//! # Pricer Valuation (L2: Kernel)
//!
//! Discounted cash flow (DCF) valuation of a single equity from one
//! financial snapshot.
//!
//! This crate provides:
//! - Model assumptions with validation (`dcf::assumptions`)
//! - WACC derivation via CAPM and market-value weights (`dcf::wacc`)
//! - Conservative growth-rate selection (`dcf::growth`)
//! - Free cash flow projection, terminal value and discounting
//! - Per-share intrinsic value and the under/overvaluation flag
//! - Rayon-based batch valuation of many tickers (`dcf::batch`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         pricer_valuation (L2)           │
//! ├─────────────────────────────────────────┤
//! │  dcf/engine   - validate -> WACC ->     │
//! │                 project -> terminal ->  │
//! │                 discount -> per share   │
//! │  dcf/batch    - Rayon fan-out           │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            pricer_core (L1)             │
//! │  Ticker, FinancialSnapshot, errors      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The engine is a pure function of its inputs: no I/O, no shared state.
//! Concurrent calls with distinct snapshots need no locking.
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::{FinancialField as F, FinancialSnapshot, Ticker};
//! use pricer_valuation::dcf::{ValuationAssumptions, ValuationEngine};
//!
//! let snapshot = FinancialSnapshot::new(Ticker::parse("ACME").unwrap())
//!     .with_field(F::FreeCashFlow, 1_000.0)
//!     .with_field(F::OperatingCashFlow, 1_400.0)
//!     .with_field(F::TotalRevenue, 8_000.0)
//!     .with_field(F::Ebitda, 2_000.0)
//!     .with_field(F::TotalDebt, 2_000.0)
//!     .with_field(F::TotalCash, 500.0)
//!     .with_field(F::SharesOutstanding, 100.0)
//!     .with_field(F::CurrentPrice, 150.0)
//!     .with_field(F::MarketCap, 10_000.0)
//!     .with_field(F::Beta, 1.2)
//!     .with_field(F::RevenueGrowth, 0.05)
//!     .with_field(F::EarningsGrowth, 0.10);
//!
//! let engine = ValuationEngine::new(ValuationAssumptions::default()).unwrap();
//! let result = engine.run(&snapshot).unwrap();
//!
//! assert!((result.intrinsic_value_per_share - 144.1237).abs() < 1e-3);
//! assert!(!result.undervalued);
//! ```

#![deny(missing_docs)]

pub mod dcf;
