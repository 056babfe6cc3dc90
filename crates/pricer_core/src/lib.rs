//! # pricer_core: Foundation for DCF Equity Valuation
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Ticker identifiers: `Ticker` (`types::ticker`)
//! - Financial snapshots: `FinancialSnapshot`, `CompleteSnapshot`, `FinancialField` (`types::snapshot`)
//! - Error types: `ValuationError`, `TickerError` (`types::error`)
//! - Annual compounding and discounting helpers (`math::compounding`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{FinancialField, FinancialSnapshot, Ticker};
//! use pricer_core::math::compounding::discount_factor;
//!
//! let ticker = Ticker::parse(" msft ").unwrap();
//! assert_eq!(ticker.as_str(), "MSFT");
//!
//! // An empty snapshot is missing every required field
//! let snapshot = FinancialSnapshot::new(ticker);
//! assert_eq!(snapshot.missing_fields().len(), FinancialField::REQUIRED.len());
//!
//! // Annual discounting: 1 / (1 + r)^n
//! let df = discount_factor(0.10_f64, 1);
//! # assert!((df - 1.0 / 1.1).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Ticker` and `FinancialSnapshot`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
