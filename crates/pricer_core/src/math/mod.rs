//! Numerical helpers shared by the valuation kernel.
//!
//! - [`compounding`]: Annual growth and discount factors

pub mod compounding;
