//! Discounted cash flow pipeline.
//!
//! Stages, in the order [`ValuationEngine`] runs them:
//!
//! | Stage | Module | Failure |
//! |-------|--------|---------|
//! | Snapshot validation | `pricer_core::types::snapshot` | `IncompleteSnapshot` |
//! | Discount rate (WACC) | [`wacc`] | `DegenerateCapitalStructure`, `NonConvergentGrowth` |
//! | Growth selection | [`growth`] | never fails |
//! | FCF projection | [`projection`] | `NonFiniteValue` |
//! | Terminal value | [`terminal`] | `NonConvergentGrowth` |
//! | Present value | [`discount`] | never fails |
//! | Per-share value | [`equity`] | `InvalidShareCount` |

pub mod assumptions;
pub mod batch;
pub mod discount;
pub mod engine;
pub mod equity;
pub mod growth;
pub mod projection;
pub mod result;
pub mod terminal;
pub mod wacc;

pub use assumptions::ValuationAssumptions;
pub use batch::{
    summarise, summarise_reports, value_batch, value_batch_detailed,
    value_batch_detailed_with_config, value_batch_with_config, BatchConfig, BatchSummary,
};
pub use discount::{discount_terminal_value, discount_to_present_value, PresentValues};
pub use engine::{run, ValuationEngine};
pub use equity::{compute_intrinsic_value, equity_value};
pub use growth::{select_growth, select_growth_rate, GrowthSelection, GrowthSource};
pub use projection::project_cash_flows;
pub use result::{ValuationReport, ValuationResult};
pub use terminal::compute_terminal_value;
pub use wacc::{cost_of_equity, derive_discount_rate, DiscountRate};

use pricer_core::types::ValuationError;

/// Rejects NaN and infinity produced by a pipeline stage.
#[inline]
pub(crate) fn ensure_finite(value: f64, stage: &'static str) -> Result<f64, ValuationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValuationError::NonFiniteValue { stage })
    }
}
