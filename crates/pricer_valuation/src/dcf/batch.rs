//! Rayon-based batch valuation.
//!
//! Each snapshot is valued independently; a failure for one ticker does
//! not affect the others. Results are returned in input order.

use pricer_core::types::{FinancialSnapshot, ValuationError};
use rayon::prelude::*;

use super::engine::ValuationEngine;
use super::result::{ValuationReport, ValuationResult};

/// Configuration for batch valuation.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Minimum number of snapshots before using parallelism.
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 16,
        }
    }
}

impl BatchConfig {
    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}

/// Values every snapshot with the default [`BatchConfig`].
pub fn value_batch(
    engine: &ValuationEngine,
    snapshots: &[FinancialSnapshot],
) -> Vec<Result<ValuationResult, ValuationError>> {
    value_batch_with_config(engine, snapshots, &BatchConfig::default())
}

/// Values every snapshot, in parallel above the configured threshold.
pub fn value_batch_with_config(
    engine: &ValuationEngine,
    snapshots: &[FinancialSnapshot],
    config: &BatchConfig,
) -> Vec<Result<ValuationResult, ValuationError>> {
    if config.should_parallelize(snapshots.len()) {
        snapshots.par_iter().map(|s| engine.run(s)).collect()
    } else {
        snapshots.iter().map(|s| engine.run(s)).collect()
    }
}

/// Values every snapshot with full reports, using the default [`BatchConfig`].
pub fn value_batch_detailed(
    engine: &ValuationEngine,
    snapshots: &[FinancialSnapshot],
) -> Vec<Result<ValuationReport, ValuationError>> {
    value_batch_detailed_with_config(engine, snapshots, &BatchConfig::default())
}

/// Detailed counterpart of [`value_batch_with_config`].
pub fn value_batch_detailed_with_config(
    engine: &ValuationEngine,
    snapshots: &[FinancialSnapshot],
    config: &BatchConfig,
) -> Vec<Result<ValuationReport, ValuationError>> {
    if config.should_parallelize(snapshots.len()) {
        snapshots.par_iter().map(|s| engine.run_detailed(s)).collect()
    } else {
        snapshots.iter().map(|s| engine.run_detailed(s)).collect()
    }
}

/// Counts over a batch of valuation outcomes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of snapshots processed.
    pub total: usize,
    /// Number of successful valuations.
    pub succeeded: usize,
    /// Number of failed valuations.
    pub failed: usize,
    /// Number of successful valuations flagged undervalued.
    pub undervalued: usize,
}

impl BatchSummary {
    /// Returns true if at least one valuation succeeded, or the batch was empty.
    #[inline]
    pub fn any_succeeded(&self) -> bool {
        self.total == 0 || self.succeeded > 0
    }
}

/// Summarises batch outcomes.
pub fn summarise(results: &[Result<ValuationResult, ValuationError>]) -> BatchSummary {
    tally(results.iter().map(|r| r.as_ref().ok()))
}

/// Summarises detailed batch outcomes.
pub fn summarise_reports(reports: &[Result<ValuationReport, ValuationError>]) -> BatchSummary {
    tally(reports.iter().map(|r| r.as_ref().ok().map(|report| &report.result)))
}

fn tally<'a>(outcomes: impl Iterator<Item = Option<&'a ValuationResult>>) -> BatchSummary {
    outcomes.fold(BatchSummary::default(), |mut summary, outcome| {
        summary.total += 1;
        match outcome {
            Some(r) => {
                summary.succeeded += 1;
                if r.undervalued {
                    summary.undervalued += 1;
                }
            }
            None => summary.failed += 1,
        }
        summary
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::{FinancialField as F, Ticker};

    fn snapshot(symbol: &str, fcf: f64) -> FinancialSnapshot {
        FinancialSnapshot::new(Ticker::parse(symbol).unwrap())
            .with_field(F::FreeCashFlow, fcf)
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

    fn portfolio(n: usize) -> Vec<FinancialSnapshot> {
        (0..n)
            .map(|i| snapshot(&format!("T{}", i), 500.0 + 50.0 * i as f64))
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let engine = ValuationEngine::default();
        let snapshots = portfolio(64);

        let sequential = value_batch_with_config(
            &engine,
            &snapshots,
            &BatchConfig {
                parallel_threshold: usize::MAX,
            },
        );
        let parallel = value_batch_with_config(
            &engine,
            &snapshots,
            &BatchConfig {
                parallel_threshold: 0,
            },
        );

        assert_eq!(sequential, parallel);
        for (snapshot, result) in snapshots.iter().zip(parallel.iter()) {
            assert_eq!(&result.as_ref().unwrap().ticker, &snapshot.ticker);
        }
    }

    #[test]
    fn test_failures_are_isolated() {
        let engine = ValuationEngine::default();
        let mut snapshots = portfolio(3);
        snapshots[1].set(F::Beta, None);

        let results = value_batch(&engine, &snapshots);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());

        let summary = summarise(&results);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        assert!(summary.any_succeeded());
    }

    #[test]
    fn test_detailed_batch_matches_headline_batch() {
        let engine = ValuationEngine::default();
        let mut snapshots = portfolio(20);
        snapshots[7].set(F::MarketCap, None);

        let headline = value_batch(&engine, &snapshots);
        let detailed = value_batch_detailed_with_config(
            &engine,
            &snapshots,
            &BatchConfig {
                parallel_threshold: 0,
            },
        );

        assert_eq!(detailed.len(), headline.len());
        for (report, result) in detailed.iter().zip(headline.iter()) {
            match (report, result) {
                (Ok(report), Ok(result)) => assert_eq!(&report.result, result),
                (Err(a), Err(b)) => assert_eq!(a, b),
                other => panic!("Outcomes diverge: {:?}", other),
            }
        }
        assert_eq!(summarise_reports(&detailed), summarise(&headline));
        assert_eq!(summarise_reports(&detailed).failed, 1);
    }

    #[test]
    fn test_summary_counts_undervalued() {
        let engine = ValuationEngine::default();
        // FCF 1000 values at ~144 < 150; FCF 2000 roughly doubles EV.
        let results = value_batch(&engine, &[snapshot("LOW", 1_000.0), snapshot("HIGH", 2_000.0)]);
        let summary = summarise(&results);
        assert_eq!(summary.undervalued, 1);
    }

    #[test]
    fn test_empty_batch() {
        let results = value_batch(&ValuationEngine::default(), &[]);
        assert!(results.is_empty());
        assert_eq!(summarise(&results), BatchSummary::default());
        assert!(summarise(&results).any_succeeded());
    }

    #[test]
    fn test_should_parallelize() {
        let config = BatchConfig::default();
        assert!(!config.should_parallelize(1));
        assert!(config.should_parallelize(16));
    }
}
