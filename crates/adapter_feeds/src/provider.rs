//! Snapshot provider interface.

use pricer_core::types::{FinancialSnapshot, Ticker};

use crate::error::FeedError;

/// Trait for financial snapshot providers.
///
/// Implementations return whatever the source holds; absent fields stay
/// `None` and are reported later by snapshot validation.
pub trait SnapshotProvider: Send + Sync {
    /// Provider name used in logs and error messages.
    fn name(&self) -> &str;

    /// Fetch the snapshot for one ticker.
    fn fetch(&self, ticker: &Ticker) -> Result<FinancialSnapshot, FeedError>;

    /// Fetch snapshots for several tickers, one result per ticker in order.
    fn fetch_all(&self, tickers: &[Ticker]) -> Vec<Result<FinancialSnapshot, FeedError>> {
        tickers.iter().map(|t| self.fetch(t)).collect()
    }
}

impl<P: SnapshotProvider + ?Sized> SnapshotProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch(&self, ticker: &Ticker) -> Result<FinancialSnapshot, FeedError> {
        (**self).fetch(ticker)
    }
}
