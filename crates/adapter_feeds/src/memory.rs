//! In-memory snapshot provider.

use std::collections::HashMap;

use pricer_core::types::{FinancialSnapshot, Ticker};

use crate::error::FeedError;
use crate::provider::SnapshotProvider;

/// Snapshots held in a map keyed by ticker.
#[derive(Clone, Debug, Default)]
pub struct InMemoryProvider {
    snapshots: HashMap<Ticker, FinancialSnapshot>,
}

impl InMemoryProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a snapshot (builder style), replacing any with the same ticker.
    pub fn with_snapshot(mut self, snapshot: FinancialSnapshot) -> Self {
        self.insert(snapshot);
        self
    }

    /// Add a snapshot, returning the one it replaced.
    pub fn insert(&mut self, snapshot: FinancialSnapshot) -> Option<FinancialSnapshot> {
        self.snapshots.insert(snapshot.ticker.clone(), snapshot)
    }

    /// Number of snapshots held.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if no snapshots are held.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Tickers held, sorted.
    pub fn tickers(&self) -> Vec<Ticker> {
        let mut tickers: Vec<Ticker> = self.snapshots.keys().cloned().collect();
        tickers.sort();
        tickers
    }
}

impl FromIterator<FinancialSnapshot> for InMemoryProvider {
    fn from_iter<I: IntoIterator<Item = FinancialSnapshot>>(iter: I) -> Self {
        let mut provider = Self::new();
        for snapshot in iter {
            provider.insert(snapshot);
        }
        provider
    }
}

impl SnapshotProvider for InMemoryProvider {
    fn name(&self) -> &str {
        "memory"
    }

    fn fetch(&self, ticker: &Ticker) -> Result<FinancialSnapshot, FeedError> {
        self.snapshots
            .get(ticker)
            .cloned()
            .ok_or_else(|| FeedError::not_found(ticker, self.name()))
    }
}
