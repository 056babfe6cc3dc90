//! Directory-backed snapshot provider.
//!
//! Each ticker is stored as a provider-info JSON object in
//! `<data_dir>/<TICKER>.json`. A lower-case file name (`aapl.json`) is
//! accepted as a fallback.

use std::fs;
use std::path::{Path, PathBuf};

use pricer_core::types::{FinancialSnapshot, Ticker};
use tracing::{debug, warn};

use crate::error::FeedError;
use crate::provider::SnapshotProvider;
use crate::provider_info::parse_provider_info_str;

const EXTENSION: &str = "json";

/// Reads snapshots from a directory of JSON files.
#[derive(Clone, Debug)]
pub struct JsonFileProvider {
    data_dir: PathBuf,
}

impl JsonFileProvider {
    /// Create a provider rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory the provider reads from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Candidate file paths for `ticker`, in lookup order.
    pub fn candidates(&self, ticker: &Ticker) -> [PathBuf; 2] {
        [
            self.data_dir.join(format!("{}.{}", ticker, EXTENSION)),
            self.data_dir
                .join(format!("{}.{}", ticker.as_str().to_ascii_lowercase(), EXTENSION)),
        ]
    }

    /// First existing file for `ticker`, if any.
    pub fn path_for(&self, ticker: &Ticker) -> Option<PathBuf> {
        self.candidates(ticker).into_iter().find(|p| p.is_file())
    }

    /// Tickers with a snapshot file in the data directory, sorted.
    ///
    /// Files whose stem is not a valid ticker are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Io` if the directory cannot be listed.
    pub fn available_tickers(&self) -> Result<Vec<Ticker>, FeedError> {
        let entries = fs::read_dir(&self.data_dir).map_err(|source| FeedError::Io {
            path: self.data_dir.clone(),
            source,
        })?;

        let mut tickers = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| FeedError::Io {
                    path: self.data_dir.clone(),
                    source,
                })?
                .path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match Ticker::parse(stem) {
                Ok(ticker) => tickers.push(ticker),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping snapshot file"),
            }
        }
        tickers.sort();
        tickers.dedup();
        Ok(tickers)
    }
}

impl SnapshotProvider for JsonFileProvider {
    fn name(&self) -> &str {
        "json-file"
    }

    fn fetch(&self, ticker: &Ticker) -> Result<FinancialSnapshot, FeedError> {
        let path = self
            .path_for(ticker)
            .ok_or_else(|| FeedError::not_found(ticker, self.data_dir.display().to_string()))?;
        debug!(%ticker, path = %path.display(), "reading snapshot");

        let contents = fs::read_to_string(&path).map_err(|source| FeedError::Io {
            path: path.clone(),
            source,
        })?;
        parse_provider_info_str(ticker.clone(), &contents)
    }
}
