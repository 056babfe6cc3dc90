//! # Adapter Feeds: Financial Snapshot Providers
//!
//! Adapter layer that turns provider payloads into
//! [`FinancialSnapshot`](pricer_core::types::FinancialSnapshot) values for
//! the valuation kernel.
//!
//! ## Components
//!
//! - [`SnapshotProvider`]: the fetch interface every feed implements
//! - [`provider_info`]: provider-info JSON object to snapshot mapping
//! - [`JsonFileProvider`]: one `<TICKER>.json` file per ticker in a directory
//! - [`InMemoryProvider`]: snapshots held in a map, for tests and embedding
//!
//! Providers only fetch and map. Completeness checks belong to the kernel,
//! so a payload with missing keys still yields a snapshot.
//!
//! ## Example
//!
//! ```
//! use adapter_feeds::{InMemoryProvider, SnapshotProvider};
//! use pricer_core::types::{FinancialField, FinancialSnapshot, Ticker};
//!
//! let ticker = Ticker::parse("ACME").unwrap();
//! let provider = InMemoryProvider::new()
//!     .with_snapshot(FinancialSnapshot::new(ticker.clone()).with_field(FinancialField::Beta, 1.1));
//!
//! let snapshot = provider.fetch(&ticker).unwrap();
//! assert_eq!(snapshot.get(FinancialField::Beta), Some(1.1));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod file;
pub mod memory;
pub mod provider;
pub mod provider_info;

pub use error::FeedError;
pub use file::JsonFileProvider;
pub use memory::InMemoryProvider;
pub use provider::SnapshotProvider;
pub use provider_info::{parse_provider_info, parse_provider_info_str};
