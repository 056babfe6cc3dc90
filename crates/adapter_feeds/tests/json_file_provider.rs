//! Integration tests for the directory-backed snapshot provider.

use std::fs;

use adapter_feeds::{FeedError, JsonFileProvider, SnapshotProvider};
use pricer_core::types::{FinancialField, Ticker};
use tempfile::TempDir;

const ACME: &str = r#"{
    "longName": "Acme Corp",
    "freeCashflow": 1000,
    "operatingCashflow": 1300,
    "totalRevenue": 9000,
    "ebitda": 2100,
    "totalDebt": 2000,
    "totalCash": 500,
    "sharesOutstanding": 100,
    "currentPrice": 150.0,
    "marketCap": 10000,
    "beta": 1.2,
    "revenueGrowth": 0.05,
    "earningsGrowth": 0.10
}"#;

fn ticker(s: &str) -> Ticker {
    Ticker::parse(s).unwrap()
}

fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ACME.json"), ACME).unwrap();
    fs::write(dir.path().join("lower.json"), r#"{ "beta": 0.8, "marketCap": null }"#).unwrap();
    fs::write(dir.path().join("BROKEN.json"), "{ \"beta\": ").unwrap();
    fs::write(dir.path().join("LIST.json"), "[1, 2]").unwrap();
    fs::write(dir.path().join("README.txt"), "not a snapshot").unwrap();
    dir
}

#[test]
fn test_fetch_complete_snapshot() {
    let dir = data_dir();
    let provider = JsonFileProvider::new(dir.path());

    let snapshot = provider.fetch(&ticker("acme")).unwrap();
    assert_eq!(snapshot.ticker.as_str(), "ACME");
    assert!(snapshot.is_complete());
    assert_eq!(snapshot.get(FinancialField::CurrentPrice), Some(150.0));
}

#[test]
fn test_fetch_lowercase_fallback() {
    let dir = data_dir();
    let provider = JsonFileProvider::new(dir.path());

    let snapshot = provider.fetch(&ticker("LOWER")).unwrap();
    assert_eq!(snapshot.ticker.as_str(), "LOWER");
    assert_eq!(snapshot.get(FinancialField::Beta), Some(0.8));
    assert_eq!(snapshot.get(FinancialField::MarketCap), None);
}

#[test]
fn test_fetch_errors() {
    let dir = data_dir();
    let provider = JsonFileProvider::new(dir.path());

    assert!(provider.fetch(&ticker("NOPE")).unwrap_err().is_not_found());
    assert!(matches!(
        provider.fetch(&ticker("BROKEN")),
        Err(FeedError::Parse { .. })
    ));
    assert!(matches!(
        provider.fetch(&ticker("LIST")),
        Err(FeedError::UnsupportedPayload { found: "array", .. })
    ));
}

#[test]
fn test_available_tickers_lists_json_files_only() {
    let dir = data_dir();
    let provider = JsonFileProvider::new(dir.path());

    let tickers: Vec<String> = provider
        .available_tickers()
        .unwrap()
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(tickers, vec!["ACME", "BROKEN", "LIST", "LOWER"]);
}

#[test]
fn test_fetch_all_isolates_failures() {
    let dir = data_dir();
    let provider = JsonFileProvider::new(dir.path());

    let results = provider.fetch_all(&[ticker("ACME"), ticker("NOPE"), ticker("LOWER")]);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert!(results[2].is_ok());
}
