//! Provider-info JSON mapping.
//!
//! Market data providers expose a flat object of company statistics keyed
//! by camelCase names (`freeCashflow`, `marketCap`, `beta`, ...). This
//! module maps such an object onto a [`FinancialSnapshot`]:
//!
//! | JSON value         | Snapshot field       |
//! |--------------------|----------------------|
//! | number             | `Some(value)`        |
//! | `null` / absent    | `None`               |
//! | anything else      | `None`, with a warning |
//!
//! Both the provider key and the canonical field name are accepted; the
//! provider key wins when both are present. Unknown keys are ignored.

use pricer_core::types::{FinancialField, FinancialSnapshot, Ticker};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::FeedError;

/// Maps a provider-info JSON value onto a snapshot.
///
/// # Errors
///
/// Returns `FeedError::UnsupportedPayload` if `payload` is not an object.
///
/// # Examples
///
/// ```
/// use adapter_feeds::parse_provider_info;
/// use pricer_core::types::{FinancialField, Ticker};
/// use serde_json::json;
///
/// let payload = json!({ "freeCashflow": 1000, "beta": 1.2, "marketCap": null });
/// let snapshot = parse_provider_info(Ticker::parse("ACME").unwrap(), &payload).unwrap();
///
/// assert_eq!(snapshot.get(FinancialField::FreeCashFlow), Some(1000.0));
/// assert_eq!(snapshot.get(FinancialField::MarketCap), None);
/// ```
pub fn parse_provider_info(
    ticker: Ticker,
    payload: &Value,
) -> Result<FinancialSnapshot, FeedError> {
    let object = payload
        .as_object()
        .ok_or_else(|| FeedError::UnsupportedPayload {
            ticker: ticker.clone(),
            found: json_kind(payload),
        })?;

    let mut snapshot = FinancialSnapshot::new(ticker);
    for field in FinancialField::REQUIRED {
        let value = lookup(object, field).and_then(|v| numeric(&snapshot.ticker, field, v));
        snapshot.set(field, value);
    }
    Ok(snapshot)
}

/// Parses a provider-info JSON document and maps it onto a snapshot.
///
/// # Errors
///
/// Returns `FeedError::Parse` for malformed JSON and
/// `FeedError::UnsupportedPayload` for a non-object document.
pub fn parse_provider_info_str(ticker: Ticker, json: &str) -> Result<FinancialSnapshot, FeedError> {
    let payload: Value = serde_json::from_str(json).map_err(|e| FeedError::Parse {
        ticker: ticker.clone(),
        message: e.to_string(),
    })?;
    parse_provider_info(ticker, &payload)
}

fn lookup(object: &Map<String, Value>, field: FinancialField) -> Option<&Value> {
    object
        .get(field.provider_key())
        .or_else(|| object.get(field.name()))
}

fn numeric(ticker: &Ticker, field: FinancialField, value: &Value) -> Option<f64> {
    match value {
        Value::Null => None,
        Value::Number(n) => n.as_f64(),
        other => {
            warn!(
                %ticker,
                field = field.provider_key(),
                kind = json_kind(other),
                "ignoring non-numeric provider value"
            );
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
