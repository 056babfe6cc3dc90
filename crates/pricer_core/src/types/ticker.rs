//! Stock ticker identifiers.
//!
//! Tickers are trimmed and upper-cased on construction so that `"aapl "`
//! and `"AAPL"` name the same snapshot.

use std::fmt;
use std::str::FromStr;

use super::error::TickerError;

/// Normalised stock ticker symbol.
///
/// Accepts ASCII letters, digits and the separators `.`, `-`, `^`, `=`
/// used by market data providers (e.g. `BRK-B`, `^GSPC`, `7203.T`).
///
/// # Examples
///
/// ```
/// use pricer_core::types::Ticker;
///
/// let ticker = Ticker::parse(" brk-b").unwrap();
/// assert_eq!(ticker.as_str(), "BRK-B");
///
/// assert!(Ticker::parse("   ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Ticker(String);

impl Ticker {
    /// Parses and normalises a ticker symbol.
    ///
    /// # Errors
    ///
    /// Returns `TickerError::Empty` for blank input and
    /// `TickerError::InvalidCharacter` for characters outside the accepted set.
    pub fn parse(raw: &str) -> Result<Self, TickerError> {
        let normalised = raw.trim().to_ascii_uppercase();
        if normalised.is_empty() {
            return Err(TickerError::Empty);
        }
        if let Some(ch) = normalised
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '=')))
        {
            return Err(TickerError::InvalidCharacter {
                ticker: normalised,
                ch,
            });
        }
        Ok(Self(normalised))
    }

    /// Returns the ticker as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = TickerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl TryFrom<&str> for Ticker {
    type Error = TickerError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
