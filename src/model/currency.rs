//! Currency and currency-pair value types.
//!
//! Codes are normalized to uppercase at construction so that equality and
//! hashing are case-insensitive. Both types are immutable values: adapters
//! build them from raw venue strings and never mutate them afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A currency code in canonical (uppercase) form, e.g. `BTC`, `EUR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Create a currency from a raw code, normalizing to uppercase.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_uppercase())
    }

    /// The canonical (uppercase) code.
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Currency::new(code)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Currency::new(code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered (base, counter) pair of currencies, e.g. `BTC/EUR`.
///
/// `base != counter` is expected but not enforced; venues own that rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CurrencyPair {
    base: Currency,
    counter: Currency,
}

impl CurrencyPair {
    /// Create a pair from base and counter currencies.
    pub fn new(base: impl Into<Currency>, counter: impl Into<Currency>) -> Self {
        Self {
            base: base.into(),
            counter: counter.into(),
        }
    }

    /// The base currency (the one being traded).
    pub fn base(&self) -> &Currency {
        &self.base
    }

    /// The counter (quote) currency.
    pub fn counter(&self) -> &Currency {
        &self.counter
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_currency_normalizes_case() {
        assert_eq!(Currency::new("btc"), Currency::new("BTC"));
        assert_eq!(Currency::new(" eur "), Currency::new("EUR"));
        assert_eq!(Currency::new("btc").code(), "BTC");
    }

    #[test]
    fn test_pair_equality_is_case_insensitive() {
        let a = CurrencyPair::new("btc", "eur");
        let b = CurrencyPair::new("BTC", "EUR");
        assert_eq!(a, b);

        let mut map = HashMap::new();
        map.insert(a, 1);
        assert_eq!(map.get(&b), Some(&1));
    }

    #[test]
    fn test_pair_is_ordered() {
        // BTC/EUR and EUR/BTC are different markets
        assert_ne!(
            CurrencyPair::new("BTC", "EUR"),
            CurrencyPair::new("EUR", "BTC")
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(CurrencyPair::new("btc", "eur").to_string(), "BTC/EUR");
    }

    #[test]
    fn test_serde_round_trip_normalizes() {
        let currency: Currency = serde_json::from_str("\"btc\"").unwrap();
        assert_eq!(currency, Currency::new("BTC"));
        assert_eq!(serde_json::to_string(&currency).unwrap(), "\"BTC\"");
    }
}
