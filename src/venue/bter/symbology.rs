//! BTER symbol adaptation.

use crate::model::{Currency, CurrencyPair};
use crate::venue::error::{VenueError, VenueResult};
use crate::venue::symbology::SymbolAdapter;

/// Currencies BTER lists markets for.
const SUPPORTED: &[&str] = &[
    "BTC", "LTC", "DOGE", "XRP", "NMC", "PPC", "FTC", "CNC", "EUR", "USD", "CNY",
];

/// Converts between BTER's lowercase underscore tokens (`btc_cny`) and the
/// canonical pair model.
pub struct BterSymbolAdapter {
    currencies: Vec<Currency>,
}

impl BterSymbolAdapter {
    pub fn new() -> Self {
        Self {
            currencies: SUPPORTED.iter().map(Currency::new).collect(),
        }
    }
}

impl Default for BterSymbolAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolAdapter for BterSymbolAdapter {
    fn venue_id(&self) -> &str {
        "BTER"
    }

    fn supported_currencies(&self) -> &[Currency] {
        &self.currencies
    }

    fn to_canonical(&self, native: &str) -> VenueResult<CurrencyPair> {
        let (base, counter) = native.split_once('_').ok_or_else(|| {
            VenueError::UnsupportedCurrency(format!("BTER token '{}' has no separator", native))
        })?;
        Ok(CurrencyPair::new(
            self.verify_currency(base)?,
            self.verify_currency(counter)?,
        ))
    }

    fn to_native(&self, pair: &CurrencyPair) -> VenueResult<String> {
        self.verify_pair(pair)?;
        Ok(format!("{}_{}", pair.base(), pair.counter()).to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_canonical_normalizes_case() {
        let adapter = BterSymbolAdapter::new();
        let pair = adapter.to_canonical("btc_cny").unwrap();
        assert_eq!(pair, CurrencyPair::new("BTC", "CNY"));
    }

    #[test]
    fn test_to_native_is_lowercase_underscore() {
        let adapter = BterSymbolAdapter::new();
        let native = adapter.to_native(&CurrencyPair::new("DOGE", "BTC")).unwrap();
        assert_eq!(native, "doge_btc");
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let adapter = BterSymbolAdapter::new();
        let err = adapter.to_canonical("xyz_btc").unwrap_err();
        assert!(matches!(err, VenueError::UnsupportedCurrency(_)));
    }

    #[test]
    fn test_missing_separator_rejected() {
        let adapter = BterSymbolAdapter::new();
        assert!(adapter.to_canonical("btccny").is_err());
    }
}
