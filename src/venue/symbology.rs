//! Symbol adaptation between venue-native pair tokens and the canonical model.
//!
//! Each venue spells pairs differently (concatenated, delimited, sometimes
//! reversed). The [`SymbolAdapter`] for a venue owns a bidirectional mapping
//! between native tokens and [`CurrencyPair`], plus the finite set of
//! currencies the venue supports.
//!
//! The mapping must be pure and total over the declared currency set: any
//! token outside it is an error, never a silent default.

use crate::model::{Currency, CurrencyPair};

use super::error::{VenueError, VenueResult};

/// Trait for converting between venue-native pair tokens and [`CurrencyPair`].
pub trait SymbolAdapter: Send + Sync {
    /// Get the venue identifier for this adapter (e.g., "BTER").
    fn venue_id(&self) -> &str;

    /// The finite set of currencies this venue supports.
    fn supported_currencies(&self) -> &[Currency];

    /// Convert a venue-native pair token to the canonical pair.
    ///
    /// # Examples
    /// - BTER: `"btc_eur"` → `BTC/EUR`
    ///
    /// # Errors
    ///
    /// [`VenueError::UnsupportedCurrency`] if the token (or either half of
    /// it) is outside the venue's declared currency set.
    fn to_canonical(&self, native: &str) -> VenueResult<CurrencyPair>;

    /// Convert a canonical pair to the venue-native token.
    ///
    /// # Errors
    ///
    /// [`VenueError::UnsupportedCurrency`] if either currency is outside the
    /// venue's declared set.
    fn to_native(&self, pair: &CurrencyPair) -> VenueResult<String>;

    /// Validate a raw currency code against the venue's declared set.
    ///
    /// Used for fail-fast validation at service construction time: building
    /// a service for a currency the venue does not support must fail here,
    /// not lazily at call time.
    fn verify_currency(&self, code: &str) -> VenueResult<Currency> {
        let currency = Currency::new(code);
        if self.supported_currencies().contains(&currency) {
            Ok(currency)
        } else {
            Err(VenueError::UnsupportedCurrency(format!(
                "{} does not support {}",
                self.venue_id(),
                currency
            )))
        }
    }

    /// Validate both halves of a pair against the venue's declared set.
    fn verify_pair(&self, pair: &CurrencyPair) -> VenueResult<()> {
        self.verify_currency(pair.base().code())?;
        self.verify_currency(pair.counter().code())?;
        Ok(())
    }
}
