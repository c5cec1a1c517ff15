//! Bitcurex venue implementation.
//!
//! Market data only. Bitcurex runs one market per fiat currency (EUR and
//! PLN), so the service is constructed for a single fiat and validates it up
//! front: a service for an unsupported currency cannot be built, it does not
//! fail lazily on the first call.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::model::{Currency, CurrencyPair};
use crate::venue::error::{VenueError, VenueResult};
use crate::venue::http::{HttpClient, Transport};

/// Fiat currencies Bitcurex runs markets for.
const SUPPORTED_FIATS: &[&str] = &["EUR", "PLN"];

/// Per-currency public ticker path.
fn ticker_path(fiat: &Currency) -> String {
    format!("/data/{}/ticker.json", fiat.code().to_lowercase())
}

/// Public ticker snapshot. Bitcurex emits prices as bare JSON numbers, which
/// the decimal fields accept alongside string forms.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BitcurexTicker {
    pub last: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub avg: Decimal,
    pub vwap: Decimal,
    pub vol: Decimal,
    pub buy: Decimal,
    pub sell: Decimal,
}

/// Market-data service for one Bitcurex fiat market.
pub struct BitcurexMarketDataService {
    client: HttpClient,
    fiat: Currency,
}

impl std::fmt::Debug for BitcurexMarketDataService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitcurexMarketDataService")
            .field("fiat", &self.fiat)
            .finish_non_exhaustive()
    }
}

impl BitcurexMarketDataService {
    /// Create a service for the given fiat currency.
    ///
    /// # Errors
    ///
    /// [`VenueError::UnsupportedCurrency`] for any currency other than EUR
    /// or PLN.
    pub fn new(transport: Arc<dyn Transport>, fiat: impl Into<Currency>) -> VenueResult<Self> {
        let fiat = fiat.into();
        if !SUPPORTED_FIATS.contains(&fiat.code()) {
            return Err(VenueError::UnsupportedCurrency(format!(
                "Bitcurex does not support {}",
                fiat
            )));
        }
        Ok(Self {
            client: HttpClient::new_public(transport),
            fiat,
        })
    }

    /// The single pair this service covers.
    pub fn pairs(&self) -> Vec<CurrencyPair> {
        vec![CurrencyPair::new("BTC", self.fiat.clone())]
    }

    /// Fetch the public ticker for this service's market.
    pub async fn ticker(&self) -> VenueResult<BitcurexTicker> {
        let path = ticker_path(&self.fiat);
        let ticker: BitcurexTicker = self.client.get_public(&path, &[]).await?;
        debug!(fiat = %self.fiat, last = %ticker.last, "fetched Bitcurex ticker");
        Ok(ticker)
    }
}
