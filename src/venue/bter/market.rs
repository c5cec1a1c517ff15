//! BTER public market-data service.

use std::sync::Arc;

use tracing::debug;

use crate::model::MarketInfoSet;
use crate::venue::error::VenueResult;
use crate::venue::http::{HttpClient, Transport};
use crate::venue::wire::decode_market_info;

use super::symbology::BterSymbolAdapter;

/// Field on the market-info root object holding the pair array.
const MARKET_INFO_FIELD: &str = "pairs";

/// Unsigned market-data service for BTER.
pub struct BterMarketDataService {
    client: HttpClient,
    adapter: BterSymbolAdapter,
}

impl BterMarketDataService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            client: HttpClient::new_public(transport),
            adapter: BterSymbolAdapter::new(),
        }
    }

    /// Fetch trading metadata for every listed pair.
    ///
    /// The decode is all-or-nothing: a single malformed element or unknown
    /// pair token fails the whole call rather than returning a partial set.
    pub async fn market_info(&self) -> VenueResult<MarketInfoSet> {
        let raw = self
            .client
            .get_public_raw(super::endpoints::MARKET_INFO, &[])
            .await?;
        let set = decode_market_info(&self.adapter, &raw, MARKET_INFO_FIELD)?;
        debug!(markets = set.len(), "decoded BTER market info");
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CurrencyPair;
    use crate::venue::error::VenueError;
    use crate::venue::http::HttpRequest;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};

    struct CannedTransport {
        response: Value,
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn execute(&self, _request: &HttpRequest) -> VenueResult<Value> {
            Ok(self.response.clone())
        }
    }

    fn service(response: Value) -> BterMarketDataService {
        BterMarketDataService::new(Arc::new(CannedTransport { response }))
    }

    #[tokio::test]
    async fn test_market_info_decodes_pairs() {
        let service = service(json!({"pairs": [
            {"btc_cny": {"decimal_places": 2, "min_amount": "0.5", "fee": "0.002"}},
            {"ltc_btc": {"decimal_places": 5, "min_amount": "0.01", "fee": "0.002"}}
        ]}));

        let set = service.market_info().await.unwrap();
        assert_eq!(set.len(), 2);
        let info = set.get(&CurrencyPair::new("BTC", "CNY")).unwrap();
        assert_eq!(info.min_amount, dec!(0.5));
    }

    #[tokio::test]
    async fn test_market_info_rejects_unknown_pair_token() {
        let service = service(json!({"pairs": [
            {"zzz_cny": {"decimal_places": 2, "min_amount": "0.5", "fee": "0.002"}}
        ]}));

        let err = service.market_info().await.unwrap_err();
        assert!(matches!(err, VenueError::UnsupportedCurrency(_)));
    }

    #[tokio::test]
    async fn test_market_info_rejects_malformed_root() {
        let service = service(json!({"markets": []}));
        let err = service.market_info().await.unwrap_err();
        assert!(matches!(err, VenueError::MalformedMarketData { .. }));
    }
}
