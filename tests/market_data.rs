//! End-to-end tests for the public market-data services.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use venue_client::model::CurrencyPair;
use venue_client::venue::bitcurex::BitcurexMarketDataService;
use venue_client::venue::bter::BterMarketDataService;
use venue_client::venue::http::{HttpRequest, Transport};
use venue_client::venue::{VenueError, VenueResult};

struct StubTransport {
    seen: Mutex<Vec<HttpRequest>>,
    response: Value,
}

impl StubTransport {
    fn new(response: Value) -> Arc<Self> {
        Arc::new(Self {
            seen: Mutex::new(Vec::new()),
            response,
        })
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: &HttpRequest) -> VenueResult<Value> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

#[tokio::test]
async fn bter_market_info_decodes_full_response() {
    let transport = StubTransport::new(json!({"pairs": [
        {"btc_cny": {"decimal_places": 2, "min_amount": "0.5", "fee": "0.002"}},
        {"ltc_cny": {"decimal_places": 2, "min_amount": "0.5", "fee": "0.002"}},
        {"doge_btc": {"decimal_places": 8, "min_amount": "0.00000001", "fee": "0.002"}}
    ]}));
    let service = BterMarketDataService::new(Arc::clone(&transport) as Arc<dyn Transport>);

    let set = service.market_info().await.unwrap();

    assert_eq!(set.len(), 3);
    let doge = set.get(&CurrencyPair::new("DOGE", "BTC")).unwrap();
    assert_eq!(doge.decimal_places, 8);
    assert_eq!(doge.min_amount.to_string(), "0.00000001");
    assert_eq!(doge.fee, dec!(0.002));

    let requests = transport.seen.lock().unwrap();
    assert_eq!(requests[0].endpoint, "/api/1/marketinfo");
    assert!(requests[0].params.is_empty());
}

#[tokio::test]
async fn bter_malformed_element_fails_whole_call() {
    let transport = StubTransport::new(json!({"pairs": [
        {"btc_cny": {"decimal_places": 2, "min_amount": "0.5", "fee": "0.002"}},
        {}
    ]}));
    let service = BterMarketDataService::new(transport);

    let err = service.market_info().await.unwrap_err();
    assert!(matches!(err, VenueError::MalformedMarketData { .. }));
}

#[tokio::test]
async fn bter_unknown_token_fails_whole_call() {
    let transport = StubTransport::new(json!({"pairs": [
        {"btc_cny": {"decimal_places": 2, "min_amount": "0.5", "fee": "0.002"}},
        {"abc_xyz": {"decimal_places": 2, "min_amount": "0.5", "fee": "0.002"}}
    ]}));
    let service = BterMarketDataService::new(transport);

    let err = service.market_info().await.unwrap_err();
    assert!(matches!(err, VenueError::UnsupportedCurrency(_)));
}

#[test]
fn bitcurex_rejects_unsupported_fiat_at_construction() {
    let transport = StubTransport::new(json!({}));
    let err = BitcurexMarketDataService::new(transport, "USD").unwrap_err();
    assert!(matches!(err, VenueError::UnsupportedCurrency(_)));
}

#[tokio::test]
async fn bitcurex_ticker_hits_per_currency_path() {
    let transport = StubTransport::new(json!({
        "last": 1355.0, "high": 1377.0, "low": 1310.0, "avg": 1341.5,
        "vwap": 1343.75, "vol": 42.5, "buy": 1354.0, "sell": 1356.0
    }));
    let service =
        BitcurexMarketDataService::new(Arc::clone(&transport) as Arc<dyn Transport>, "PLN")
            .unwrap();

    assert_eq!(service.pairs(), vec![CurrencyPair::new("BTC", "PLN")]);

    let ticker = service.ticker().await.unwrap();
    assert_eq!(ticker.vol, dec!(42.5));

    let requests = transport.seen.lock().unwrap();
    assert_eq!(requests[0].endpoint, "/data/pln/ticker.json");
}
