//! Authenticated Coinbase trade service: buys, sells, and transfer history.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use crate::venue::config::VenueConfig;
use crate::venue::error::{VenueError, VenueResult};
use crate::venue::http::{from_value, HttpClient, Transport};

use super::endpoints;
use super::signer::CoinbaseHmacSigner;
use super::types::{CoinbaseTransfer, CoinbaseTransfers};

/// Page returned when the caller supplies no page, or a page below 1.
pub const DEFAULT_TRANSFER_PAGE: i32 = 1;

/// Limit applied when the caller supplies no limit, or a limit below 1.
pub const DEFAULT_TRANSFER_LIMIT: i32 = 25;

/// Authenticated trade service for Coinbase.
///
/// One instance per account; all calls share the client's nonce counter.
pub struct CoinbaseTradeService {
    client: HttpClient,
}

impl std::fmt::Debug for CoinbaseTradeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinbaseTradeService").finish_non_exhaustive()
    }
}

impl CoinbaseTradeService {
    /// Create a trade service from configuration.
    ///
    /// # Errors
    ///
    /// [`VenueError::Configuration`] if the API key or secret is missing.
    pub fn new(transport: Arc<dyn Transport>, config: &VenueConfig) -> VenueResult<Self> {
        let api_key = config
            .auth
            .api_key
            .as_deref()
            .ok_or_else(|| VenueError::Configuration("Coinbase API key is not set".to_string()))?;
        let api_secret = config.auth.api_secret.as_deref().ok_or_else(|| {
            VenueError::Configuration("Coinbase API secret is not set".to_string())
        })?;

        let signer = CoinbaseHmacSigner::new(api_key, api_secret, &config.rest.base_url);
        Ok(Self {
            client: HttpClient::new_signed(transport, Arc::new(signer)),
        })
    }

    /// Purchase Bitcoin using the primary linked account.
    ///
    /// The underlying `agree_btc_amount_varies` flag is set to false; use
    /// [`buy_with_varying_amount`](Self::buy_with_varying_amount) to accept
    /// a varying BTC amount.
    pub async fn buy(&self, quantity: Decimal) -> VenueResult<CoinbaseTransfer> {
        self.place_transfer(endpoints::BUYS, quantity, Some(false))
            .await
    }

    /// Purchase Bitcoin, agreeing that the BTC amount may vary between
    /// order placement and execution.
    pub async fn buy_with_varying_amount(&self, quantity: Decimal) -> VenueResult<CoinbaseTransfer> {
        self.place_transfer(endpoints::BUYS, quantity, Some(true))
            .await
    }

    /// Sell Bitcoin, crediting the primary linked account.
    pub async fn sell(&self, quantity: Decimal) -> VenueResult<CoinbaseTransfer> {
        self.place_transfer(endpoints::SELLS, quantity, None).await
    }

    /// The first page of the account's purchases and sells, newest first.
    pub async fn recent_transfers(&self) -> VenueResult<CoinbaseTransfers> {
        self.transfers(None, None).await
    }

    /// A page of the account's purchases and sells, newest first.
    ///
    /// `page` defaults to 1 when absent or below 1; `limit` defaults to 25
    /// when absent or below 1. These are clamping defaults, not errors.
    pub async fn transfers(
        &self,
        page: Option<i32>,
        limit: Option<i32>,
    ) -> VenueResult<CoinbaseTransfers> {
        let page = page.filter(|p| *p >= 1).unwrap_or(DEFAULT_TRANSFER_PAGE);
        let limit = limit.filter(|l| *l >= 1).unwrap_or(DEFAULT_TRANSFER_LIMIT);

        let page = page.to_string();
        let limit = limit.to_string();
        let params = [("page", page.as_str()), ("limit", limit.as_str())];

        let raw = self
            .client
            .get_signed_raw(endpoints::TRANSFERS, &params)
            .await?;
        from_value(check_envelope(raw)?)
    }

    /// Place a buy or sell and unwrap the transfer from the envelope.
    async fn place_transfer(
        &self,
        endpoint: &str,
        quantity: Decimal,
        agree_btc_amount_varies: Option<bool>,
    ) -> VenueResult<CoinbaseTransfer> {
        // Plain decimal string, exactly as given; never an exponent form
        let qty = quantity.to_string();
        let mut params = vec![("qty", qty.as_str())];
        if let Some(agree) = agree_btc_amount_varies {
            params.push((
                "agree_btc_amount_varies",
                if agree { "true" } else { "false" },
            ));
        }

        debug!(endpoint, qty = %quantity, "placing transfer");
        let raw = self.client.post_signed_raw(endpoint, &params).await?;
        let checked = check_envelope(raw)?;

        let transfer = checked
            .get("transfer")
            .cloned()
            .ok_or_else(|| VenueError::Parse("response has no 'transfer' field".to_string()))?;
        from_value(transfer)
    }
}

/// Translate the Coinbase response envelope.
///
/// Coinbase reports application-level failures inside a transport-success
/// response: `success: false` plus an `errors` list (or a single `error`
/// string). Those become [`VenueError::Rejected`] so callers can distinguish
/// "the network worked, the venue refused" from a transport failure.
fn check_envelope(value: Value) -> VenueResult<Value> {
    let Some(obj) = value.as_object() else {
        return Ok(value);
    };

    let mut messages: Vec<String> = Vec::new();
    if let Some(errors) = obj.get("errors").and_then(Value::as_array) {
        messages.extend(
            errors
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string),
        );
    }
    if let Some(error) = obj.get("error").and_then(Value::as_str) {
        messages.push(error.to_string());
    }

    let success = obj.get("success").and_then(Value::as_bool);
    if success == Some(false) || !messages.is_empty() {
        let message = if messages.is_empty() {
            "request rejected".to_string()
        } else {
            messages.join("; ")
        };
        return Err(VenueError::rejected(message));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_passes_success() {
        let value = json!({"success": true, "transfer": {}});
        assert!(check_envelope(value).is_ok());
    }

    #[test]
    fn test_envelope_passes_plain_payload() {
        // Responses without an envelope (e.g. transfer listings) pass through
        let value = json!({"transfers": [], "total_count": 0, "num_pages": 0, "current_page": 1});
        assert!(check_envelope(value).is_ok());
    }

    #[test]
    fn test_envelope_rejects_on_success_false() {
        let value = json!({"success": false, "errors": ["You have insufficient funds"]});
        let err = check_envelope(value).unwrap_err();
        assert!(err.is_rejection());
        assert!(err.to_string().contains("insufficient funds"));
    }

    #[test]
    fn test_envelope_rejects_on_single_error_string() {
        let value = json!({"error": "invalid api key"});
        let err = check_envelope(value).unwrap_err();
        assert!(err.is_rejection());
        assert!(err.to_string().contains("invalid api key"));
    }

    #[test]
    fn test_envelope_joins_multiple_errors() {
        let value = json!({"success": false, "errors": ["first", "second"]});
        let err = check_envelope(value).unwrap_err();
        assert!(err.to_string().contains("first; second"));
    }
}
