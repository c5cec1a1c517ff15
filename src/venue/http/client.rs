//! Per-call orchestration for venue REST APIs.
//!
//! Every call moves through the same states: build the parameters, sign
//! (authenticated calls only), send via the transport, then decode. Failed
//! calls are terminal here; nothing is retried, because a blind retry of a
//! signed mutating call risks duplicate execution. A nonce consumed by a
//! failed call stays burned.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::venue::error::{VenueError, VenueResult};
use crate::venue::nonce::NonceGenerator;

use super::signer::{HttpMethod, HttpRequest, RequestSigner};
use super::transport::Transport;

/// Client for venue REST APIs.
///
/// Holds the transport collaborator and, for authenticated venues, the
/// signer and the owned nonce counter. The nonce counter is the only shared
/// mutable state; parameters, signatures, and decoded results are all
/// call-local.
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    auth: Option<Auth>,
}

struct Auth {
    signer: Arc<dyn RequestSigner>,
    nonce: NonceGenerator,
}

impl HttpClient {
    /// Create a client for unsigned (market-data) endpoints only.
    pub fn new_public(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            auth: None,
        }
    }

    /// Create a client with a signer; the nonce generator is seeded from
    /// the current time in microseconds.
    pub fn new_signed(transport: Arc<dyn Transport>, signer: Arc<dyn RequestSigner>) -> Self {
        Self::with_nonce(transport, signer, NonceGenerator::default())
    }

    /// Create a client with a signer and an explicit nonce generator, for
    /// venues with particular nonce-unit requirements.
    pub fn with_nonce(
        transport: Arc<dyn Transport>,
        signer: Arc<dyn RequestSigner>,
        nonce: NonceGenerator,
    ) -> Self {
        Self {
            transport,
            auth: Some(Auth { signer, nonce }),
        }
    }

    /// Make an unsigned GET request and deserialize the response.
    pub async fn get_public<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> VenueResult<T> {
        let raw = self.get_public_raw(endpoint, params).await?;
        from_value(raw)
    }

    /// Make an unsigned GET request and return the raw JSON tree, for
    /// responses that need venue-specific decoding.
    pub async fn get_public_raw(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> VenueResult<Value> {
        let request = HttpRequest::new(HttpMethod::Get, endpoint).with_params(params);
        debug!(endpoint, "GET (public)");
        self.transport.execute(&request).await
    }

    /// Make a signed GET request and return the raw JSON tree.
    pub async fn get_signed_raw(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> VenueResult<Value> {
        self.request_signed(HttpMethod::Get, endpoint, params).await
    }

    /// Make a signed POST request and return the raw JSON tree.
    pub async fn post_signed_raw(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> VenueResult<Value> {
        self.request_signed(HttpMethod::Post, endpoint, params)
            .await
    }

    /// Sign and execute a request: obtain a nonce, produce the signature,
    /// invoke the transport.
    async fn request_signed(
        &self,
        method: HttpMethod,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> VenueResult<Value> {
        let auth = self.auth.as_ref().ok_or_else(|| {
            VenueError::Configuration("signed request on a public-only client".to_string())
        })?;

        let params: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let nonce = auth.nonce.next();
        let signed = auth.signer.sign(method, endpoint, &params, nonce);

        debug!(method = method.as_str(), endpoint, nonce, "signed request");
        self.transport.execute(&signed.request).await
    }
}

/// Deserialize a raw tree into a typed response.
pub(crate) fn from_value<T: DeserializeOwned>(value: Value) -> VenueResult<T> {
    serde_json::from_value(value).map_err(|e| VenueError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::venue::http::signer::SignedRequest;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct EchoTransport {
        seen: Mutex<Vec<HttpRequest>>,
    }

    #[async_trait]
    impl Transport for EchoTransport {
        async fn execute(&self, request: &HttpRequest) -> VenueResult<Value> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(json!({"ok": true}))
        }
    }

    struct NonceEchoSigner;

    impl RequestSigner for NonceEchoSigner {
        fn sign(
            &self,
            method: HttpMethod,
            endpoint: &str,
            params: &[(String, String)],
            nonce: u64,
        ) -> SignedRequest {
            let mut request = HttpRequest::new(method, endpoint);
            request.params = params.to_vec();
            request.headers.push(("NONCE".to_string(), nonce.to_string()));
            SignedRequest {
                request,
                nonce,
                signature: "sig".to_string(),
                api_key: "key".to_string(),
            }
        }

        fn api_key(&self) -> &str {
            "key"
        }
    }

    #[tokio::test]
    async fn test_signed_request_on_public_client_fails() {
        let transport = Arc::new(EchoTransport {
            seen: Mutex::new(Vec::new()),
        });
        let client = HttpClient::new_public(transport);

        let err = client.post_signed_raw("/buys", &[]).await.unwrap_err();
        assert!(matches!(err, VenueError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_signed_requests_consume_increasing_nonces() {
        let transport = Arc::new(EchoTransport {
            seen: Mutex::new(Vec::new()),
        });
        let client = HttpClient::with_nonce(
            Arc::clone(&transport) as Arc<dyn Transport>,
            Arc::new(NonceEchoSigner),
            NonceGenerator::starting_after(0),
        );

        client.post_signed_raw("/buys", &[]).await.unwrap();
        client.post_signed_raw("/sells", &[]).await.unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].header("NONCE"), Some("1"));
        assert_eq!(seen[1].header("NONCE"), Some("2"));
    }

    #[tokio::test]
    async fn test_public_get_passes_params() {
        let transport = Arc::new(EchoTransport {
            seen: Mutex::new(Vec::new()),
        });
        let client = HttpClient::new_public(Arc::clone(&transport) as Arc<dyn Transport>);

        let _: Value = client
            .get_public("/marketinfo", &[("page", "1")])
            .await
            .unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].method, HttpMethod::Get);
        assert_eq!(seen[0].param("page"), Some("1"));
    }
}
