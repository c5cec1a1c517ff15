//! Request signing for authenticated API calls.
//!
//! Each venue implements its own signing scheme (HMAC-SHA256 over
//! nonce+URL+body for Coinbase-style APIs, HMAC-SHA512 with base64 secrets
//! elsewhere). The [`RequestSigner`] trait abstracts over them: given the
//! semantic request and a nonce, produce a [`SignedRequest`] carrying the
//! signature wherever the venue expects it (header or parameter).
//!
//! Signing must be deterministic: identical inputs yield identical output.
//! The canonical encoding is stable because parameter order is fixed by the
//! operation's definition, never by iteration order of an unordered
//! container.

/// HTTP method for a venue request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET request; parameters travel in the query string
    Get,
    /// POST request; parameters travel as a form-encoded body
    Post,
}

impl HttpMethod {
    /// The method name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A fully assembled request ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Endpoint path (e.g., "/api/v1/buys")
    pub endpoint: String,
    /// Ordered request parameters
    pub params: Vec<(String, String)>,
    /// Request headers (including any authentication headers)
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Create an unauthenticated request.
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            params: Vec::new(),
            headers: Vec::new(),
        }
    }

    /// Attach ordered parameters.
    pub fn with_params(mut self, params: &[(&str, &str)]) -> Self {
        self.params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self
    }

    /// The form/query encoding of the parameters.
    pub fn query_string(&self) -> String {
        build_query_string(&self.params)
    }

    /// Look up a parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a header by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// An ephemeral signed request.
///
/// Constructed fresh per call and never persisted or reused; replay
/// protection depends on this.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// The request to execute, with signature material already applied
    pub request: HttpRequest,
    /// The nonce consumed by this request
    pub nonce: u64,
    /// The computed signature digest (hex or base64, as the venue dictates)
    pub signature: String,
    /// The API key identifying the account
    pub api_key: String,
}

/// Trait for venue-specific request signing.
pub trait RequestSigner: Send + Sync {
    /// Sign a request.
    ///
    /// Computes a keyed digest over the canonical encoding of the ordered
    /// parameters, the nonce, and the endpoint identity, and returns a
    /// [`SignedRequest`] with the signature applied wherever this venue
    /// expects it.
    fn sign(
        &self,
        method: HttpMethod,
        endpoint: &str,
        params: &[(String, String)],
        nonce: u64,
    ) -> SignedRequest;

    /// Returns the API key value.
    fn api_key(&self) -> &str;
}

/// Build a query string from ordered parameters.
///
/// This is also the canonical string-to-sign encoding of the parameters.
pub fn build_query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockSigner {
        api_key: String,
    }

    impl RequestSigner for MockSigner {
        fn sign(
            &self,
            method: HttpMethod,
            endpoint: &str,
            params: &[(String, String)],
            nonce: u64,
        ) -> SignedRequest {
            let mut request = HttpRequest::new(method, endpoint);
            request.params = params.to_vec();
            request
                .headers
                .push(("X-SIGNATURE".to_string(), "mock_signature".to_string()));
            SignedRequest {
                request,
                nonce,
                signature: "mock_signature".to_string(),
                api_key: self.api_key.clone(),
            }
        }

        fn api_key(&self) -> &str {
            &self.api_key
        }
    }

    #[test]
    fn test_build_query_string() {
        let params = vec![
            ("qty".to_string(), "1.5".to_string()),
            ("page".to_string(), "1".to_string()),
        ];
        assert_eq!(build_query_string(&params), "qty=1.5&page=1");
        assert_eq!(build_query_string(&[]), "");
    }

    #[test]
    fn test_http_request_accessors() {
        let request =
            HttpRequest::new(HttpMethod::Get, "/api/v1/transfers").with_params(&[("page", "2")]);

        assert_eq!(request.method.as_str(), "GET");
        assert_eq!(request.param("page"), Some("2"));
        assert_eq!(request.param("limit"), None);
        assert_eq!(request.query_string(), "page=2");
    }

    #[test]
    fn test_mock_signer() {
        let signer = MockSigner {
            api_key: "test_key".to_string(),
        };

        let params = vec![("qty".to_string(), "1.5".to_string())];
        let signed = signer.sign(HttpMethod::Post, "/api/v1/buys", &params, 42);

        assert_eq!(signed.nonce, 42);
        assert_eq!(signed.api_key, "test_key");
        assert_eq!(signed.request.header("X-SIGNATURE"), Some("mock_signature"));
    }
}
