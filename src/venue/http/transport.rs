//! The transport seam between venue services and the network.
//!
//! Services never talk to the network directly; they hand an assembled
//! [`HttpRequest`] to a [`Transport`] and get back a raw JSON tree or a
//! [`VenueError::Transport`]. This keeps every service testable against a
//! stub transport and keeps retry/timeout policy out of this layer.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;

use crate::venue::config::RestConfig;
use crate::venue::error::{VenueError, VenueResult};

use super::signer::{HttpMethod, HttpRequest};

/// Executes assembled requests against a venue.
///
/// A response carrying a JSON body is returned as a tree even when the HTTP
/// status is not a success: whether a venue reports application-level
/// rejections with a 200 envelope or with an error status is
/// venue-specific, so the transport never swallows bodies. Only
/// network-level failures and unparseable error responses become
/// [`VenueError::Transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request and return the parsed JSON response.
    async fn execute(&self, request: &HttpRequest) -> VenueResult<Value>;
}

/// Default [`Transport`] backed by reqwest.
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Create a transport for the given base URL.
    pub fn new(base_url: impl Into<String>, config: &RestConfig) -> VenueResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/x-www-form-urlencoded"),
        );

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| {
                VenueError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a transport from a REST configuration.
    pub fn from_config(config: &RestConfig) -> VenueResult<Self> {
        if config.base_url.is_empty() {
            return Err(VenueError::Configuration(
                "REST base_url is not set".to_string(),
            ));
        }
        Self::new(config.base_url.clone(), config)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_headers(&self, request: &HttpRequest) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        for (name, value) in &request.headers {
            if let (Ok(name), Ok(value)) = (
                header::HeaderName::from_bytes(name.as_bytes()),
                header::HeaderValue::from_str(value),
            ) {
                headers.insert(name, value);
            }
        }
        headers
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &HttpRequest) -> VenueResult<Value> {
        let headers = self.build_headers(request);

        let response = match request.method {
            HttpMethod::Get => {
                let mut url = format!("{}{}", self.base_url, request.endpoint);
                let query = request.query_string();
                if !query.is_empty() {
                    url = format!("{}?{}", url, query);
                }
                self.client.get(&url).headers(headers).send().await
            }
            HttpMethod::Post => {
                let url = format!("{}{}", self.base_url, request.endpoint);
                self.client
                    .post(&url)
                    .headers(headers)
                    .body(request.query_string())
                    .send()
                    .await
            }
        }
        .map_err(|e| VenueError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| VenueError::Transport(format!("Failed to read response: {}", e)))?;

        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Ok(value),
            Err(e) if status.is_success() => {
                Err(VenueError::Parse(format!("Non-JSON response: {}", e)))
            }
            Err(_) => Err(VenueError::Transport(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            ))),
        }
    }
}
