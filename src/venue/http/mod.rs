//! HTTP infrastructure for venue clients.
//!
//! This module provides venue-agnostic components for the authenticated
//! request path:
//!
//! - [`RequestSigner`]: trait for deterministic request signing
//! - [`Transport`]: the external request-executor seam ([`ReqwestTransport`]
//!   is the default implementation)
//! - [`HttpClient`]: per-call orchestration (build, sign, send, decode)
//!
//! # Example
//!
//! ```ignore
//! use venue_client::venue::http::{HttpClient, ReqwestTransport};
//!
//! let transport = Arc::new(ReqwestTransport::new("https://coinbase.com", &rest_config)?);
//! let client = HttpClient::new_signed(transport, Arc::new(my_signer));
//!
//! let raw = client.post_signed_raw("/api/v1/buys", &[("qty", "1.5")]).await?;
//! ```

mod client;
mod signer;
mod transport;

pub use client::HttpClient;
pub(crate) use client::from_value;
pub use signer::{build_query_string, HttpMethod, HttpRequest, RequestSigner, SignedRequest};
pub use transport::{ReqwestTransport, Transport};
