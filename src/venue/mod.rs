//! Venue infrastructure and per-venue services.
//!
//! Shared foundations:
//!
//! - [`SymbolAdapter`]: symbol conversion between venue-native and canonical formats
//! - [`NonceGenerator`]: strictly increasing counter for authenticated calls
//! - [`wire`]: generic decoder for the irregular market-info wire shape
//! - [`http`]: request signing, transport seam, and the authenticated client
//!
//! Venue implementations:
//!
//! - [`coinbase`]: authenticated trade service (buy/sell/transfers)
//! - [`bter`]: market-info service (unsigned, adapter + wire decoder)
//! - [`bitcurex`]: market-data-only service with fail-fast currency validation
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use venue_client::venue::http::ReqwestTransport;
//! use venue_client::venue::bter::BterMarketDataService;
//!
//! let transport = Arc::new(ReqwestTransport::new("https://bter.com", &rest_config)?);
//! let service = BterMarketDataService::new(transport);
//! let markets = service.market_info().await?;
//! ```

mod config;
mod error;
mod nonce;
mod symbology;

pub mod bitcurex;
pub mod bter;
pub mod coinbase;
pub mod http;
pub mod wire;

pub use config::{AuthConfig, RestConfig, VenueConfig};
pub use error::{VenueError, VenueResult};
pub use nonce::NonceGenerator;
pub use symbology::SymbolAdapter;
