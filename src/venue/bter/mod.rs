//! BTER venue implementation.
//!
//! BTER is market-data only here: an unsigned endpoint publishing trading
//! metadata in the single-key-element array shape handled by
//! [`crate::venue::wire`].

pub mod endpoints;

mod market;
mod symbology;

pub use market::BterMarketDataService;
pub use symbology::BterSymbolAdapter;
