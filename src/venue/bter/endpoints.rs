//! BTER REST endpoint paths.

/// Trading metadata for every listed pair.
pub const MARKET_INFO: &str = "/api/1/marketinfo";
