//! Coinbase REST endpoint paths.

/// Purchase Bitcoin using the primary linked account.
pub const BUYS: &str = "/api/v1/buys";

/// Sell Bitcoin, crediting the primary linked account.
pub const SELLS: &str = "/api/v1/sells";

/// Paged list of the account's purchases and sells.
pub const TRANSFERS: &str = "/api/v1/transfers";
