// venue-client: Normalized market-data and trading client for cryptocurrency venues
//
// Each venue speaks its own REST dialect, JSON shape, authentication scheme,
// and pair-naming convention; this crate converges them on one canonical
// domain model (currency pairs, market metadata, transfers).

pub mod error;
pub mod logging;
pub mod model;
pub mod venue;
