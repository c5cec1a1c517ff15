//! Canonical domain model shared by all venue adapters.
//!
//! Venues disagree about currency codes and pair spellings; everything in
//! this module is venue-agnostic. Adapters create these values from raw
//! venue strings and never expose the raw wire format to callers.

mod currency;
mod market;

pub use currency::{Currency, CurrencyPair};
pub use market::{MarketInfo, MarketInfoSet};
