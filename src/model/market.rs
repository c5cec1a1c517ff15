//! Per-pair trading metadata and the decoded market-info snapshot.

use std::collections::{hash_map, HashMap};

use rust_decimal::Decimal;

use super::CurrencyPair;

/// Trading metadata for one currency pair.
///
/// Money fields are exact decimals; binary floating point is never used
/// because fees and amounts are compared and summed in financial contexts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketInfo {
    /// The pair this metadata applies to
    pub pair: CurrencyPair,
    /// Price decimal precision
    pub decimal_places: u32,
    /// Minimum order amount
    pub min_amount: Decimal,
    /// Trading fee, typically a fraction (0.002 = 0.2%)
    pub fee: Decimal,
}

/// An immutable mapping from [`CurrencyPair`] to [`MarketInfo`].
///
/// Built atomically by one decode pass; a fresh set is produced on every
/// poll rather than mutated in place. Decoding either yields a complete
/// set or fails, never a partial one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketInfoSet {
    map: HashMap<CurrencyPair, MarketInfo>,
}

impl MarketInfoSet {
    /// Build a set from decoded entries.
    ///
    /// If the same pair appears more than once the later occurrence wins;
    /// source venues are not guaranteed unique tokens per poll.
    pub fn from_entries(entries: impl IntoIterator<Item = MarketInfo>) -> Self {
        let mut map = HashMap::new();
        for info in entries {
            map.insert(info.pair.clone(), info);
        }
        Self { map }
    }

    /// Look up the metadata for a pair.
    pub fn get(&self, pair: &CurrencyPair) -> Option<&MarketInfo> {
        self.map.get(pair)
    }

    /// True if the pair is present.
    pub fn contains(&self, pair: &CurrencyPair) -> bool {
        self.map.contains_key(pair)
    }

    /// Number of pairs in the snapshot.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if the snapshot has no pairs.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over the pairs in the snapshot.
    pub fn pairs(&self) -> impl Iterator<Item = &CurrencyPair> {
        self.map.keys()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> hash_map::Iter<'_, CurrencyPair, MarketInfo> {
        self.map.iter()
    }
}

impl IntoIterator for MarketInfoSet {
    type Item = (CurrencyPair, MarketInfo);
    type IntoIter = hash_map::IntoIter<CurrencyPair, MarketInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}
