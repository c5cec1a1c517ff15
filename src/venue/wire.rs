//! Generic decoder for the irregular market-info wire shape.
//!
//! Several venues publish trading metadata as a top-level object containing
//! a named array field where each element is an object with exactly one key:
//! the native pair token, mapping to a nested object of metadata fields.
//!
//! ```json
//! {"pairs": [
//!   {"btc_eur": {"decimal_places": 2, "min_amount": "0.01", "fee": "0.002"}},
//!   {"ltc_eur": {"decimal_places": 4, "min_amount": "0.1",  "fee": "0.002"}}
//! ]}
//! ```
//!
//! Amounts and fees arrive as decimal strings and are parsed exactly; a bare
//! JSON number is rejected rather than routed through binary floating point.
//!
//! Decoding is all-or-nothing: any failure aborts the whole decode and no
//! partial set is returned.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::model::{MarketInfo, MarketInfoSet};

use super::error::{VenueError, VenueResult};
use super::symbology::SymbolAdapter;

/// Decode a market-info response into a [`MarketInfoSet`].
///
/// `array_field` names the array on the root object (commonly `"pairs"`).
///
/// Rules:
/// - a missing or non-array field is [`VenueError::MalformedMarketData`];
/// - each element must be an object with exactly one key (the pair token);
///   zero keys or two-or-more keys is malformed, never skipped silently;
/// - the token goes through the venue's [`SymbolAdapter`]; adapter failure
///   propagates as [`VenueError::UnsupportedCurrency`];
/// - a pair token appearing twice is not an error: the later occurrence
///   overwrites the earlier one.
pub fn decode_market_info(
    adapter: &dyn SymbolAdapter,
    root: &Value,
    array_field: &str,
) -> VenueResult<MarketInfoSet> {
    let elements = root
        .get(array_field)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            VenueError::malformed(format!("missing or non-array field '{}'", array_field), root)
        })?;

    let mut entries = Vec::with_capacity(elements.len());
    for element in elements {
        let entry = element
            .as_object()
            .ok_or_else(|| VenueError::malformed("array element is not an object", element))?;

        // Exactly one key: the native pair token. An empty object is not
        // "no data", it is a contract violation.
        if entry.len() != 1 {
            return Err(VenueError::malformed(
                format!("expected exactly one pair token per element, found {}", entry.len()),
                element,
            ));
        }
        let (token, details) = entry.iter().next().expect("len checked above");

        let pair = adapter.to_canonical(token)?;
        let details = details.as_object().ok_or_else(|| {
            VenueError::malformed(format!("metadata for '{}' is not an object", token), element)
        })?;

        let decimal_places = details
            .get("decimal_places")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                VenueError::malformed(
                    format!("'{}' has no integer decimal_places", token),
                    element,
                )
            })?;
        let min_amount = decimal_field(details, "min_amount", token, element)?;
        let fee = decimal_field(details, "fee", token, element)?;

        entries.push(MarketInfo {
            pair,
            decimal_places,
            min_amount,
            fee,
        });
    }

    Ok(MarketInfoSet::from_entries(entries))
}

/// Parse a decimal string field exactly.
fn decimal_field(
    details: &serde_json::Map<String, Value>,
    field: &str,
    token: &str,
    element: &Value,
) -> VenueResult<Decimal> {
    let raw = details
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            VenueError::malformed(
                format!("'{}' has no decimal string '{}'", token, field),
                element,
            )
        })?;

    raw.parse::<Decimal>().map_err(|e| {
        VenueError::malformed(
            format!("'{}' field '{}' is not a decimal: {}", token, field, e),
            element,
        )
    })
}
