//! Coinbase API response types.
//!
//! Money amounts arrive as decimal strings and deserialize into exact
//! decimals. The raw envelope is never exposed to callers; services unwrap
//! it and hand out these typed records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::model::Currency;

/// A money amount with its currency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoinbaseMoney {
    /// Exact decimal amount
    pub amount: Decimal,
    /// Currency of the amount
    pub currency: Currency,
}

/// Direction of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CoinbaseTransferType {
    /// Bitcoin purchase
    Buy,
    /// Bitcoin sale
    Sell,
}

/// Lifecycle status of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CoinbaseTransferStatus {
    /// Transfer created but not yet processed
    Created,
    /// Transfer pending payout
    Pending,
    /// Transfer completed
    Completed,
    /// Transfer canceled
    Canceled,
    /// Transfer reversed
    Reversed,
}

/// Fee charged in integral cents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoinbaseCentsFee {
    /// Fee amount in cents
    pub cents: i64,
    /// Currency of the fee
    pub currency_iso: Currency,
}

/// Fees attached to a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoinbaseFees {
    /// Coinbase's own fee
    pub coinbase: Option<CoinbaseCentsFee>,
    /// Bank processing fee
    pub bank: Option<CoinbaseCentsFee>,
}

/// An executed or in-flight buy/sell transfer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoinbaseTransfer {
    /// Buy or Sell
    #[serde(rename = "type")]
    pub transfer_type: CoinbaseTransferType,
    /// Venue-assigned transfer code
    pub code: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Fees charged for the transfer
    pub fees: Option<CoinbaseFees>,
    /// Expected payout date
    pub payout_date: Option<DateTime<Utc>>,
    /// Associated transaction id
    pub transaction_id: Option<String>,
    /// Current status
    pub status: CoinbaseTransferStatus,
    /// Bitcoin amount
    pub btc: CoinbaseMoney,
    /// Fiat subtotal before fees
    pub subtotal: CoinbaseMoney,
    /// Fiat total including fees
    pub total: CoinbaseMoney,
    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,
}

/// A page of transfers, sorted by the venue in descending creation order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoinbaseTransfers {
    /// The transfers on this page
    #[serde(deserialize_with = "unwrap_transfer_list")]
    pub transfers: Vec<CoinbaseTransfer>,
    /// Total transfers across all pages
    pub total_count: u32,
    /// Total number of pages
    pub num_pages: u32,
    /// The page this response covers
    pub current_page: u32,
}

// Each list element is wrapped in a one-field {"transfer": {...}} object.
fn unwrap_transfer_list<'de, D>(deserializer: D) -> Result<Vec<CoinbaseTransfer>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct TransferEnvelope {
        transfer: CoinbaseTransfer,
    }

    let wrapped = Vec::<TransferEnvelope>::deserialize(deserializer)?;
    Ok(wrapped.into_iter().map(|w| w.transfer).collect())
}
