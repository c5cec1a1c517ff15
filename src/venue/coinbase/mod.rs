//! Coinbase venue implementation.
//!
//! Coinbase exposes authenticated buy/sell/transfer operations. Requests are
//! signed with HMAC-SHA256 over nonce + URL + body, with the signature and
//! nonce carried in `ACCESS_*` headers. Application-level rejections arrive
//! inside a transport-success response as a `success: false` envelope with
//! an `errors` list.

pub mod endpoints;

mod signer;
mod trade;
mod types;

pub use signer::CoinbaseHmacSigner;
pub use trade::{CoinbaseTradeService, DEFAULT_TRANSFER_LIMIT, DEFAULT_TRANSFER_PAGE};
pub use types::{
    CoinbaseFees, CoinbaseMoney, CoinbaseTransfer, CoinbaseTransferStatus, CoinbaseTransferType,
    CoinbaseTransfers,
};
