//! Strictly increasing nonce generation for authenticated calls.
//!
//! Venues reject replayed requests by requiring every signed call to carry a
//! nonce strictly greater than the last one they saw. The generator is the
//! only shared mutable state an authenticated client holds; it is an owned
//! counter with an atomic increment, never a hidden global.
//!
//! A nonce consumed by a call that later fails is burned, never reused.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Process-lifetime strictly increasing counter.
///
/// Seeded from wall-clock time so that nonces keep increasing across process
/// restarts with high probability; monotonicity within one instance is the
/// only hard guarantee venues actually require.
#[derive(Debug)]
pub struct NonceGenerator {
    counter: AtomicU64,
}

impl NonceGenerator {
    /// Create a generator seeded from microseconds since epoch.
    ///
    /// Microseconds give the best restart-collision resistance for venues
    /// that accept large nonces.
    pub fn from_epoch_micros() -> Self {
        Self::starting_after(epoch_duration().as_micros() as u64)
    }

    /// Create a generator seeded from milliseconds since epoch, for venues
    /// that bound the nonce to millisecond timestamps.
    pub fn from_epoch_millis() -> Self {
        Self::starting_after(epoch_duration().as_millis() as u64)
    }

    /// Create a generator whose first nonce will be `seed + 1`.
    pub fn starting_after(seed: u64) -> Self {
        Self {
            counter: AtomicU64::new(seed),
        }
    }

    /// Return the next nonce, strictly greater than every previously
    /// returned value for the lifetime of this generator, even under
    /// concurrent callers.
    pub fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Default for NonceGenerator {
    fn default() -> Self {
        Self::from_epoch_micros()
    }
}

fn epoch_duration() -> std::time::Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}
