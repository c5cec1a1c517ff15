//! Venue error types with classification for caller-side retry decisions.
//!
//! All errors are typed so callers can branch on kind. The propagation
//! policy is fail fast with no local masking: unparseable financial data is
//! never silently replaced by a default value.

use thiserror::Error;

use crate::error::{ErrorCategory, ErrorClassification};

/// Result type for venue operations.
pub type VenueResult<T> = Result<T, VenueError>;

/// Errors that can occur during venue operations.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum VenueError {
    /// A currency or pair outside the venue's declared set was referenced,
    /// either by the caller or by wire data. Surfaced immediately, including
    /// at service construction time.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// The response shape violates the expected wire contract. Indicates an
    /// upstream contract change; the offending payload is carried for
    /// diagnosis.
    #[error("Malformed market data: {reason}; payload: {payload}")]
    MalformedMarketData {
        /// What about the shape was wrong
        reason: String,
        /// The offending raw payload
        payload: String,
    },

    /// Network or transport-level failure from the transport collaborator.
    /// Retry policy is the caller's responsibility.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The venue's application layer explicitly rejected the request
    /// (insufficient funds, invalid parameters, auth failure). Distinct from
    /// [`VenueError::Transport`]: the network worked, the venue refused.
    /// Never retried automatically for mutating operations.
    #[error("Rejected by venue: {message}")]
    Rejected {
        /// Venue-specific error code, if the venue uses numeric codes
        code: Option<i32>,
        /// Venue-supplied error message
        message: String,
    },

    /// Missing or invalid client configuration (credentials, base URL).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A transport-success response could not be decoded into the expected
    /// typed representation.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl VenueError {
    /// Create a malformed-market-data error carrying the offending payload.
    pub fn malformed(reason: impl Into<String>, payload: &serde_json::Value) -> Self {
        Self::MalformedMarketData {
            reason: reason.into(),
            payload: payload.to_string(),
        }
    }

    /// Create a rejection without a numeric code.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            code: None,
            message: message.into(),
        }
    }

    /// Create a rejection with a venue error code.
    pub fn rejected_with_code(code: i32, message: impl Into<String>) -> Self {
        Self::Rejected {
            code: Some(code),
            message: message.into(),
        }
    }

    /// Returns the venue error code if available.
    pub fn error_code(&self) -> Option<i32> {
        match self {
            VenueError::Rejected { code, .. } => *code,
            _ => None,
        }
    }

    /// Returns true if the venue's application layer rejected the request.
    pub fn is_rejection(&self) -> bool {
        matches!(self, VenueError::Rejected { .. })
    }
}

impl ErrorClassification for VenueError {
    fn category(&self) -> ErrorCategory {
        match self {
            VenueError::UnsupportedCurrency(_) => ErrorCategory::Permanent,
            VenueError::MalformedMarketData { .. } => ErrorCategory::Permanent,
            VenueError::Transport(_) => ErrorCategory::Transient,
            VenueError::Rejected { .. } => ErrorCategory::Permanent,
            VenueError::Configuration(_) => ErrorCategory::Configuration,
            VenueError::Parse(_) => ErrorCategory::Permanent,
        }
    }
}
