//! # Domain Errors
//!
//! Validation failures for search input and canonical values.
//!
//! These are raised before any vendor is contacted and are the only errors
//! that callers should map to a client-side status.

use thiserror::Error;

/// Error type for domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Airport code is empty or not 3-4 ASCII letters.
    #[error("invalid airport code '{code}': {reason}")]
    InvalidAirportCode {
        /// The rejected input.
        code: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Departure date is malformed or in the past.
    #[error("invalid date '{value}': {reason}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Passenger count is missing, malformed, or zero.
    #[error("invalid passenger count '{value}': must be a positive integer")]
    InvalidPassengerCount {
        /// The rejected input.
        value: String,
    },

    /// Currency code is not three ASCII letters.
    #[error("invalid currency code '{0}'")]
    InvalidCurrency(String),

    /// Monetary amount is negative.
    #[error("invalid amount {0}: must be non-negative")]
    NegativeAmount(String),

    /// Generic validation failure.
    #[error("validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates an airport code error.
    #[must_use]
    pub fn invalid_airport_code(code: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidAirportCode {
            code: code.into(),
            reason,
        }
    }

    /// Creates a date error.
    #[must_use]
    pub fn invalid_date(value: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidDate {
            value: value.into(),
            reason,
        }
    }

    /// Creates a passenger count error.
    #[must_use]
    pub fn invalid_passenger_count(value: impl Into<String>) -> Self {
        Self::InvalidPassengerCount {
            value: value.into(),
        }
    }

    /// Creates a generic validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
