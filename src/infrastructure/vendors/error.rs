//! # Vendor Errors
//!
//! Error types for flight search vendor operations.
//!
//! Every variant is a hard failure for the vendor pipeline that raised it.
//! Malformed individual itineraries never surface here; normalizers drop
//! them instead.
//!
//! # Examples
//!
//! ```
//! use flight_offers::infrastructure::vendors::error::VendorError;
//!
//! let error = VendorError::timeout("request timed out after 60000ms");
//! assert!(error.is_retryable());
//!
//! let error = VendorError::status(401, "invalid client");
//! assert!(!error.is_retryable());
//! assert!(error.is_auth_failure());
//! ```

use thiserror::Error;

/// Error type for vendor client and normalizer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VendorError {
    /// Request timed out.
    #[error("vendor timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("vendor connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Vendor answered with a non-success HTTP status.
    #[error("vendor returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body as text.
        body: String,
    },

    /// Token exchange succeeded but produced no usable credential.
    #[error("vendor authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// Response body or a required field could not be parsed.
    #[error("vendor decode error: {message}")]
    Decode {
        /// Error message.
        message: String,
    },

    /// Vendor envelope reported failure despite a success status.
    #[error("vendor rejected request: {message}")]
    Rejected {
        /// Message reported by the vendor.
        message: String,
    },

    /// Internal client error (client construction, task failure).
    #[error("vendor internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl VendorError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a status error.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates a rejected error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient.
    ///
    /// Nothing in this crate retries; the classification is exposed for
    /// callers that wrap the engine with their own retry policy.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connection { .. } => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns true if the vendor refused our credentials.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        match self {
            Self::Authentication { .. } => true,
            Self::Status { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }

    /// Returns true if the response could not be understood.
    #[must_use]
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Returns the HTTP status, if the vendor answered with one.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for vendor operations.
pub type VendorResult<T> = Result<T, VendorError>;
