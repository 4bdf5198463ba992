//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)                 - invalid search input
//! ├── Vendor { vendor, source }           - one vendor pipeline failed
//! ├── AllVendorsFailed(Vec<String>)       - best effort, nothing succeeded
//! ├── NoVendorsConfigured                 - empty vendor registry
//! ├── Infrastructure(InfrastructureError) - cache or configuration setup
//! └── Internal(String)                    - vendor task panicked
//! ```
//!
//! # Examples
//!
//! ```
//! use flight_offers::application::error::ApplicationError;
//! use flight_offers::domain::DomainError;
//!
//! let err: ApplicationError = DomainError::invalid_passenger_count("0").into();
//! assert!(err.is_client_error());
//! ```

use crate::domain::errors::DomainError;
use crate::domain::value_objects::VendorId;
use crate::infrastructure::cache::CacheError;
use crate::infrastructure::vendors::error::VendorError;
use thiserror::Error;

/// Infrastructure setup error.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Cache backend could not be created.
    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl InfrastructureError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

impl From<config::ConfigError> for InfrastructureError {
    fn from(err: config::ConfigError) -> Self {
        Self::configuration(err.to_string())
    }
}

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Search input rejected before any vendor call.
    #[error("invalid request: {0}")]
    Domain(#[from] DomainError),

    /// A vendor pipeline failed.
    #[error("vendor {vendor} failed: {source}")]
    Vendor {
        /// Failing vendor.
        vendor: VendorId,
        /// Underlying error.
        #[source]
        source: VendorError,
    },

    /// Every vendor failed under the best-effort policy.
    #[error("all vendors failed: {}", .0.join("; "))]
    AllVendorsFailed(Vec<String>),

    /// No vendor is registered.
    #[error("no flight vendors configured")]
    NoVendorsConfigured,

    /// Infrastructure setup failure.
    #[error("infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates a vendor error.
    #[must_use]
    pub fn vendor(vendor: VendorId, source: VendorError) -> Self {
        Self::Vendor { vendor, source }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if the caller's input caused the failure.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    /// Returns true if a vendor caused the failure.
    #[must_use]
    pub fn is_vendor_error(&self) -> bool {
        matches!(self, Self::Vendor { .. } | Self::AllVendorsFailed(_))
    }

    /// Returns the underlying vendor error, if any.
    #[must_use]
    pub fn vendor_error(&self) -> Option<&VendorError> {
        match self {
            Self::Vendor { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_client_errors() {
        let err: ApplicationError = DomainError::invalid_passenger_count("0").into();
        assert!(err.is_client_error());
        assert!(!err.is_vendor_error());
    }

    #[test]
    fn vendor_error_names_vendor() {
        let err = ApplicationError::vendor(VendorId::new("flights_sky"), VendorError::status(502, "bad gateway"));
        assert!(err.is_vendor_error());
        assert!(!err.is_client_error());
        assert!(err.to_string().contains("flights_sky"));
        assert_eq!(err.vendor_error().and_then(VendorError::http_status), Some(502));
    }

    #[test]
    fn all_vendors_failed_lists_reasons() {
        let err = ApplicationError::AllVendorsFailed(vec!["a: timeout".into(), "b: 500".into()]);
        assert_eq!(err.to_string(), "all vendors failed: a: timeout; b: 500");
    }

    #[test]
    fn cache_errors_convert() {
        let err: ApplicationError = InfrastructureError::from(CacheError::backend("down")).into();
        assert!(matches!(err, ApplicationError::Infrastructure(InfrastructureError::Cache(_))));
    }
}
