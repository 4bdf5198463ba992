//! Cache port and its error type.

use crate::domain::entities::BestFlightOffers;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Cache failure. Never fatal to a search; the engine logs it and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// Backend unreachable or command failed.
    #[error("cache backend error: {0}")]
    Backend(String),

    /// Stored value could not be encoded or decoded.
    #[error("cache serialization error: {0}")]
    Serialization(String),
}

impl CacheError {
    /// Creates a backend error.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Store for built rankings.
#[async_trait]
pub trait OfferCache: Send + Sync + fmt::Debug {
    /// Returns the entry for `key` if present and not expired.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend fails or the entry is corrupt.
    async fn get(&self, key: &str) -> CacheResult<Option<BestFlightOffers>>;

    /// Stores an entry that expires after `ttl`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend fails.
    async fn set(&self, key: &str, offers: &BestFlightOffers, ttl: Duration) -> CacheResult<()>;
}
