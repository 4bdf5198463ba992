//! # Redis Offer Cache
//!
//! Stores rankings as JSON strings under `flights:best:<search key>` with a
//! server-side expiry (`SET key value EX ttl`).

use super::traits::{CacheError, CacheResult, OfferCache};
use crate::domain::entities::BestFlightOffers;
use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use std::fmt;
use std::time::Duration;

/// Prefix applied to every key.
pub const KEY_PREFIX: &str = "flights:best:";

/// Redis-backed cache.
#[derive(Clone)]
pub struct RedisOfferCache {
    connection: ConnectionManager,
}

impl fmt::Debug for RedisOfferCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisOfferCache").finish_non_exhaustive()
    }
}

impl RedisOfferCache {
    /// Connects to Redis.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Backend`] if the URL is invalid or the server
    /// cannot be reached.
    pub async fn connect(url: &str) -> CacheResult<Self> {
        let client = redis::Client::open(url).map_err(redis_error)?;
        let connection = ConnectionManager::new(client).await.map_err(redis_error)?;
        tracing::info!("connected to redis offer cache");
        Ok(Self { connection })
    }

    /// Namespaced key for a search key.
    #[must_use]
    pub fn namespaced(key: &str) -> String {
        format!("{KEY_PREFIX}{key}")
    }
}

fn redis_error(err: redis::RedisError) -> CacheError {
    CacheError::backend(err.to_string())
}

#[async_trait]
impl OfferCache for RedisOfferCache {
    async fn get(&self, key: &str) -> CacheResult<Option<BestFlightOffers>> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(Self::namespaced(key)).await.map_err(redis_error)?;
        value
            .map(|json| serde_json::from_str(&json).map_err(CacheError::from))
            .transpose()
    }

    async fn set(&self, key: &str, offers: &BestFlightOffers, ttl: Duration) -> CacheResult<()> {
        let json = serde_json::to_string(offers)?;
        let seconds = ttl.as_secs().max(1);
        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(Self::namespaced(key), json, seconds)
            .await
            .map_err(redis_error)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_prefixed() {
        assert_eq!(
            RedisOfferCache::namespaced("adults=1&date=2025-05-09&destination=BKK&origin=SYD"),
            "flights:best:adults=1&date=2025-05-09&destination=BKK&origin=SYD"
        );
    }

    #[tokio::test]
    async fn invalid_url_is_backend_error() {
        let err = RedisOfferCache::connect("not a url").await.unwrap_err();
        assert!(matches!(err, CacheError::Backend(_)));
    }
}
