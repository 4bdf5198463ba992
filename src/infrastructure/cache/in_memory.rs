//! # In-Memory Offer Cache
//!
//! Process-local cache backed by a concurrent map. Expired entries are
//! evicted lazily on read.

use super::traits::{CacheResult, OfferCache};
use crate::domain::entities::BestFlightOffers;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry {
    offers: BestFlightOffers,
    expires_at: Instant,
}

/// In-memory cache with per-entry expiry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOfferCache {
    entries: Arc<DashMap<String, Entry>>,
}

impl InMemoryOfferCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, including expired ones not yet evicted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl OfferCache for InMemoryOfferCache {
    async fn get(&self, key: &str) -> CacheResult<Option<BestFlightOffers>> {
        let now = Instant::now();
        if let Some(entry) = self.entries.get(key) {
            if now < entry.expires_at {
                return Ok(Some(entry.offers.clone()));
            }
        } else {
            return Ok(None);
        }

        self.entries.remove_if(key, |_, entry| entry.expires_at <= now);
        Ok(None)
    }

    async fn set(&self, key: &str, offers: &BestFlightOffers, ttl: Duration) -> CacheResult<()> {
        self.entries.insert(
            key.to_string(),
            Entry {
                offers: offers.clone(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_stored_entry() {
        let cache = InMemoryOfferCache::new();
        let offers = BestFlightOffers::default();
        cache.set("k", &offers, Duration::from_secs(30)).await.unwrap();

        assert_eq!(cache.get("k").await.unwrap(), Some(offers));
        assert_eq!(cache.get("other").await.unwrap(), None);
    }

    #[tokio::test]
    async fn expired_entry_is_evicted() {
        let cache = InMemoryOfferCache::new();
        cache
            .set("k", &BestFlightOffers::default(), Duration::from_millis(10))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;

        assert_eq!(cache.get("k").await.unwrap(), None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn set_overwrites() {
        let cache = InMemoryOfferCache::new();
        cache
            .set("k", &BestFlightOffers::default(), Duration::from_millis(1))
            .await
            .unwrap();
        cache
            .set("k", &BestFlightOffers::default(), Duration::from_secs(30))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(cache.get("k").await.unwrap().is_some());
        assert_eq!(cache.len(), 1);
    }
}
