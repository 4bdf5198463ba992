//! Cache that stores nothing.

use super::traits::{CacheResult, OfferCache};
use crate::domain::entities::BestFlightOffers;
use async_trait::async_trait;
use std::time::Duration;

/// Always misses, discards writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOfferCache;

#[async_trait]
impl OfferCache for NoopOfferCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<BestFlightOffers>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _offers: &BestFlightOffers, _ttl: Duration) -> CacheResult<()> {
        Ok(())
    }
}
