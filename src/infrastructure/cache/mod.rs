//! # Offer Cache
//!
//! Short-lived memoization of built rankings, keyed by search criteria.
//!
//! - [`RedisOfferCache`]: shared Redis backend
//! - [`InMemoryOfferCache`]: process-local backend for single instances and
//!   tests
//! - [`NoopOfferCache`]: caching disabled

pub mod in_memory;
pub mod noop;
pub mod redis;
pub mod traits;

pub use in_memory::InMemoryOfferCache;
pub use noop::NoopOfferCache;
pub use self::redis::RedisOfferCache;
pub use traits::{CacheError, CacheResult, OfferCache};
