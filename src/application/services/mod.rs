//! # Application Services
//!
//! - [`FlightAggregationEngine`]: concurrent vendor search, ranking, caching
//! - [`RankingStrategy`]: orderings applied by the [`RankingBuilder`]
//! - [`LiveUpdates`]: periodic re-aggregation feed

pub mod flight_aggregation;
pub mod live_updates;
pub mod ranking_strategy;

pub use flight_aggregation::{AggregationConfig, FlightAggregationEngine, VendorPolicy};
pub use live_updates::{LiveUpdate, LiveUpdates};
pub use ranking_strategy::{CheapestFirst, FastestFirst, RankingBuilder, RankingStrategy};
