//! # Flight Aggregation Engine
//!
//! Orchestrates concurrent vendor searches, ranking, and caching.
//!
//! This module provides the [`FlightAggregationEngine`], which checks the
//! offer cache, fans a search out to every registered vendor on its own task,
//! merges the normalized offers in registration order, ranks them with a
//! [`RankingBuilder`], and stores the result for a short time.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::ranking_strategy::RankingBuilder;
use crate::domain::entities::{BestFlightOffers, FlightOffer, SearchRequest};
use crate::domain::value_objects::VendorId;
use crate::infrastructure::cache::OfferCache;
use crate::infrastructure::vendors::error::VendorResult;
use crate::infrastructure::vendors::traits::FlightVendor;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Default lifetime of a cached ranking.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30);

/// How vendor failures affect a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorPolicy {
    /// Any vendor failure fails the search.
    #[default]
    #[serde(alias = "require_all")]
    RequireAllVendors,
    /// Failed vendors are skipped; the search fails only if all fail.
    #[serde(alias = "best_effort")]
    BestEffortVendors,
}

/// Configuration for flight aggregation.
#[derive(Debug, Clone)]
pub struct AggregationConfig {
    /// Lifetime of cached rankings.
    pub cache_ttl: Duration,
    /// Vendor failure policy.
    pub policy: VendorPolicy,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            policy: VendorPolicy::default(),
        }
    }
}

impl AggregationConfig {
    /// Sets the cache lifetime.
    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Sets the vendor failure policy.
    #[must_use]
    pub fn with_policy(mut self, policy: VendorPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Registration index, vendor, and result of one vendor task.
type VendorOutcome = (usize, VendorId, VendorResult<Vec<FlightOffer>>);

/// Engine for collecting and ranking offers from multiple vendors.
#[derive(Debug)]
pub struct FlightAggregationEngine {
    vendors: Vec<Arc<dyn FlightVendor>>,
    cache: Arc<dyn OfferCache>,
    ranking: RankingBuilder,
    config: AggregationConfig,
}

impl FlightAggregationEngine {
    /// Creates a new engine.
    #[must_use]
    pub fn new(
        vendors: Vec<Arc<dyn FlightVendor>>,
        cache: Arc<dyn OfferCache>,
        config: AggregationConfig,
    ) -> Self {
        Self {
            vendors,
            cache,
            ranking: RankingBuilder::default(),
            config,
        }
    }

    /// Creates a new engine with default configuration.
    #[must_use]
    pub fn with_defaults(vendors: Vec<Arc<dyn FlightVendor>>, cache: Arc<dyn OfferCache>) -> Self {
        Self::new(vendors, cache, AggregationConfig::default())
    }

    /// Replaces the ranking builder.
    #[must_use]
    pub fn with_ranking(mut self, ranking: RankingBuilder) -> Self {
        self.ranking = ranking;
        self
    }

    /// Returns the best offers for a search.
    ///
    /// A cached ranking for the same search is returned without contacting
    /// any vendor. Cache failures are logged and treated as a miss.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No vendors are registered
    /// - A vendor fails under [`VendorPolicy::RequireAllVendors`]
    /// - Every vendor fails under [`VendorPolicy::BestEffortVendors`]
    ///
    /// Nothing is cached when an error is returned.
    pub async fn aggregate(&self, request: &SearchRequest) -> ApplicationResult<BestFlightOffers> {
        if self.vendors.is_empty() {
            return Err(ApplicationError::NoVendorsConfigured);
        }

        let key = request.cache_key();
        match self.cache.get(&key).await {
            Ok(Some(cached)) => {
                tracing::info!(%request, offers = cached.len(), "serving cached offers");
                return Ok(cached);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(%request, error = %e, "offer cache read failed"),
        }

        let offers = self.collect_from_vendors(request).await?;
        let best = self.ranking.build(offers);

        if let Err(e) = self.cache.set(&key, &best, self.config.cache_ttl).await {
            tracing::warn!(%request, error = %e, "offer cache write failed");
        }

        tracing::info!(
            %request,
            vendors = self.vendors.len(),
            offers = best.len(),
            "aggregated flight offers"
        );
        Ok(best)
    }

    /// Runs every vendor on its own task and merges the results in
    /// registration order.
    async fn collect_from_vendors(
        &self,
        request: &SearchRequest,
    ) -> ApplicationResult<Vec<FlightOffer>> {
        let mut tasks: JoinSet<VendorOutcome> = JoinSet::new();

        for (index, vendor) in self.vendors.iter().enumerate() {
            let vendor = Arc::clone(vendor);
            let request = request.clone();
            tasks.spawn(async move {
                let result = vendor.search_offers(&request).await;
                (index, vendor.source().clone(), result)
            });
        }

        let mut slots: Vec<Option<Vec<FlightOffer>>> = vec![None; self.vendors.len()];
        let mut failures = Vec::new();

        while let Some(joined) = tasks.join_next().await {
            let failure = match joined {
                Ok((index, _, Ok(offers))) => {
                    if let Some(slot) = slots.get_mut(index) {
                        *slot = Some(offers);
                    }
                    continue;
                }
                Ok((_, vendor, Err(source))) => ApplicationError::vendor(vendor, source),
                Err(e) => ApplicationError::internal(format!("vendor task failed: {e}")),
            };

            match self.config.policy {
                VendorPolicy::RequireAllVendors => {
                    tasks.abort_all();
                    tracing::warn!(error = %failure, "vendor failed, aborting search");
                    return Err(failure);
                }
                VendorPolicy::BestEffortVendors => {
                    tracing::warn!(error = %failure, "vendor failed, continuing without it");
                    failures.push(failure.to_string());
                }
            }
        }

        if failures.len() == self.vendors.len() {
            return Err(ApplicationError::AllVendorsFailed(failures));
        }

        Ok(slots.into_iter().flatten().flatten().collect())
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Returns the number of registered vendors.
    #[must_use]
    pub fn vendor_count(&self) -> usize {
        self.vendors.len()
    }
}
