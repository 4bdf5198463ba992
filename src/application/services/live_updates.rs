//! # Live Updates
//!
//! Periodic re-aggregation for subscribers that want fresh offers.
//!
//! [`LiveUpdates`] runs a search immediately and then once per interval,
//! emitting each result as a [`LiveUpdate`]. A failed search is emitted once
//! as [`LiveUpdate::Failed`] and ends the feed. The feed also ends as soon as
//! the subscriber goes away.

use crate::application::error::ApplicationResult;
use crate::application::services::flight_aggregation::FlightAggregationEngine;
use crate::domain::entities::{BestFlightOffers, SearchRequest};
use futures::{Stream, StreamExt, stream};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};

/// Default refresh interval.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

/// One message of a live feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveUpdate {
    /// Fresh rankings.
    Offers(BestFlightOffers),
    /// The search failed; no further updates follow.
    Failed {
        /// Error description.
        message: String,
    },
}

impl LiveUpdate {
    fn from_result(result: ApplicationResult<BestFlightOffers>) -> Self {
        match result {
            Ok(offers) => Self::Offers(offers),
            Err(e) => Self::Failed {
                message: e.to_string(),
            },
        }
    }

    /// Returns true for [`LiveUpdate::Failed`].
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Periodic search feed.
#[derive(Debug, Clone)]
pub struct LiveUpdates {
    engine: Arc<FlightAggregationEngine>,
    interval: Duration,
}

impl LiveUpdates {
    /// Creates a feed refreshing every `interval`.
    #[must_use]
    pub fn new(engine: Arc<FlightAggregationEngine>, interval: Duration) -> Self {
        Self { engine, interval }
    }

    /// Creates a feed with the default interval.
    #[must_use]
    pub fn with_default_interval(engine: Arc<FlightAggregationEngine>) -> Self {
        Self::new(engine, DEFAULT_INTERVAL)
    }

    /// Returns the refresh interval.
    #[inline]
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the feed as a stream.
    ///
    /// The first item is produced immediately. The stream ends after the
    /// first [`LiveUpdate::Failed`].
    pub fn stream(&self, request: SearchRequest) -> impl Stream<Item = LiveUpdate> + Send + 'static {
        let engine = Arc::clone(&self.engine);
        let period = self.interval;

        // The ticker is created on first poll so the stream can be built off-runtime.
        stream::unfold(Some((engine, request, None::<Interval>)), move |state| async move {
            let (engine, request, ticker) = state?;
            let mut ticker = ticker.unwrap_or_else(|| {
                let mut ticker = tokio::time::interval(period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                ticker
            });
            ticker.tick().await;
            let update = LiveUpdate::from_result(engine.aggregate(&request).await);
            let next = (!update.is_failed()).then_some((engine, request, Some(ticker)));
            Some((update, next))
        })
    }

    /// Pushes the feed into `updates` until the receiver is dropped or a
    /// search fails.
    pub async fn run(&self, request: SearchRequest, updates: mpsc::Sender<LiveUpdate>) {
        tracing::info!(%request, interval_secs = self.interval.as_secs(), "live updates started");
        let mut feed = std::pin::pin!(self.stream(request));

        loop {
            let update = tokio::select! {
                next = feed.next() => next,
                () = updates.closed() => None,
            };
            let Some(update) = update else {
                break;
            };
            if updates.send(update).await.is_err() {
                break;
            }
        }

        tracing::info!("live updates stopped");
    }
}
