//! # Flight Offers
//!
//! Concurrent flight offer aggregation across multiple search vendors.
//!
//! A [`SearchRequest`](domain::entities::SearchRequest) is fanned out to every
//! registered vendor pipeline, each vendor's raw response is normalized into
//! the canonical [`FlightOffer`](domain::entities::FlightOffer) model, and the
//! merged set is ranked into cheapest-first and fastest-first views. Built
//! rankings are memoized for a short time behind an
//! [`OfferCache`](infrastructure::cache::OfferCache).
//!
//! # Layers
//!
//! - [`domain`]: search requests, canonical offers, value objects
//! - [`application`]: aggregation engine, ranking, live updates
//! - [`infrastructure`]: vendor clients, normalizers, cache backends
//! - [`config`]: layered application configuration
//! - [`telemetry`]: tracing subscriber setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use application::error::{ApplicationError, ApplicationResult};
pub use application::services::{
    AggregationConfig, FlightAggregationEngine, LiveUpdate, LiveUpdates, RankingBuilder,
    VendorPolicy,
};
pub use domain::entities::{BestFlightOffers, FlightOffer, SearchQuery, SearchRequest};
