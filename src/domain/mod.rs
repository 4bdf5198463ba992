//! # Domain Layer
//!
//! Core flight search types with no I/O.
//!
//! - [`entities`]: [`SearchRequest`](entities::SearchRequest),
//!   [`FlightOffer`](entities::FlightOffer),
//!   [`BestFlightOffers`](entities::BestFlightOffers)
//! - [`value_objects`]: airport codes, money, timestamps, vendor ids
//! - [`errors`]: validation failures raised at the system boundary

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
