//! # Domain Entities
//!
//! - [`SearchRequest`]: validated one-way search criteria
//! - [`FlightOffer`]: the canonical offer every vendor is normalized into
//! - [`BestFlightOffers`]: cheapest-first and fastest-first rankings

pub mod best_offers;
pub mod flight_offer;
pub mod search_request;

pub use best_offers::BestFlightOffers;
pub use flight_offer::{FlightEndpoint, FlightOffer, FlightOfferBuilder};
pub use search_request::{SearchQuery, SearchRequest};
