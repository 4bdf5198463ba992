//! # Best Flight Offers
//!
//! Result of one aggregation: the same offers in two orders.

use crate::domain::entities::flight_offer::FlightOffer;
use serde::{Deserialize, Serialize};

/// Ranked views over one merged offer set.
///
/// `cheapest` and `fastest` always hold the same multiset of offers; only the
/// order differs. Instances are never mutated after the ranking builder
/// creates them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BestFlightOffers {
    cheapest: Vec<FlightOffer>,
    fastest: Vec<FlightOffer>,
}

impl BestFlightOffers {
    /// Creates a ranking from two already-sorted views.
    #[must_use]
    pub fn new(cheapest: Vec<FlightOffer>, fastest: Vec<FlightOffer>) -> Self {
        Self { cheapest, fastest }
    }

    /// Offers ordered by ascending price.
    #[inline]
    #[must_use]
    pub fn cheapest(&self) -> &[FlightOffer] {
        &self.cheapest
    }

    /// Offers ordered by ascending duration.
    #[inline]
    #[must_use]
    pub fn fastest(&self) -> &[FlightOffer] {
        &self.fastest
    }

    /// Number of offers in each view.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cheapest.len()
    }

    /// Returns true if no vendor returned any offer.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cheapest.is_empty()
    }
}
