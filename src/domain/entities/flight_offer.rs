//! # Flight Offer Entity
//!
//! The canonical offer shape produced by every vendor normalizer.
//!
//! Offers have no identity beyond their field values: two vendors may return
//! the same flight and both copies are kept.
//!
//! # Examples
//!
//! ```
//! use flight_offers::domain::entities::{FlightEndpoint, FlightOffer};
//! use flight_offers::domain::value_objects::{Money, Timestamp};
//!
//! let offer = FlightOffer::builder(
//!     FlightEndpoint::new("SYD", Timestamp::parse_vendor("2025-05-09T08:00:00").unwrap()),
//!     FlightEndpoint::new("BKK", Timestamp::parse_vendor("2025-05-09T17:30:00").unwrap()),
//!     Money::parse_usd("812.40").unwrap(),
//! )
//! .airline("Thai Airways")
//! .flight_number("TG472")
//! .build()
//! .unwrap();
//!
//! assert_eq!(offer.duration_minutes(), 570.0);
//! assert_eq!(offer.stops(), 0);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Money, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Departure or arrival point of an offer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightEndpoint {
    /// Airport code as reported by the vendor.
    pub iata_code: String,
    /// Scheduled time.
    pub timestamp: Timestamp,
}

impl FlightEndpoint {
    /// Creates a new endpoint.
    #[must_use]
    pub fn new(iata_code: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            iata_code: iata_code.into(),
            timestamp,
        }
    }
}

/// A normalized flight offer.
///
/// # Invariants
///
/// - `duration_minutes` is finite and non-negative
/// - `price` is non-negative (enforced by [`Money`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    airline: String,
    flight_number: String,
    departure: FlightEndpoint,
    arrival: FlightEndpoint,
    #[serde(rename = "durationInMinutes")]
    duration_minutes: f64,
    stops: u32,
    price: Money,
}

impl FlightOffer {
    /// Starts building an offer from its required parts.
    #[must_use]
    pub fn builder(
        departure: FlightEndpoint,
        arrival: FlightEndpoint,
        price: Money,
    ) -> FlightOfferBuilder {
        FlightOfferBuilder::new(departure, arrival, price)
    }

    /// Returns the airline display name (empty if unresolved).
    #[inline]
    #[must_use]
    pub fn airline(&self) -> &str {
        &self.airline
    }

    /// Returns the marketing flight number.
    #[inline]
    #[must_use]
    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    /// Returns the departure endpoint.
    #[inline]
    #[must_use]
    pub fn departure(&self) -> &FlightEndpoint {
        &self.departure
    }

    /// Returns the arrival endpoint.
    #[inline]
    #[must_use]
    pub fn arrival(&self) -> &FlightEndpoint {
        &self.arrival
    }

    /// Returns the total journey time in minutes.
    #[inline]
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        self.duration_minutes
    }

    /// Returns the number of intermediate stops.
    #[inline]
    #[must_use]
    pub fn stops(&self) -> u32 {
        self.stops
    }

    /// Returns the price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> &Money {
        &self.price
    }
}

impl fmt::Display for FlightOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}->{} {}min {} stop(s) {}",
            self.airline,
            self.flight_number,
            self.departure.iata_code,
            self.arrival.iata_code,
            self.duration_minutes,
            self.stops,
            self.price
        )
    }
}

/// Builder for [`FlightOffer`].
#[derive(Debug, Clone)]
pub struct FlightOfferBuilder {
    airline: String,
    flight_number: String,
    departure: FlightEndpoint,
    arrival: FlightEndpoint,
    duration_minutes: Option<f64>,
    stops: u32,
    price: Money,
}

impl FlightOfferBuilder {
    /// Creates a builder with no airline, no flight number, and zero stops.
    #[must_use]
    pub fn new(departure: FlightEndpoint, arrival: FlightEndpoint, price: Money) -> Self {
        Self {
            airline: String::new(),
            flight_number: String::new(),
            departure,
            arrival,
            duration_minutes: None,
            stops: 0,
            price,
        }
    }

    /// Sets the airline display name.
    #[must_use]
    pub fn airline(mut self, airline: impl Into<String>) -> Self {
        self.airline = airline.into();
        self
    }

    /// Sets the flight number.
    #[must_use]
    pub fn flight_number(mut self, flight_number: impl Into<String>) -> Self {
        self.flight_number = flight_number.into();
        self
    }

    /// Sets the vendor-reported duration.
    ///
    /// A missing or non-positive value falls back to arrival minus departure.
    #[must_use]
    pub fn duration_minutes(mut self, minutes: Option<f64>) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Sets the number of stops.
    #[must_use]
    pub fn stops(mut self, stops: u32) -> Self {
        self.stops = stops;
        self
    }

    /// Builds the offer.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if no usable duration is given and
    /// the arrival precedes the departure.
    pub fn build(self) -> DomainResult<FlightOffer> {
        let duration_minutes = match self.duration_minutes {
            Some(minutes) if minutes.is_finite() && minutes > 0.0 => minutes,
            _ => {
                let (departure, arrival) = (&self.departure.timestamp, &self.arrival.timestamp);
                if departure.is_after(arrival) {
                    return Err(DomainError::validation(format!(
                        "arrival {arrival} precedes departure {departure}"
                    )));
                }
                departure.minutes_until(arrival)
            }
        };

        Ok(FlightOffer {
            airline: self.airline,
            flight_number: self.flight_number,
            departure: self.departure,
            arrival: self.arrival,
            duration_minutes,
            stops: self.stops,
            price: self.price,
        })
    }
}
