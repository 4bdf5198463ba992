//! # Search Request
//!
//! Validated search criteria for a one-way flight search.
//!
//! A [`SearchRequest`] can only be obtained through validation, so every
//! downstream component may assume its invariants. Raw user input arrives as
//! a [`SearchQuery`] of strings and is converted with `TryFrom`.
//!
//! # Examples
//!
//! ```
//! use flight_offers::domain::entities::{SearchQuery, SearchRequest};
//!
//! let query = SearchQuery {
//!     origin: "syd".into(),
//!     destination: "bkk".into(),
//!     date: "2999-05-09".into(),
//!     adults: "2".into(),
//! };
//! let request = SearchRequest::try_from(query).unwrap();
//!
//! assert_eq!(
//!     request.cache_key(),
//!     "adults=2&date=2999-05-09&destination=BKK&origin=SYD"
//! );
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::AirportCode;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw, unvalidated search parameters as received at the system boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Origin airport code.
    #[serde(default)]
    pub origin: String,
    /// Destination airport code.
    #[serde(default)]
    pub destination: String,
    /// Departure date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// Number of adult passengers.
    #[serde(default)]
    pub adults: String,
}

/// Validated criteria for a one-way flight search.
///
/// # Invariants
///
/// - `origin` and `destination` are valid airport codes
/// - `date` was today or later (UTC) when the request was built
/// - `passenger_count >= 1`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SearchRequest {
    origin: AirportCode,
    destination: AirportCode,
    date: NaiveDate,
    passenger_count: u32,
}

impl SearchRequest {
    /// Calendar date format shared by the cache key and every vendor query.
    pub const DATE_FORMAT: &'static str = "%Y-%m-%d";

    /// Creates a request, validating the date against today's UTC date.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDate`] for a past date or
    /// [`DomainError::InvalidPassengerCount`] for zero passengers.
    pub fn new(
        origin: AirportCode,
        destination: AirportCode,
        date: NaiveDate,
        passenger_count: u32,
    ) -> DomainResult<Self> {
        Self::new_as_of(
            origin,
            destination,
            date,
            passenger_count,
            Utc::now().date_naive(),
        )
    }

    /// Creates a request, validating the date against the supplied `today`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDate`] if `date < today` or
    /// [`DomainError::InvalidPassengerCount`] for zero passengers.
    pub fn new_as_of(
        origin: AirportCode,
        destination: AirportCode,
        date: NaiveDate,
        passenger_count: u32,
        today: NaiveDate,
    ) -> DomainResult<Self> {
        if date < today {
            return Err(DomainError::invalid_date(
                date.format(Self::DATE_FORMAT).to_string(),
                "must be today or later",
            ));
        }
        if passenger_count == 0 {
            return Err(DomainError::invalid_passenger_count("0"));
        }
        Ok(Self {
            origin,
            destination,
            date,
            passenger_count,
        })
    }

    /// Returns the origin airport.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> &AirportCode {
        &self.origin
    }

    /// Returns the destination airport.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &AirportCode {
        &self.destination
    }

    /// Returns the departure date.
    #[inline]
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the departure date formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_string(&self) -> String {
        self.date.format(Self::DATE_FORMAT).to_string()
    }

    /// Returns the number of passengers.
    #[inline]
    #[must_use]
    pub fn passenger_count(&self) -> u32 {
        self.passenger_count
    }

    /// Returns the deterministic cache key for this request.
    ///
    /// Fields are encoded as `key=value` pairs sorted by key name, so the key
    /// does not depend on the order in which parameters were supplied.
    #[must_use]
    pub fn cache_key(&self) -> String {
        let mut pairs = [
            ("origin", self.origin.to_string()),
            ("destination", self.destination.to_string()),
            ("date", self.date_string()),
            ("adults", self.passenger_count.to_string()),
        ];
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{} on {} x{}",
            self.origin,
            self.destination,
            self.date_string(),
            self.passenger_count
        )
    }
}

impl TryFrom<SearchQuery> for SearchRequest {
    type Error = DomainError;

    fn try_from(query: SearchQuery) -> Result<Self, Self::Error> {
        let origin = AirportCode::new(&query.origin)?;
        let destination = AirportCode::new(&query.destination)?;

        let date_raw = query.date.trim();
        if date_raw.is_empty() {
            return Err(DomainError::invalid_date(date_raw, "must not be empty"));
        }
        let date = NaiveDate::parse_from_str(date_raw, Self::DATE_FORMAT)
            .map_err(|_| DomainError::invalid_date(date_raw, "expected YYYY-MM-DD"))?;

        let adults_raw = query.adults.trim();
        let passenger_count = adults_raw
            .parse::<u32>()
            .map_err(|_| DomainError::invalid_passenger_count(adults_raw))?;

        Self::new(origin, destination, date, passenger_count)
    }
}
