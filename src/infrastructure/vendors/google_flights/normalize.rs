//! Google Flights normalization.
//!
//! Top flights and other flights are merged in that order. Times come from the
//! first and last flight, falling back to the itinerary-level times. Stops
//! use the reported count, else connections between flights.

use super::models::{GoogleFlightsResponse, Itinerary};
use crate::domain::entities::{FlightOffer, FlightOfferBuilder};
use crate::domain::value_objects::VendorId;
use crate::infrastructure::vendors::error::{VendorError, VendorResult};
use crate::infrastructure::vendors::normalize::{
    Normalized, collect, endpoint, finish, float_price, skip,
};

/// Normalizes a Google Flights response.
///
/// # Errors
///
/// Returns `VendorError::Rejected` when the envelope reports failure, and
/// `VendorError::Decode` for an invalid price or an unparseable time.
pub fn normalize(vendor: &VendorId, raw: GoogleFlightsResponse) -> VendorResult<Vec<FlightOffer>> {
    if !raw.status {
        let message = raw
            .message
            .map(|m| match m {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .unwrap_or_else(|| "search failed".to_string());
        return Err(VendorError::rejected(message));
    }

    let Some(data) = raw.data else {
        return Ok(Vec::new());
    };

    collect(
        data.itineraries
            .iter()
            .enumerate()
            .map(|(index, itinerary)| normalize_itinerary(vendor, index, itinerary)),
    )
}

fn normalize_itinerary(vendor: &VendorId, index: usize, itinerary: &Itinerary) -> Normalized {
    let item = index.to_string();
    let (Some(first), Some(last)) = (itinerary.flights.first(), itinerary.flights.last()) else {
        return skip(vendor, &item, "itinerary has no flights");
    };
    let Some(price) = itinerary.price else {
        return skip(vendor, &item, "missing price");
    };
    let price = float_price(price)?;

    let departure_at = first
        .departure_airport
        .time
        .as_deref()
        .or(itinerary.departure_time.as_deref());
    let Some(departure) = endpoint(&first.departure_airport.airport_code, departure_at, "departure time")?
    else {
        return skip(vendor, &item, "missing departure time");
    };

    let arrival_at = last
        .arrival_airport
        .time
        .as_deref()
        .or(itinerary.arrival_time.as_deref());
    let Some(arrival) = endpoint(&last.arrival_airport.airport_code, arrival_at, "arrival time")? else {
        return skip(vendor, &item, "missing arrival time");
    };

    let stops = itinerary.stops.unwrap_or_else(|| {
        u32::try_from(itinerary.flights.len().saturating_sub(1)).unwrap_or(u32::MAX)
    });

    let builder = FlightOfferBuilder::new(departure, arrival, price)
        .airline(first.airline.as_str())
        .flight_number(first.flight_number.as_str())
        .duration_minutes(itinerary.duration.as_ref().and_then(|d| d.raw))
        .stops(stops);

    finish(vendor, &item, builder)
}
