//! Flights Sky normalization.
//!
//! An itinerary runs from the origin of its first leg to the destination of
//! its last. Stops are the stops inside each leg plus one per connection
//! between legs. Duration is the sum of leg durations when every leg reports
//! one.

use super::models::{FlightsSkyResponse, Itinerary, Leg};
use crate::domain::entities::{FlightOffer, FlightOfferBuilder};
use crate::domain::value_objects::VendorId;
use crate::infrastructure::vendors::error::{VendorError, VendorResult};
use crate::infrastructure::vendors::normalize::{
    Normalized, collect, endpoint, finish, float_price, skip,
};

/// Normalizes a Flights Sky response.
///
/// # Errors
///
/// Returns `VendorError::Rejected` when the envelope reports failure, and
/// `VendorError::Decode` for an invalid price or an unparseable time.
pub fn normalize(vendor: &VendorId, raw: FlightsSkyResponse) -> VendorResult<Vec<FlightOffer>> {
    if !raw.status {
        let message = match raw.message {
            Some(serde_json::Value::String(s)) => s,
            Some(other) => other.to_string(),
            None => "search failed".to_string(),
        };
        return Err(VendorError::rejected(message));
    }

    let Some(data) = raw.data else {
        return Ok(Vec::new());
    };

    collect(
        data.itineraries
            .iter()
            .map(|itinerary| normalize_itinerary(vendor, itinerary)),
    )
}

fn normalize_itinerary(vendor: &VendorId, itinerary: &Itinerary) -> Normalized {
    let item = itinerary.id.as_str();
    let (Some(first), Some(last)) = (itinerary.legs.first(), itinerary.legs.last()) else {
        return skip(vendor, item, "itinerary has no legs");
    };
    let Some(amount) = itinerary.price.as_ref().and_then(|p| p.raw) else {
        return skip(vendor, item, "missing price");
    };
    let price = float_price(amount)?;

    let Some(departure) = endpoint(first.origin.code(), first.departure.as_deref(), "departure time")?
    else {
        return skip(vendor, item, "missing departure time");
    };
    let Some(arrival) = endpoint(last.destination.code(), last.arrival.as_deref(), "arrival time")?
    else {
        return skip(vendor, item, "missing arrival time");
    };

    let connections = u32::try_from(itinerary.legs.len().saturating_sub(1)).unwrap_or(u32::MAX);
    let stops = itinerary
        .legs
        .iter()
        .fold(connections, |acc, leg| acc.saturating_add(leg.stop_count));

    let builder = FlightOfferBuilder::new(departure, arrival, price)
        .airline(airline_of(first))
        .flight_number(flight_number_of(first))
        .duration_minutes(total_duration(&itinerary.legs))
        .stops(stops);

    finish(vendor, item, builder)
}

fn airline_of(leg: &Leg) -> &str {
    leg.segments
        .first()
        .map(|segment| segment.marketing_carrier.name.as_str())
        .filter(|name| !name.is_empty())
        .or_else(|| leg.carriers.marketing.first().map(|c| c.name.as_str()))
        .unwrap_or_default()
}

fn flight_number_of(leg: &Leg) -> String {
    let Some(segment) = leg.segments.first() else {
        return String::new();
    };
    match segment.marketing_carrier.alternate_id.as_deref() {
        Some(code) if !segment.flight_number.is_empty() => format!("{code}{}", segment.flight_number),
        _ => segment.flight_number.clone(),
    }
}

fn total_duration(legs: &[Leg]) -> Option<f64> {
    legs.iter()
        .map(|leg| leg.duration_in_minutes)
        .sum::<Option<f64>>()
}
