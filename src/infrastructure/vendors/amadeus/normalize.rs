//! Amadeus offer normalization.
//!
//! One canonical offer per itinerary. Prices come from `grandTotal`, falling
//! back to `total`. Stops count connections between segments. The airline is
//! the business name of the first validating carrier, when reference data
//! resolved it.

use super::models::{Airline, AmadeusOffer, AmadeusSearchResult, Itinerary};
use crate::domain::entities::{FlightOffer, FlightOfferBuilder};
use crate::domain::value_objects::{Money, VendorId};
use crate::infrastructure::vendors::error::VendorResult;
use crate::infrastructure::vendors::normalize::{
    Normalized, collect, decimal_price, endpoint, finish, skip,
};
use std::collections::HashMap;

/// Normalizes an Amadeus search result.
///
/// # Errors
///
/// Returns `VendorError::Decode` if a price or a present timestamp cannot be
/// parsed.
pub fn normalize(vendor: &VendorId, raw: AmadeusSearchResult) -> VendorResult<Vec<FlightOffer>> {
    let names: HashMap<&str, &str> = raw
        .airlines
        .iter()
        .map(|airline: &Airline| (airline.iata_code.as_str(), airline.display_name()))
        .collect();

    let mut results = Vec::new();
    for offer in &raw.offers {
        let price = offer_price(offer)?;
        let airline = offer
            .validating_airline_codes
            .first()
            .and_then(|code| names.get(code.as_str()).copied())
            .unwrap_or_default();

        for itinerary in &offer.itineraries {
            results.push(normalize_itinerary(vendor, &offer.id, itinerary, airline, &price));
        }
    }
    collect(results)
}

fn offer_price(offer: &AmadeusOffer) -> VendorResult<Money> {
    let amount = offer
        .price
        .grand_total
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(&offer.price.total);
    decimal_price(amount)
}

fn normalize_itinerary(
    vendor: &VendorId,
    offer_id: &str,
    itinerary: &Itinerary,
    airline: &str,
    price: &Money,
) -> Normalized {
    let (Some(first), Some(last)) = (itinerary.segments.first(), itinerary.segments.last()) else {
        return skip(vendor, offer_id, "itinerary has no segments");
    };

    let Some(departure) = endpoint(
        &first.departure.iata_code,
        first.departure.at.as_deref(),
        "departure time",
    )?
    else {
        return skip(vendor, offer_id, "missing departure time");
    };
    let Some(arrival) = endpoint(
        &last.arrival.iata_code,
        last.arrival.at.as_deref(),
        "arrival time",
    )?
    else {
        return skip(vendor, offer_id, "missing arrival time");
    };

    let stops = u32::try_from(itinerary.segments.len().saturating_sub(1)).unwrap_or(u32::MAX);

    let builder = FlightOfferBuilder::new(departure, arrival, price.clone())
        .airline(airline)
        .flight_number(format!("{}{}", first.carrier_code, first.number))
        .duration_minutes(itinerary.duration.as_deref().and_then(iso8601_minutes))
        .stops(stops);

    finish(vendor, offer_id, builder)
}

/// Parses an ISO 8601 duration such as `PT9H30M` or `P1DT2H` into minutes.
#[must_use]
pub fn iso8601_minutes(value: &str) -> Option<f64> {
    let rest = value.trim().strip_prefix('P')?;
    let (date_part, time_part) = match rest.split_once('T') {
        Some((date, time)) => (date, time),
        None => (rest, ""),
    };

    let mut minutes = 0.0;
    let mut seen = false;

    for (part, units) in [
        (date_part, &[('D', 1440.0)][..]),
        (time_part, &[('H', 60.0), ('M', 1.0), ('S', 1.0 / 60.0)][..]),
    ] {
        let mut number = String::new();
        for ch in part.chars() {
            if ch.is_ascii_digit() || ch == '.' {
                number.push(ch);
                continue;
            }
            let factor = units.iter().find(|(unit, _)| *unit == ch)?.1;
            let value: f64 = number.parse().ok()?;
            minutes += value * factor;
            number.clear();
            seen = true;
        }
        if !number.is_empty() {
            return None;
        }
    }

    seen.then_some(minutes)
}
