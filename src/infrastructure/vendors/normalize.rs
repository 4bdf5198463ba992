//! # Normalization Helpers
//!
//! Field-level conversions shared by the vendor normalizers.
//!
//! The convention across vendors: a *missing* timestamp makes a single
//! itinerary unusable and it is skipped, while a *present but unparseable*
//! timestamp or price means the vendor changed its format and the whole
//! response is rejected with [`VendorError::Decode`].

use crate::domain::entities::{FlightEndpoint, FlightOffer, FlightOfferBuilder};
use crate::domain::value_objects::{Money, Timestamp, VendorId};
use crate::infrastructure::vendors::error::{VendorError, VendorResult};

/// Outcome of normalizing one itinerary.
pub(crate) type Normalized = VendorResult<Option<FlightOffer>>;

/// Parses an optional vendor timestamp.
///
/// Returns `Ok(None)` for a missing or blank value.
///
/// # Errors
///
/// Returns [`VendorError::Decode`] if a value is present but unparseable.
pub(crate) fn optional_timestamp(
    value: Option<&str>,
    field: &'static str,
) -> VendorResult<Option<Timestamp>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => Timestamp::parse_vendor(raw)
            .map(Some)
            .map_err(|e| VendorError::decode(format!("unparseable {field} '{raw}': {e}"))),
    }
}

/// Builds an endpoint from an airport code and an optional timestamp.
pub(crate) fn endpoint(
    iata_code: &str,
    at: Option<&str>,
    field: &'static str,
) -> VendorResult<Option<FlightEndpoint>> {
    Ok(optional_timestamp(at, field)?.map(|ts| FlightEndpoint::new(iata_code, ts)))
}

/// Parses a decimal price string.
///
/// # Errors
///
/// Returns [`VendorError::Decode`] if the string is not a non-negative
/// decimal.
pub(crate) fn decimal_price(value: &str) -> VendorResult<Money> {
    Money::parse_usd(value).map_err(|e| VendorError::decode(format!("invalid price: {e}")))
}

/// Converts a JSON number price.
///
/// # Errors
///
/// Returns [`VendorError::Decode`] for NaN, infinite, or negative values.
pub(crate) fn float_price(value: f64) -> VendorResult<Money> {
    Money::from_f64_usd(value).map_err(|e| VendorError::decode(format!("invalid price: {e}")))
}

/// Finalizes a builder, dropping the itinerary if it is inconsistent.
pub(crate) fn finish(vendor: &VendorId, item: &str, builder: FlightOfferBuilder) -> Normalized {
    match builder.build() {
        Ok(offer) => Ok(Some(offer)),
        Err(e) => {
            tracing::debug!(%vendor, item, error = %e, "dropping inconsistent itinerary");
            Ok(None)
        }
    }
}

/// Logs and drops an itinerary missing a required field.
pub(crate) fn skip(vendor: &VendorId, item: &str, reason: &'static str) -> Normalized {
    tracing::debug!(%vendor, item, reason, "dropping malformed itinerary");
    Ok(None)
}

/// Collects per-itinerary results, stopping at the first hard error.
pub(crate) fn collect(results: impl IntoIterator<Item = Normalized>) -> VendorResult<Vec<FlightOffer>> {
    let mut offers = Vec::new();
    for result in results {
        if let Some(offer) = result? {
            offers.push(offer);
        }
    }
    Ok(offers)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_timestamp_is_none() {
        assert!(optional_timestamp(None, "departure").unwrap().is_none());
        assert!(optional_timestamp(Some("  "), "departure").unwrap().is_none());
    }

    #[test]
    fn garbage_timestamp_is_decode_error() {
        let err = optional_timestamp(Some("yesterday"), "departure").unwrap_err();
        assert!(err.is_decode_error());
        assert!(err.to_string().contains("departure"));
    }

    #[test]
    fn prices() {
        assert_eq!(decimal_price("546.70").unwrap().amount().to_string(), "546.70");
        assert!(decimal_price("abc").unwrap_err().is_decode_error());
        assert!(float_price(f64::NAN).unwrap_err().is_decode_error());
        assert!(float_price(-1.0).unwrap_err().is_decode_error());
    }
}
