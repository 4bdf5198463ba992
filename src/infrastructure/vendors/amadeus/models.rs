//! Raw Amadeus Self-Service response shapes.
//!
//! Only the fields the normalizer reads are modelled; everything else in the
//! payload is ignored by serde.

use serde::Deserialize;

/// OAuth2 client-credentials token response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Token type, normally `Bearer`.
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// The access token.
    #[serde(default)]
    pub access_token: String,
    /// Lifetime in seconds.
    #[serde(default)]
    pub expires_in: u64,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Generic `{ "data": ... }` envelope used by every Amadeus endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Payload.
    pub data: T,
}

/// One flight offer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmadeusOffer {
    /// Vendor offer id.
    #[serde(default)]
    pub id: String,
    /// Itineraries; a one-way search yields one.
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
    /// Offer price.
    pub price: OfferPrice,
    /// Carriers validating the ticket, first one is the display airline.
    #[serde(default)]
    pub validating_airline_codes: Vec<String>,
}

/// A sequence of segments flown back to back.
#[derive(Debug, Clone, Deserialize)]
pub struct Itinerary {
    /// ISO 8601 duration such as `PT9H30M`.
    #[serde(default)]
    pub duration: Option<String>,
    /// Flight segments.
    #[serde(default)]
    pub segments: Vec<Segment>,
}

/// One flown segment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Departure point.
    pub departure: SegmentPoint,
    /// Arrival point.
    pub arrival: SegmentPoint,
    /// Marketing carrier code.
    #[serde(default)]
    pub carrier_code: String,
    /// Flight number without carrier prefix.
    #[serde(default)]
    pub number: String,
}

/// Departure or arrival of a segment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentPoint {
    /// Airport code.
    #[serde(default)]
    pub iata_code: String,
    /// Local wall-clock time.
    #[serde(default)]
    pub at: Option<String>,
}

/// Price block of an offer. Amounts are decimal strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferPrice {
    /// Currency code.
    #[serde(default)]
    pub currency: String,
    /// Total before additional services.
    #[serde(default)]
    pub total: String,
    /// Total including additional services.
    #[serde(default)]
    pub grand_total: Option<String>,
}

/// Airline reference data entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airline {
    /// IATA carrier code.
    #[serde(default)]
    pub iata_code: String,
    /// Legal business name.
    #[serde(default)]
    pub business_name: String,
    /// Commonly used name.
    #[serde(default)]
    pub common_name: Option<String>,
}

impl Airline {
    /// Name shown to users.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if !self.business_name.is_empty() {
            return &self.business_name;
        }
        self.common_name.as_deref().unwrap_or_default()
    }
}

/// Offers plus the airline names resolved for them.
#[derive(Debug, Clone, Default)]
pub struct AmadeusSearchResult {
    /// Raw offers.
    pub offers: Vec<AmadeusOffer>,
    /// Airlines referenced by `validating_airline_codes`.
    pub airlines: Vec<Airline>,
}
