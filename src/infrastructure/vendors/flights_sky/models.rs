//! Raw Flights Sky response shapes.

use serde::Deserialize;

/// Top-level RapidAPI envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightsSkyResponse {
    /// `false` when the upstream search failed.
    #[serde(default = "default_status")]
    pub status: bool,
    /// Upstream message.
    #[serde(default)]
    pub message: Option<serde_json::Value>,
    /// Search payload.
    #[serde(default)]
    pub data: Option<SearchData>,
}

fn default_status() -> bool {
    true
}

/// Search payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchData {
    /// Priced itineraries.
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
}

/// One priced itinerary made of legs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Itinerary {
    /// Vendor itinerary id.
    #[serde(default)]
    pub id: String,
    /// Price block.
    #[serde(default)]
    pub price: Option<Price>,
    /// Legs flown in order.
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// Price block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Price {
    /// Numeric amount.
    #[serde(default)]
    pub raw: Option<f64>,
    /// Display string such as `$452`.
    #[serde(default)]
    pub formatted: Option<String>,
}

/// A leg between two places.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    /// Leg origin.
    #[serde(default)]
    pub origin: Place,
    /// Leg destination.
    #[serde(default)]
    pub destination: Place,
    /// Leg duration.
    #[serde(default)]
    pub duration_in_minutes: Option<f64>,
    /// Intermediate stops within the leg.
    #[serde(default)]
    pub stop_count: u32,
    /// Local departure time.
    #[serde(default)]
    pub departure: Option<String>,
    /// Local arrival time.
    #[serde(default)]
    pub arrival: Option<String>,
    /// Carriers on this leg.
    #[serde(default)]
    pub carriers: Carriers,
    /// Segments of this leg.
    #[serde(default)]
    pub segments: Vec<Segment>,
}

/// Airport or city reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Vendor entity id.
    #[serde(default)]
    pub id: String,
    /// IATA display code.
    #[serde(default)]
    pub display_code: Option<String>,
    /// Place name.
    #[serde(default)]
    pub name: Option<String>,
}

impl Place {
    /// Display code, falling back to the entity id.
    #[must_use]
    pub fn code(&self) -> &str {
        self.display_code
            .as_deref()
            .filter(|code| !code.is_empty())
            .unwrap_or(&self.id)
    }
}

/// Carrier groups of a leg.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Carriers {
    /// Marketing carriers.
    #[serde(default)]
    pub marketing: Vec<Carrier>,
}

/// A carrier.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// IATA code.
    #[serde(default)]
    pub alternate_id: Option<String>,
}

/// A flown segment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Flight number without carrier prefix.
    #[serde(default)]
    pub flight_number: String,
    /// Marketing carrier.
    #[serde(default)]
    pub marketing_carrier: Carrier,
}
