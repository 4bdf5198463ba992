//! Raw Google Flights response shapes.

use serde::Deserialize;

/// Top-level RapidAPI envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleFlightsResponse {
    /// `false` when the upstream search failed.
    #[serde(default = "default_status")]
    pub status: bool,
    /// Upstream message, a string or a list of validation errors.
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
    /// Itinerary groups.
    #[serde(default)]
    pub itineraries: Itineraries,
}

/// Google splits results into a highlighted group and the rest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itineraries {
    /// Highlighted results.
    #[serde(default)]
    pub top_flights: Vec<Itinerary>,
    /// Remaining results.
    #[serde(default)]
    pub other_flights: Vec<Itinerary>,
}

impl Itineraries {
    /// Iterates top flights then other flights.
    pub fn iter(&self) -> impl Iterator<Item = &Itinerary> {
        self.top_flights.iter().chain(self.other_flights.iter())
    }
}

/// One bookable itinerary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Itinerary {
    /// Departure time of the first flight.
    #[serde(default)]
    pub departure_time: Option<String>,
    /// Arrival time of the last flight.
    #[serde(default)]
    pub arrival_time: Option<String>,
    /// Total duration.
    #[serde(default)]
    pub duration: Option<DurationInfo>,
    /// Flights flown.
    #[serde(default)]
    pub flights: Vec<Flight>,
    /// Price in the requested currency.
    #[serde(default)]
    pub price: Option<f64>,
    /// Number of stops, when reported.
    #[serde(default)]
    pub stops: Option<u32>,
}

/// Duration block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DurationInfo {
    /// Minutes.
    #[serde(default)]
    pub raw: Option<f64>,
    /// Human readable form.
    #[serde(default)]
    pub text: Option<String>,
}

/// One flight of an itinerary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Flight {
    /// Departure airport.
    #[serde(default)]
    pub departure_airport: AirportInfo,
    /// Arrival airport.
    #[serde(default)]
    pub arrival_airport: AirportInfo,
    /// Airline display name.
    #[serde(default)]
    pub airline: String,
    /// Flight number.
    #[serde(default)]
    pub flight_number: String,
}

/// Airport plus local time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirportInfo {
    /// Airport name.
    #[serde(default)]
    pub airport_name: String,
    /// IATA code.
    #[serde(default)]
    pub airport_code: String,
    /// Local time.
    #[serde(default)]
    pub time: Option<String>,
}
