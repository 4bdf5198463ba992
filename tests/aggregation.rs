//! End-to-end aggregation against stubbed vendor APIs.

#![allow(missing_docs, clippy::unwrap_used, clippy::indexing_slicing)]

use chrono::NaiveDate;
use flight_offers::config::AppConfig;
use flight_offers::domain::value_objects::AirportCode;
use flight_offers::infrastructure::cache::InMemoryOfferCache;
use flight_offers::infrastructure::vendors::{
    AmadeusClient, FlightVendor, FlightsSkyClient, GoogleFlightsClient, HttpClient,
};
use flight_offers::{ApplicationError, FlightAggregationEngine, FlightOffer, SearchRequest};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate, Times};

fn request() -> SearchRequest {
    SearchRequest::new_as_of(
        AirportCode::new("SYD").unwrap(),
        AirportCode::new("BKK").unwrap(),
        NaiveDate::from_ymd_opt(2025, 5, 9).unwrap(),
        1,
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
    )
    .unwrap()
}

/// Amadeus: 600 minutes, $800.
async fn amadeus_server(expected_searches: impl Into<Times>) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/security/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer", "access_token": "tok", "expires_in": 1799
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/shopping/flight-offers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "1",
                "itineraries": [{
                    "duration": "PT10H",
                    "segments": [{
                        "departure": { "iataCode": "SYD", "at": "2025-05-09T08:00:00" },
                        "arrival": { "iataCode": "BKK", "at": "2025-05-09T18:00:00" },
                        "carrierCode": "TG",
                        "number": "476"
                    }]
                }],
                "price": { "currency": "USD", "total": "800.00", "grandTotal": "800.00" },
                "validatingAirlineCodes": ["TG"]
            }]
        })))
        .expect(expected_searches)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/reference-data/airlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "iataCode": "TG", "businessName": "THAI AIRWAYS INTERNATIONAL" }]
        })))
        .mount(&server)
        .await;
    server
}

/// Google Flights: 450 minutes, $950.
async fn google_server(status: u16) -> MockServer {
    let server = MockServer::start().await;
    let response = if status == 200 {
        ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "data": { "itineraries": { "topFlights": [{
                "duration": { "raw": 450 },
                "flights": [{
                    "departure_airport": { "airport_code": "SYD", "time": "2025-05-09T09:00:00" },
                    "arrival_airport": { "airport_code": "BKK", "time": "2025-05-09T16:30:00" },
                    "airline": "Qantas",
                    "flight_number": "QF 23"
                }],
                "price": 950,
                "stops": 0
            }]}}
        }))
    } else {
        ResponseTemplate::new(status).set_body_string("upstream unavailable")
    };
    Mock::given(method("GET"))
        .and(path("/api/v1/searchFlights"))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

/// Flights Sky: 500 minutes, $700, plus one itinerary with zero legs.
async fn flights_sky_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flights/search-one-way"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "data": { "itineraries": [
                { "id": "broken", "price": { "raw": 1.0 }, "legs": [] },
                {
                    "id": "ok",
                    "price": { "raw": 700.0 },
                    "legs": [{
                        "origin": { "id": "SYD", "displayCode": "SYD" },
                        "destination": { "id": "BKK", "displayCode": "BKK" },
                        "durationInMinutes": 500,
                        "stopCount": 0,
                        "departure": "2025-05-09T07:00:00",
                        "arrival": "2025-05-09T15:20:00",
                        "segments": [{
                            "flightNumber": "8",
                            "marketingCarrier": { "name": "Thai Lion Air", "alternateId": "SL" }
                        }]
                    }]
                }
            ]}
        })))
        .mount(&server)
        .await;
    server
}

fn engine(amadeus: &MockServer, google: &MockServer, sky: &MockServer) -> FlightAggregationEngine {
    let http = HttpClient::new(5_000).unwrap();
    let vendors: Vec<Arc<dyn FlightVendor>> = vec![
        Arc::new(AmadeusClient::new(amadeus.uri(), "id", "secret", http.clone())),
        Arc::new(GoogleFlightsClient::new(google.uri(), "key", http.clone())),
        Arc::new(FlightsSkyClient::new(sky.uri(), "key", http)),
    ];
    FlightAggregationEngine::with_defaults(vendors, Arc::new(InMemoryOfferCache::new()))
}

fn flight_numbers(offers: &[FlightOffer]) -> Vec<&str> {
    offers.iter().map(FlightOffer::flight_number).collect()
}

#[tokio::test]
async fn ranks_offers_from_all_vendors() {
    let amadeus = amadeus_server(1).await;
    let google = google_server(200).await;
    let sky = flights_sky_server().await;
    let engine = engine(&amadeus, &google, &sky);

    let best = engine.aggregate(&request()).await.unwrap();

    assert_eq!(best.len(), 3);
    assert_eq!(flight_numbers(best.cheapest()), vec!["SL8", "TG476", "QF 23"]);
    assert_eq!(flight_numbers(best.fastest()), vec!["QF 23", "SL8", "TG476"]);
    assert_eq!(best.cheapest()[1].airline(), "THAI AIRWAYS INTERNATIONAL");
}

#[tokio::test]
async fn second_search_is_served_from_cache() {
    let amadeus = amadeus_server(1).await;
    let google = google_server(200).await;
    let sky = flights_sky_server().await;
    let engine = engine(&amadeus, &google, &sky);

    let first = engine.aggregate(&request()).await.unwrap();
    let second = engine.aggregate(&request()).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn one_vendor_outage_fails_the_search() {
    // Amadeus may be aborted before its search call lands.
    let amadeus = amadeus_server(0..=1).await;
    let google = google_server(503).await;
    let sky = flights_sky_server().await;
    let engine = engine(&amadeus, &google, &sky);

    let err = engine.aggregate(&request()).await.unwrap_err();
    assert!(err.is_vendor_error());
    assert!(matches!(err, ApplicationError::Vendor { ref vendor, .. } if vendor.as_str() == "google_flights"));
}

#[tokio::test]
async fn engine_built_from_configuration() {
    let sky = flights_sky_server().await;
    let settings = config::Config::builder()
        .set_override("cache.backend", "memory")
        .unwrap()
        .set_override("vendors.flights_sky.enabled", true)
        .unwrap()
        .set_override("vendors.flights_sky.api_key", "key")
        .unwrap()
        .set_override("vendors.flights_sky.base_url", sky.uri())
        .unwrap()
        .build()
        .unwrap();

    let engine = AppConfig::from_config(settings)
        .unwrap()
        .build_engine()
        .await
        .unwrap();
    let best = engine.aggregate(&request()).await.unwrap();

    assert_eq!(flight_numbers(best.cheapest()), vec!["SL8"]);
}
