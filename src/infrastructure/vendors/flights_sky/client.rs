//! Flights Sky client.

use super::models::FlightsSkyResponse;
use super::normalize;
use crate::domain::entities::{FlightOffer, SearchRequest};
use crate::domain::value_objects::VendorId;
use crate::infrastructure::vendors::error::VendorResult;
use crate::infrastructure::vendors::http_client::HttpClient;
use crate::infrastructure::vendors::rapidapi;
use crate::infrastructure::vendors::traits::VendorClient;
use async_trait::async_trait;
use std::fmt;

/// Default RapidAPI base URL.
pub const DEFAULT_BASE_URL: &str = "https://flights-sky.p.rapidapi.com";

const SEARCH_RESOURCE: &str = "flights/search-one-way";

/// Flights Sky (RapidAPI) client.
pub struct FlightsSkyClient {
    id: VendorId,
    base_url: String,
    api_key: String,
    http: HttpClient,
}

impl fmt::Debug for FlightsSkyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlightsSkyClient")
            .field("id", &self.id)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl FlightsSkyClient {
    /// Vendor identifier used in logs and errors.
    pub const VENDOR: &'static str = "flights_sky";

    /// Creates a client.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, http: HttpClient) -> Self {
        Self {
            id: VendorId::new(Self::VENDOR),
            base_url: base_url.into(),
            api_key: api_key.into(),
            http,
        }
    }
}

#[async_trait]
impl VendorClient for FlightsSkyClient {
    type Raw = FlightsSkyResponse;

    fn vendor_id(&self) -> &VendorId {
        &self.id
    }

    async fn fetch(&self, request: &SearchRequest) -> VendorResult<Self::Raw> {
        let headers = rapidapi::headers(&self.api_key, rapidapi::host_of(&self.base_url))?;
        let url = HttpClient::endpoint(&self.base_url, SEARCH_RESOURCE);
        let params = [
            ("fromEntityId", request.origin().to_string()),
            ("toEntityId", request.destination().to_string()),
            ("departDate", request.date_string()),
            ("adults", request.passenger_count().to_string()),
            ("currencyCode", "USD".to_string()),
            ("stops", "direct".to_string()),
        ];
        self.http.get_with_params(&url, &params, headers).await
    }

    fn normalize(&self, raw: Self::Raw) -> VendorResult<Vec<FlightOffer>> {
        normalize::normalize(&self.id, raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::AirportCode;
    use crate::infrastructure::vendors::traits::FlightVendor;
    use chrono::NaiveDate;
    use serde_json::json;
    use wiremock::matchers::{header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

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

    #[tokio::test]
    async fn searches_one_way() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/flights/search-one-way"))
            .and(header_exists("x-rapidapi-key"))
            .and(header_exists("x-rapidapi-host"))
            .and(query_param("fromEntityId", "SYD"))
            .and(query_param("toEntityId", "BKK"))
            .and(query_param("departDate", "2025-05-09"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "data": { "itineraries": [{
                    "id": "a",
                    "price": { "raw": 452.0 },
                    "legs": [{
                        "origin": { "id": "SYD", "displayCode": "SYD" },
                        "destination": { "id": "BKK", "displayCode": "BKK" },
                        "durationInMinutes": 370,
                        "stopCount": 0,
                        "departure": "2025-05-09T10:00:00",
                        "arrival": "2025-05-09T16:10:00",
                        "segments": []
                    }]
                }]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = FlightsSkyClient::new(server.uri(), "key", HttpClient::new(5_000).unwrap());
        let offers = client.search_offers(&request()).await.unwrap();
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].flight_number(), "");
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
            .mount(&server)
            .await;

        let client = FlightsSkyClient::new(server.uri(), "key", HttpClient::new(5_000).unwrap());
        let err = client.search_offers(&request()).await.unwrap_err();
        assert!(err.is_decode_error());
    }
}
