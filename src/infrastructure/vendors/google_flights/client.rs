//! Google Flights client.

use super::models::GoogleFlightsResponse;
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
pub const DEFAULT_BASE_URL: &str = "https://google-flights2.p.rapidapi.com";

const SEARCH_RESOURCE: &str = "api/v1/searchFlights";

/// Google Flights (RapidAPI) client.
pub struct GoogleFlightsClient {
    id: VendorId,
    base_url: String,
    api_key: String,
    http: HttpClient,
}

impl fmt::Debug for GoogleFlightsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleFlightsClient")
            .field("id", &self.id)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GoogleFlightsClient {
    /// Vendor identifier used in logs and errors.
    pub const VENDOR: &'static str = "google_flights";

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
impl VendorClient for GoogleFlightsClient {
    type Raw = GoogleFlightsResponse;

    fn vendor_id(&self) -> &VendorId {
        &self.id
    }

    async fn fetch(&self, request: &SearchRequest) -> VendorResult<Self::Raw> {
        let headers = rapidapi::headers(&self.api_key, rapidapi::host_of(&self.base_url))?;
        let url = HttpClient::endpoint(&self.base_url, SEARCH_RESOURCE);
        let params = [
            ("departure_id", request.origin().to_string()),
            ("arrival_id", request.destination().to_string()),
            ("outbound_date", request.date_string()),
            ("adults", request.passenger_count().to_string()),
            ("stops", "direct".to_string()),
            ("currencyCode", "USD".to_string()),
        ];
        self.http.get_with_params(&url, &params, headers).await
    }

    fn normalize(&self, raw: Self::Raw) -> VendorResult<Vec<FlightOffer>> {
        normalize::normalize(&self.id, raw)
    }
}
