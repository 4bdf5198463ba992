//! # Amadeus Client
//!
//! Three dependent calls per search:
//!
//! 1. `POST v1/security/oauth2/token` exchanges client credentials for a
//!    bearer token (cached until shortly before it expires)
//! 2. `GET v2/shopping/flight-offers` retrieves direct offers in USD
//! 3. `GET v1/reference-data/airlines` resolves the validating carrier codes
//!    of those offers to display names (skipped when there are none)

use super::models::{Airline, AmadeusOffer, AmadeusSearchResult, Envelope, TokenResponse};
use super::normalize;
use crate::domain::entities::{FlightOffer, SearchRequest};
use crate::domain::value_objects::VendorId;
use crate::infrastructure::vendors::error::{VendorError, VendorResult};
use crate::infrastructure::vendors::http_client::HttpClient;
use crate::infrastructure::vendors::traits::VendorClient;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::collections::BTreeSet;
use std::fmt;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Default production base URL.
pub const DEFAULT_BASE_URL: &str = "https://test.api.amadeus.com";

const TOKEN_RESOURCE: &str = "v1/security/oauth2/token";
const OFFERS_RESOURCE: &str = "v2/shopping/flight-offers";
const AIRLINES_RESOURCE: &str = "v1/reference-data/airlines";

/// Tokens are refreshed this long before the vendor says they expire.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(30);

#[derive(Clone)]
struct CachedToken {
    header: HeaderValue,
    refresh_at: Instant,
}

/// Amadeus Self-Service flight offers client.
pub struct AmadeusClient {
    id: VendorId,
    base_url: String,
    client_id: String,
    client_secret: String,
    http: HttpClient,
    token: RwLock<Option<CachedToken>>,
}

impl fmt::Debug for AmadeusClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AmadeusClient")
            .field("id", &self.id)
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl AmadeusClient {
    /// Vendor identifier used in logs and errors.
    pub const VENDOR: &'static str = "amadeus";

    /// Creates a client.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        http: HttpClient,
    ) -> Self {
        Self {
            id: VendorId::new(Self::VENDOR),
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            http,
            token: RwLock::new(None),
        }
    }

    /// Returns authorization headers, exchanging credentials if the cached
    /// token is absent or near expiry.
    async fn auth_headers(&self) -> VendorResult<HeaderMap> {
        if let Some(cached) = self.token.read().await.as_ref()
            && Instant::now() < cached.refresh_at
        {
            return Ok(Self::bearer(cached.header.clone()));
        }

        let mut slot = self.token.write().await;
        if let Some(cached) = slot.as_ref()
            && Instant::now() < cached.refresh_at
        {
            return Ok(Self::bearer(cached.header.clone()));
        }

        let token = self.exchange_credentials().await?;
        let header = HeaderValue::from_str(&format!("{} {}", token.token_type, token.access_token))
            .map_err(|_| VendorError::authentication("access token is not a valid header value"))?;
        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);

        *slot = Some(CachedToken {
            header: header.clone(),
            refresh_at: Instant::now() + lifetime,
        });
        Ok(Self::bearer(header))
    }

    async fn exchange_credentials(&self) -> VendorResult<TokenResponse> {
        let url = HttpClient::endpoint(&self.base_url, TOKEN_RESOURCE);
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let token: TokenResponse = self.http.post_form(&url, &form).await.map_err(|e| match e {
            VendorError::Status { status: 400 | 401 | 403, body } => {
                VendorError::authentication(format!("token exchange rejected: {body}"))
            }
            other => other,
        })?;

        if token.access_token.is_empty() {
            return Err(VendorError::authentication("token response carried no access token"));
        }
        tracing::debug!(vendor = Self::VENDOR, expires_in = token.expires_in, "access token issued");
        Ok(token)
    }

    fn bearer(value: HeaderValue) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(AUTHORIZATION, value);
        headers
    }

    async fn search(
        &self,
        request: &SearchRequest,
        headers: HeaderMap,
    ) -> VendorResult<Vec<AmadeusOffer>> {
        let url = HttpClient::endpoint(&self.base_url, OFFERS_RESOURCE);
        let params = [
            ("originLocationCode", request.origin().to_string()),
            ("destinationLocationCode", request.destination().to_string()),
            ("departureDate", request.date_string()),
            ("adults", request.passenger_count().to_string()),
            ("nonStop", "true".to_string()),
            ("currencyCode", "USD".to_string()),
        ];
        let envelope: Envelope<Vec<AmadeusOffer>> =
            self.http.get_with_params(&url, &params, headers).await?;
        Ok(envelope.data)
    }

    async fn lookup_airlines(
        &self,
        codes: &BTreeSet<&str>,
        headers: HeaderMap,
    ) -> VendorResult<Vec<Airline>> {
        let url = HttpClient::endpoint(&self.base_url, AIRLINES_RESOURCE);
        let joined = codes.iter().copied().collect::<Vec<_>>().join(",");
        let envelope: Envelope<Vec<Airline>> = self
            .http
            .get_with_params(&url, &[("airlineCodes", joined)], headers)
            .await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl VendorClient for AmadeusClient {
    type Raw = AmadeusSearchResult;

    fn vendor_id(&self) -> &VendorId {
        &self.id
    }

    async fn fetch(&self, request: &SearchRequest) -> VendorResult<Self::Raw> {
        let headers = self.auth_headers().await?;
        let offers = self.search(request, headers.clone()).await?;

        let codes: BTreeSet<&str> = offers
            .iter()
            .filter_map(|offer| offer.validating_airline_codes.first())
            .map(String::as_str)
            .filter(|code| !code.is_empty())
            .collect();

        let airlines = if codes.is_empty() {
            Vec::new()
        } else {
            self.lookup_airlines(&codes, headers).await?
        };

        Ok(AmadeusSearchResult { offers, airlines })
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
    use wiremock::matchers::{body_string_contains, header, method, path, query_param};
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

    fn client(server: &MockServer) -> AmadeusClient {
        AmadeusClient::new(server.uri(), "id", "secret", HttpClient::new(5_000).unwrap())
    }

    async fn mount_token(server: &MockServer, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/v1/security/oauth2/token"))
            .and(body_string_contains("grant_type=client_credentials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token_type": "Bearer",
                "access_token": "tok",
                "expires_in": 1799
            })))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    fn offers_body() -> serde_json::Value {
        json!({
            "meta": { "count": 1 },
            "data": [{
                "id": "1",
                "itineraries": [{
                    "duration": "PT9H30M",
                    "segments": [{
                        "departure": { "iataCode": "SYD", "at": "2025-05-09T08:00:00" },
                        "arrival": { "iataCode": "BKK", "at": "2025-05-09T14:30:00" },
                        "carrierCode": "TG",
                        "number": "472",
                        "numberOfStops": 0
                    }]
                }],
                "price": { "currency": "USD", "total": "540.00", "grandTotal": "546.70" },
                "validatingAirlineCodes": ["TG"]
            }]
        })
    }

    #[tokio::test]
    async fn fetches_offers_and_resolves_airline() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;

        Mock::given(method("GET"))
            .and(path("/v2/shopping/flight-offers"))
            .and(header("authorization", "Bearer tok"))
            .and(query_param("originLocationCode", "SYD"))
            .and(query_param("destinationLocationCode", "BKK"))
            .and(query_param("departureDate", "2025-05-09"))
            .and(query_param("adults", "1"))
            .and(query_param("nonStop", "true"))
            .and(query_param("currencyCode", "USD"))
            .respond_with(ResponseTemplate::new(200).set_body_json(offers_body()))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/reference-data/airlines"))
            .and(query_param("airlineCodes", "TG"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "type": "airline", "iataCode": "TG", "businessName": "THAI AIRWAYS INTERNATIONAL" }]
            })))
            .mount(&server)
            .await;

        let client = client(&server);
        let offers = client.search_offers(&request()).await.unwrap();
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].airline(), "THAI AIRWAYS INTERNATIONAL");

        // Second search reuses the cached token.
        client.search_offers(&request()).await.unwrap();
    }

    #[tokio::test]
    async fn skips_airline_lookup_without_codes() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;

        Mock::given(method("GET"))
            .and(path("/v2/shopping/flight-offers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/reference-data/airlines"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let offers = client(&server).search_offers(&request()).await.unwrap();
        assert!(offers.is_empty());
    }

    #[tokio::test]
    async fn rejected_credentials_are_auth_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/security/oauth2/token"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid_client"))
            .mount(&server)
            .await;

        let err = client(&server).search_offers(&request()).await.unwrap_err();
        assert!(err.is_auth_failure());
    }

    #[tokio::test]
    async fn failed_airline_lookup_fails_vendor() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        Mock::given(method("GET"))
            .and(path("/v2/shopping/flight-offers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(offers_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/reference-data/airlines"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client(&server).search_offers(&request()).await.unwrap_err();
        assert_eq!(err.http_status(), Some(503));
    }
}
