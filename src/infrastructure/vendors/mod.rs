//! # Flight Vendors
//!
//! Clients for the external flight search providers.
//!
//! Each provider module holds its raw response models, a client implementing
//! [`VendorClient`], and a pure normalizer. [`from_config`] registers the
//! enabled providers in a fixed order: Amadeus, Google Flights, Flights Sky.

pub mod amadeus;
pub mod error;
pub mod flights_sky;
pub mod google_flights;
pub mod http_client;
pub(crate) mod normalize;
pub mod rapidapi;
pub mod traits;

pub use amadeus::AmadeusClient;
pub use error::{VendorError, VendorResult};
pub use flights_sky::FlightsSkyClient;
pub use google_flights::GoogleFlightsClient;
pub use http_client::HttpClient;
pub use traits::{FlightVendor, VendorClient};

use crate::config::{VendorSettings, VendorsConfig};
use std::sync::Arc;

/// Builds the enabled vendors.
///
/// Disabled vendors are not registered.
///
/// # Errors
///
/// Returns [`VendorError::Authentication`] if an enabled vendor lacks a
/// credential.
pub fn from_config(
    config: &VendorsConfig,
    http: &HttpClient,
) -> VendorResult<Vec<Arc<dyn FlightVendor>>> {
    let mut vendors: Vec<Arc<dyn FlightVendor>> = Vec::with_capacity(3);

    if config.amadeus.enabled {
        let settings = &config.amadeus;
        vendors.push(Arc::new(AmadeusClient::new(
            base_url(settings, amadeus::client::DEFAULT_BASE_URL),
            credential(AmadeusClient::VENDOR, "client_id", settings.client_id.as_deref())?,
            credential(AmadeusClient::VENDOR, "client_secret", settings.client_secret.as_deref())?,
            http.clone(),
        )));
    }

    if config.google_flights.enabled {
        let settings = &config.google_flights;
        vendors.push(Arc::new(GoogleFlightsClient::new(
            base_url(settings, google_flights::client::DEFAULT_BASE_URL),
            credential(GoogleFlightsClient::VENDOR, "api_key", settings.api_key.as_deref())?,
            http.clone(),
        )));
    }

    if config.flights_sky.enabled {
        let settings = &config.flights_sky;
        vendors.push(Arc::new(FlightsSkyClient::new(
            base_url(settings, flights_sky::client::DEFAULT_BASE_URL),
            credential(FlightsSkyClient::VENDOR, "api_key", settings.api_key.as_deref())?,
            http.clone(),
        )));
    }

    tracing::debug!(
        vendors = ?vendors.iter().map(|v| v.source().to_string()).collect::<Vec<_>>(),
        "vendors registered"
    );
    Ok(vendors)
}

fn base_url(settings: &VendorSettings, default: &str) -> String {
    settings
        .base_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(default)
        .to_string()
}

fn credential(vendor: &str, field: &str, value: Option<&str>) -> VendorResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| VendorError::authentication(format!("{vendor}: missing {field}")))
}
