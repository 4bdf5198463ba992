//! # Configuration
//!
//! Layered application configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. `config/default`, `config/{RUN_MODE}`, `config/local` (all optional,
//!    any format the `config` crate understands)
//! 3. Environment variables prefixed `FLIGHTS__`, nested with `__`, e.g.
//!    `FLIGHTS__VENDORS__AMADEUS__CLIENT_ID`
//!
//! A `.env` file in the working directory is loaded into the environment
//! first.

use crate::application::error::{ApplicationResult, InfrastructureError};
use crate::application::services::{AggregationConfig, FlightAggregationEngine, VendorPolicy};
use crate::infrastructure::cache::{InMemoryOfferCache, NoopOfferCache, OfferCache, RedisOfferCache};
use crate::infrastructure::vendors::{self, HttpClient, VendorResult};
use crate::telemetry::LogFormat;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "FLIGHTS";

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Outbound HTTP.
    pub http: HttpConfig,
    /// Offer cache.
    pub cache: CacheConfig,
    /// Aggregation behaviour.
    pub aggregation: AggregationSettings,
    /// Live update feed.
    pub live_updates: LiveUpdatesConfig,
    /// Logging.
    pub log: LogConfig,
    /// Vendor credentials and switches.
    pub vendors: VendorsConfig,
}

/// Outbound HTTP settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 60 }
    }
}

/// Cache backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheBackend {
    /// Shared Redis.
    Redis,
    /// Process-local map.
    Memory,
    /// No caching.
    #[default]
    Disabled,
}

/// Cache settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Backend.
    pub backend: CacheBackend,
    /// Redis URL, required for the Redis backend.
    pub redis_url: Option<String>,
    /// Entry lifetime in seconds.
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            redis_url: None,
            ttl_secs: 30,
        }
    }
}

impl CacheConfig {
    /// Creates the configured cache backend.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError`] if the Redis URL is missing or Redis is
    /// unreachable.
    pub async fn build(&self) -> Result<Arc<dyn OfferCache>, InfrastructureError> {
        Ok(match self.backend {
            CacheBackend::Disabled => Arc::new(NoopOfferCache),
            CacheBackend::Memory => Arc::new(InMemoryOfferCache::new()),
            CacheBackend::Redis => {
                let url = self.redis_url.as_deref().ok_or_else(|| {
                    InfrastructureError::configuration("cache.redis_url is required for the redis backend")
                })?;
                Arc::new(RedisOfferCache::connect(url).await?)
            }
        })
    }
}

/// Aggregation settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AggregationSettings {
    /// Vendor failure policy.
    pub policy: VendorPolicy,
}

/// Live update settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LiveUpdatesConfig {
    /// Refresh interval in seconds.
    pub interval_secs: u64,
}

impl Default for LiveUpdatesConfig {
    fn default() -> Self {
        Self { interval_secs: 30 }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Output format.
    pub format: LogFormat,
}

/// Per-vendor settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VendorSettings {
    /// Whether the vendor is queried.
    pub enabled: bool,
    /// Base URL override.
    pub base_url: Option<String>,
    /// RapidAPI key.
    pub api_key: Option<String>,
    /// OAuth client id.
    pub client_id: Option<String>,
    /// OAuth client secret.
    pub client_secret: Option<String>,
}

impl VendorSettings {
    fn has(value: Option<&String>) -> bool {
        value.is_some_and(|v| !v.trim().is_empty())
    }
}

/// All vendors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VendorsConfig {
    /// Amadeus; needs `client_id` and `client_secret`.
    pub amadeus: VendorSettings,
    /// Google Flights; needs `api_key`.
    pub google_flights: VendorSettings,
    /// Flights Sky; needs `api_key`.
    pub flights_sky: VendorSettings,
}

impl AppConfig {
    /// Loads configuration from `.env`, files, and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::Configuration`] if a source cannot be
    /// read or a value has the wrong type.
    pub fn load() -> Result<Self, InfrastructureError> {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(settings)
    }

    /// Deserializes an already built `config::Config`.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::Configuration`] on type mismatches.
    pub fn from_config(settings: config::Config) -> Result<Self, InfrastructureError> {
        Ok(settings.try_deserialize()?)
    }

    /// Checks cross-field requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::Configuration`] naming the first
    /// problem found.
    pub fn validate(&self) -> Result<(), InfrastructureError> {
        let vendors = &self.vendors;
        let required = [
            ("amadeus", &vendors.amadeus, "client_id", vendors.amadeus.client_id.as_ref()),
            ("amadeus", &vendors.amadeus, "client_secret", vendors.amadeus.client_secret.as_ref()),
            ("google_flights", &vendors.google_flights, "api_key", vendors.google_flights.api_key.as_ref()),
            ("flights_sky", &vendors.flights_sky, "api_key", vendors.flights_sky.api_key.as_ref()),
        ];
        for (name, settings, field, value) in required {
            if settings.enabled && !VendorSettings::has(value) {
                return Err(InfrastructureError::configuration(format!(
                    "vendors.{name}.{field} is required when the vendor is enabled"
                )));
            }
        }

        if self.cache.backend == CacheBackend::Redis && !VendorSettings::has(self.cache.redis_url.as_ref()) {
            return Err(InfrastructureError::configuration(
                "cache.redis_url is required for the redis backend",
            ));
        }
        if self.cache.ttl_secs == 0 {
            return Err(InfrastructureError::configuration("cache.ttl_secs must be positive"));
        }
        if self.http.timeout_secs == 0 {
            return Err(InfrastructureError::configuration("http.timeout_secs must be positive"));
        }
        if self.live_updates.interval_secs == 0 {
            return Err(InfrastructureError::configuration(
                "live_updates.interval_secs must be positive",
            ));
        }
        Ok(())
    }

    /// Aggregation settings for the engine.
    #[must_use]
    pub fn aggregation_config(&self) -> AggregationConfig {
        AggregationConfig::default()
            .with_cache_ttl(Duration::from_secs(self.cache.ttl_secs))
            .with_policy(self.aggregation.policy)
    }

    /// Live update interval.
    #[must_use]
    pub fn live_update_interval(&self) -> Duration {
        Duration::from_secs(self.live_updates.interval_secs)
    }

    /// Shared HTTP client for vendors.
    ///
    /// # Errors
    ///
    /// Returns a `VendorError` if the client cannot be created.
    pub fn http_client(&self) -> VendorResult<HttpClient> {
        HttpClient::new(self.http.timeout_secs.saturating_mul(1_000))
    }

    /// Validates the configuration and wires vendors, cache, and engine.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, a vendor cannot be built, or the
    /// cache backend is unavailable.
    pub async fn build_engine(&self) -> ApplicationResult<FlightAggregationEngine> {
        self.validate()?;
        let http = self
            .http_client()
            .map_err(|e| InfrastructureError::configuration(e.to_string()))?;
        let vendors = vendors::from_config(&self.vendors, &http)
            .map_err(|e| InfrastructureError::configuration(e.to_string()))?;
        let cache = self.cache.build().await?;

        tracing::info!(
            vendors = vendors.len(),
            cache = ?self.cache.backend,
            policy = ?self.aggregation.policy,
            "flight aggregation engine ready"
        );
        Ok(FlightAggregationEngine::new(vendors, cache, self.aggregation_config()))
    }
}
