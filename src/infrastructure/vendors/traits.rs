//! # Vendor Traits
//!
//! Port definitions for flight search providers.
//!
//! A provider is integrated by implementing [`VendorClient`]: an async
//! `fetch` that returns the provider's raw response shape, and a pure
//! `normalize` that maps it into canonical [`FlightOffer`]s. Every
//! `VendorClient` is automatically a [`FlightVendor`], the object-safe
//! pipeline the aggregation engine fans out to. The engine therefore never
//! sees raw vendor data, nor how many calls a vendor needs.
//!
//! # Examples
//!
//! ```ignore
//! use flight_offers::infrastructure::vendors::traits::{FlightVendor, VendorClient};
//!
//! struct MyVendor { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl VendorClient for MyVendor {
//!     type Raw = MyRawResponse;
//!     // ... implement vendor_id, fetch, normalize
//! }
//!
//! let vendor: Arc<dyn FlightVendor> = Arc::new(MyVendor::new(..));
//! ```

use crate::domain::entities::{FlightOffer, SearchRequest};
use crate::domain::value_objects::VendorId;
use crate::infrastructure::vendors::error::VendorResult;
use async_trait::async_trait;
use std::fmt;

/// Provider-specific retrieval plus normalization.
#[async_trait]
pub trait VendorClient: Send + Sync + fmt::Debug {
    /// Raw response shape returned by [`VendorClient::fetch`].
    type Raw: Send;

    /// Returns the vendor identifier.
    fn vendor_id(&self) -> &VendorId;

    /// Retrieves raw offers for the request.
    ///
    /// # Errors
    ///
    /// Returns a `VendorError` on transport failure, non-success status, or
    /// an undecodable body.
    async fn fetch(&self, request: &SearchRequest) -> VendorResult<Self::Raw>;

    /// Maps raw offers into canonical offers. Must not perform I/O.
    ///
    /// # Errors
    ///
    /// Returns `VendorError::Decode` if a required numeric field cannot be
    /// parsed. Malformed individual itineraries are dropped, not reported.
    fn normalize(&self, raw: Self::Raw) -> VendorResult<Vec<FlightOffer>>;
}

/// Object-safe vendor pipeline used by the aggregation engine.
#[async_trait]
pub trait FlightVendor: Send + Sync + fmt::Debug {
    /// Returns the vendor identifier.
    fn source(&self) -> &VendorId;

    /// Fetches and normalizes offers for the request.
    ///
    /// # Errors
    ///
    /// Returns the first hard error raised by fetch or normalize.
    async fn search_offers(&self, request: &SearchRequest) -> VendorResult<Vec<FlightOffer>>;
}

#[async_trait]
impl<T> FlightVendor for T
where
    T: VendorClient,
{
    fn source(&self) -> &VendorId {
        self.vendor_id()
    }

    async fn search_offers(&self, request: &SearchRequest) -> VendorResult<Vec<FlightOffer>> {
        let raw = self.fetch(request).await?;
        let offers = self.normalize(raw)?;
        tracing::debug!(
            vendor = %self.vendor_id(),
            offers = offers.len(),
            "vendor offers normalized"
        );
        Ok(offers)
    }
}
