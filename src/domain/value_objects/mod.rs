//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`AirportCode`]: IATA/ICAO airport identifier
//! - [`Money`], [`CurrencyCode`]: fixed-point non-negative price
//! - [`Timestamp`]: UTC point in time parsed from vendor payloads
//! - [`VendorId`]: identifier of a flight search provider

pub mod airport_code;
pub mod ids;
pub mod money;
pub mod timestamp;

pub use airport_code::AirportCode;
pub use ids::VendorId;
pub use money::{CurrencyCode, Money};
pub use timestamp::Timestamp;
