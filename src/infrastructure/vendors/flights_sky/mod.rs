//! # Flights Sky
//!
//! Skyscanner-backed one-way search through the RapidAPI marketplace.

pub mod client;
pub mod models;
pub mod normalize;

pub use client::FlightsSkyClient;
