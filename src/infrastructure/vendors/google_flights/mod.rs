//! # Google Flights
//!
//! Google Flights search through the RapidAPI marketplace.

pub mod client;
pub mod models;
pub mod normalize;

pub use client::GoogleFlightsClient;
