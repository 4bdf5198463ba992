//! # Amadeus
//!
//! Amadeus Self-Service flight offers integration.

pub mod client;
pub mod models;
pub mod normalize;

pub use client::AmadeusClient;
