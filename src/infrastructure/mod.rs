//! # Infrastructure Layer
//!
//! Adapters to the outside world.
//!
//! - [`vendors`]: flight search provider clients and their normalizers
//! - [`cache`]: response cache backends

pub mod cache;
pub mod vendors;
