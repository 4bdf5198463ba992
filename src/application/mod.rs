//! # Application Layer
//!
//! Use-case orchestration on top of the domain model and the vendor and
//! cache adapters.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult, InfrastructureError};
