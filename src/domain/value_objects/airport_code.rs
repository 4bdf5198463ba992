//! # Airport Code
//!
//! Validated IATA (3 letters) or ICAO (4 letters) airport identifier.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An upper-cased airport code of 3 or 4 ASCII letters.
///
/// # Examples
///
/// ```
/// use flight_offers::domain::value_objects::AirportCode;
///
/// let code = AirportCode::new("syd").unwrap();
/// assert_eq!(code.as_str(), "SYD");
/// assert!(AirportCode::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AirportCode(String);

impl AirportCode {
    /// Creates a validated airport code.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAirportCode`] if the input is empty or is
    /// not 3-4 ASCII letters.
    pub fn new(code: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = code.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_airport_code(trimmed, "must not be empty"));
        }
        if !(3..=4).contains(&trimmed.len()) {
            return Err(DomainError::invalid_airport_code(
                trimmed,
                "must be 3 or 4 letters",
            ));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::invalid_airport_code(
                trimmed,
                "must contain only letters",
            ));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AirportCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AirportCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AirportCode> for String {
    fn from(value: AirportCode) -> Self {
        value.0
    }
}
