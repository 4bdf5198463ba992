//! # Timestamp Value Object
//!
//! UTC point in time with parsing for vendor timestamp formats.
//!
//! Vendors report departure and arrival times as local wall-clock strings
//! (`2025-05-09T08:35:00`), sometimes with fractional seconds or an explicit
//! offset. Naive values are taken as UTC.
//!
//! # Examples
//!
//! ```
//! use flight_offers::domain::value_objects::Timestamp;
//!
//! let departure = Timestamp::parse_vendor("2025-05-09T08:35:00").unwrap();
//! let arrival = Timestamp::parse_vendor("2025-05-09T14:05:00").unwrap();
//!
//! assert!(arrival.is_after(&departure));
//! assert_eq!(departure.minutes_until(&arrival), 330.0);
//! ```

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp.
///
/// # Invariants
///
/// - Always in UTC timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Wall-clock format used by every supported vendor.
    pub const VENDOR_FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S%.f";

    /// Shorter vendor variant without seconds.
    const VENDOR_FORMAT_MINUTES: &'static str = "%Y-%m-%dT%H:%M";

    /// Parses a vendor timestamp.
    ///
    /// Accepts RFC 3339 (with offset, converted to UTC) and naive
    /// `YYYY-MM-DDTHH:MM[:SS[.fff]]` wall-clock values (taken as UTC).
    ///
    /// # Errors
    ///
    /// Returns the underlying [`chrono::ParseError`] when no format matches.
    pub fn parse_vendor(value: &str) -> Result<Self, chrono::ParseError> {
        let value = value.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(value, Self::VENDOR_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(value, Self::VENDOR_FORMAT_MINUTES))
            .map(|naive| Self(naive.and_utc()))
    }

    /// Adds minutes to the timestamp.
    #[must_use]
    pub fn add_minutes(&self, minutes: i64) -> Self {
        Self(self.0 + Duration::minutes(minutes))
    }

    /// Returns the elapsed minutes from `self` to `later`.
    ///
    /// Negative if `later` is actually earlier.
    #[must_use]
    pub fn minutes_until(&self, later: &Timestamp) -> f64 {
        let delta = later.0.signed_duration_since(self.0);
        delta.num_seconds() as f64 / 60.0
    }

    /// Returns true if this timestamp is after `other`.
    #[inline]
    #[must_use]
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_naive_as_utc() {
        let ts = Timestamp::parse_vendor("2025-05-09T08:35:00").unwrap();
        assert_eq!(ts.to_string(), "2025-05-09T08:35:00Z");
    }

    #[test]
    fn parse_fractional_seconds() {
        let ts = Timestamp::parse_vendor("2025-05-09T08:35:00.000").unwrap();
        assert_eq!(ts.to_string(), "2025-05-09T08:35:00Z");
    }

    #[test]
    fn parse_without_seconds() {
        let ts = Timestamp::parse_vendor("2025-05-09T08:35").unwrap();
        assert_eq!(ts.to_string(), "2025-05-09T08:35:00Z");
    }

    #[test]
    fn parse_rfc3339_offset() {
        let ts = Timestamp::parse_vendor("2025-05-09T18:35:00+10:00").unwrap();
        assert_eq!(ts.to_string(), "2025-05-09T08:35:00Z");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Timestamp::parse_vendor("09/05/2025 08:35").is_err());
        assert!(Timestamp::parse_vendor("").is_err());
    }

    #[test]
    fn minutes_until_crosses_midnight() {
        let dep = Timestamp::parse_vendor("2025-05-09T22:00:00").unwrap();
        let arr = Timestamp::parse_vendor("2025-05-10T07:30:00").unwrap();
        assert!((dep.minutes_until(&arr) - 570.0).abs() < f64::EPSILON);
    }

    #[test]
    fn add_minutes() {
        let ts = Timestamp::parse_vendor("2025-05-09T23:00:00").unwrap().add_minutes(90);
        assert_eq!(ts.to_string(), "2025-05-10T00:30:00Z");
    }

    #[test]
    fn is_after_is_strict() {
        let ts = Timestamp::parse_vendor("2025-05-09T08:00:00").unwrap();
        assert!(ts.add_minutes(1).is_after(&ts));
        assert!(!ts.is_after(&ts));
    }
}
