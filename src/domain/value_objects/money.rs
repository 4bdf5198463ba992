//! # Money
//!
//! Fixed-point, non-negative monetary amount with an ISO 4217 currency.
//!
//! Amounts are held as [`Decimal`] so that price comparisons during ranking
//! are exact. On the wire (cache payloads, CLI output) the amount is a JSON
//! number under `value`.

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-letter ISO 4217 currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// US dollar, the currency every vendor is asked to quote in.
    pub const USD: &'static str = "USD";

    /// Creates a validated currency code.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCurrency`] unless the input is exactly
    /// three ASCII letters.
    pub fn new(code: impl AsRef<str>) -> DomainResult<Self> {
        let code = code.as_ref().trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCurrency(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the US dollar currency code.
    #[must_use]
    pub fn usd() -> Self {
        Self(Self::USD.to_string())
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::usd()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

/// A non-negative price.
///
/// # Examples
///
/// ```
/// use flight_offers::domain::value_objects::Money;
/// use rust_decimal::Decimal;
///
/// let price = Money::parse_usd("1021.63").unwrap();
/// assert_eq!(price.amount(), Decimal::new(102163, 2));
/// assert!(Money::parse_usd("-1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr", into = "MoneyRepr")]
pub struct Money {
    amount: Decimal,
    currency: CurrencyCode,
}

/// Wire form of [`Money`]; decoding goes through [`Money::new`].
#[derive(Serialize, Deserialize)]
struct MoneyRepr {
    #[serde(with = "rust_decimal::serde::float")]
    value: Decimal,
    currency: CurrencyCode,
}

impl TryFrom<MoneyRepr> for Money {
    type Error = DomainError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        Self::new(repr.value, repr.currency)
    }
}

impl From<Money> for MoneyRepr {
    fn from(money: Money) -> Self {
        Self {
            value: money.amount,
            currency: money.currency,
        }
    }
}

impl Money {
    /// Creates a new amount.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeAmount`] if `amount` is below zero.
    pub fn new(amount: Decimal, currency: CurrencyCode) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::NegativeAmount(amount.to_string()));
        }
        Ok(Self { amount, currency })
    }

    /// Creates a US dollar amount.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeAmount`] if `amount` is below zero.
    pub fn usd(amount: Decimal) -> DomainResult<Self> {
        Self::new(amount, CurrencyCode::usd())
    }

    /// Parses a decimal string such as `"546.70"` into a US dollar amount.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the string is not a decimal
    /// number, or [`DomainError::NegativeAmount`] if it is negative.
    pub fn parse_usd(value: &str) -> DomainResult<Self> {
        Self::parse(value, CurrencyCode::usd())
    }

    /// Parses a decimal string in the given currency.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the string is not a decimal
    /// number, or [`DomainError::NegativeAmount`] if it is negative.
    pub fn parse(value: &str, currency: CurrencyCode) -> DomainResult<Self> {
        let amount = Decimal::from_str(value.trim())
            .map_err(|e| DomainError::validation(format!("unparseable amount '{value}': {e}")))?;
        Self::new(amount, currency)
    }

    /// Converts a floating point vendor price into a US dollar amount.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] for NaN or infinite values, or
    /// [`DomainError::NegativeAmount`] if the value is negative.
    pub fn from_f64_usd(value: f64) -> DomainResult<Self> {
        let amount = Decimal::try_from(value)
            .map_err(|e| DomainError::validation(format!("unrepresentable amount {value}: {e}")))?;
        Self::usd(amount)
    }

    /// Returns the amount.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
