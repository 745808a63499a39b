//! Monetary amounts.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::IdError;

/// An amount in the smallest currency unit (cents for USD).
///
/// Stored as `i64` to match Stripe's integer amounts and avoid floating point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(pub i64);

impl Cents {
    /// Return the raw amount.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Format as a dollar amount, e.g. `$17.00`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_dollars_string(self) -> String {
        format!("${:.2}", self.0 as f64 / 100.0)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A lowercase ISO 4217 currency code as Stripe reports it (`usd`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Create a currency from a three-letter code. The code is lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidCurrency`] unless `code` is three ASCII letters.
    pub fn new(code: &str) -> Result<Self, IdError> {
        if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_lowercase()))
        } else {
            Err(IdError::InvalidCurrency(code.to_string()))
        }
    }

    /// US dollars.
    #[must_use]
    pub fn usd() -> Self {
        Self("usd".to_string())
    }

    /// Return the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Currency {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}
