//! Money value object.
//!
//! Amounts are fixed-point: an `i64` count of minor units (piastres for the
//! Egyptian pound) plus a currency. The currency label is only joined to the
//! number when formatting for display.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Currencies the gym charges in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Egyptian pound, shown on receipts as "LE".
    Egp,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Egp => "EGP",
        }
    }

    /// Label used on printed prices.
    pub fn label(&self) -> &'static str {
        match self {
            Currency::Egp => "LE",
        }
    }

    /// Parses an ISO code as stored in the database.
    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        match code.trim().to_uppercase().as_str() {
            "EGP" | "LE" => Ok(Currency::Egp),
            other => Err(ValidationError::invalid_format(
                "currency",
                format!("unsupported currency '{}'", other),
            )),
        }
    }
}

/// Minor units per major unit for every supported currency.
const MINOR_PER_MAJOR: i64 = 100;

/// A monetary amount in a specific currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    minor_units: i64,
    currency: Currency,
}

impl Money {
    /// Creates an amount from whole major units (e.g. 800 LE).
    pub const fn whole(amount: i64, currency: Currency) -> Self {
        Self {
            minor_units: amount * MINOR_PER_MAJOR,
            currency,
        }
    }

    /// Creates an amount from minor units (e.g. 80000 piastres).
    pub const fn from_minor_units(minor_units: i64, currency: Currency) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    /// Whole major units, truncated toward zero.
    pub fn major_units(&self) -> i64 {
        self.minor_units / MINOR_PER_MAJOR
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fraction = (self.minor_units % MINOR_PER_MAJOR).abs();
        if fraction == 0 {
            write!(f, "{} {}", self.major_units(), self.currency.label())
        } else {
            write!(
                f,
                "{}.{:02} {}",
                self.major_units(),
                fraction,
                self.currency.label()
            )
        }
    }
}
