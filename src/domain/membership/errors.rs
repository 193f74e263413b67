//! Membership calculation errors.
//!
//! All of these are caller-input problems. They are surfaced as validation
//! feedback and never abort the process.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the membership lifecycle calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MembershipError {
    /// A date field did not parse as `YYYY-MM-DD`.
    #[error("Field '{field}' is not a valid YYYY-MM-DD date: '{value}'")]
    InvalidDate { field: String, value: String },

    /// The birth date lies after the date the age is computed for.
    #[error("Birth date {birth_date} is after {reference_date}")]
    BirthDateInFuture {
        birth_date: NaiveDate,
        reference_date: NaiveDate,
    },

    /// The package duration is not a positive number of months.
    #[error("Invalid package '{0}': duration must be a positive number of months")]
    InvalidPackage(String),
}

impl MembershipError {
    pub fn invalid_date(field: impl Into<String>, value: impl Into<String>) -> Self {
        MembershipError::InvalidDate {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn invalid_package(value: impl Into<String>) -> Self {
        MembershipError::InvalidPackage(value.into())
    }
}
