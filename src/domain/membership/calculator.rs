//! Membership lifecycle calculator.
//!
//! Pure functions over dates and package labels. "Today" is always passed in
//! by the caller so results are deterministic.
//!
//! # Rules
//!
//! - Age is calendar age: the year difference, minus one until the birthday
//!   has been reached in the reference year.
//! - A month is exactly 30 days. Stored end dates depend on this, so it must
//!   not be replaced with calendar-month arithmetic.
//! - A membership is active while its end date is strictly after the
//!   reference date.

use chrono::{Datelike, Days, NaiveDate};

use super::{MembershipError, MembershipPackage, MembershipStatus};
use crate::domain::foundation::Money;

/// Input format for every date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of a package month in days.
pub const DAYS_PER_MONTH: u64 = 30;

/// Parses a `YYYY-MM-DD` form value.
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, MembershipError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| MembershipError::invalid_date(field, raw))
}

/// Parses a package duration ("3") as a positive number of months.
pub fn parse_duration_months(raw: &str) -> Result<u32, MembershipError> {
    match raw.trim().parse::<u32>() {
        Ok(months) if months > 0 => Ok(months),
        _ => Err(MembershipError::invalid_package(raw)),
    }
}

/// Calendar age in whole years on `reference_date`.
pub fn compute_age(
    birth_date: NaiveDate,
    reference_date: NaiveDate,
) -> Result<u32, MembershipError> {
    if birth_date > reference_date {
        return Err(MembershipError::BirthDateInFuture {
            birth_date,
            reference_date,
        });
    }

    let mut years = reference_date.year() - birth_date.year();
    if (reference_date.month(), reference_date.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }

    // birth_date <= reference_date keeps this non-negative
    Ok(years.max(0) as u32)
}

/// End date of a membership: `start_date + 30 * duration_months` days.
pub fn compute_end_date(
    start_date: NaiveDate,
    duration_months: u32,
) -> Result<NaiveDate, MembershipError> {
    if duration_months == 0 {
        return Err(MembershipError::invalid_package(duration_months.to_string()));
    }

    let days = DAYS_PER_MONTH * u64::from(duration_months);
    start_date
        .checked_add_days(Days::new(days))
        .ok_or_else(|| MembershipError::invalid_package(duration_months.to_string()))
}

/// Fee for a package label, or `None` for an unknown package.
pub fn compute_fee(package_label: &str) -> Option<Money> {
    MembershipPackage::from_label(package_label).map(|p| p.fee())
}

/// Active while `end_date` is after `reference_date`.
pub fn compute_status(end_date: NaiveDate, reference_date: NaiveDate) -> MembershipStatus {
    if end_date > reference_date {
        MembershipStatus::Active
    } else {
        MembershipStatus::Expired
    }
}
