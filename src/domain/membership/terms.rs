//! Membership terms derived from a starting date and package label.
//!
//! This is the calculator applied the way the front desk uses it: the
//! duration comes from the leading number of the label ("7 Months" still
//! runs 7 months) while the fee needs an exact package match. An unknown
//! package leaves the fee unknown instead of failing the whole registration.

use chrono::NaiveDate;
use serde::Serialize;

use super::calculator::{
    compute_age, compute_end_date, compute_fee, compute_status, parse_duration_months,
};
use super::{MembershipError, MembershipPackage, MembershipStatus};
use crate::domain::foundation::Money;

/// Computed membership terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipTerms {
    /// Label as entered, trimmed.
    pub package_label: String,

    /// Duration taken from the label's leading number.
    pub duration_months: Option<u32>,

    pub end_date: Option<NaiveDate>,

    /// `None` when the label is not one of the listed packages.
    pub fee: Option<Money>,

    /// `None` when there is no end date to compare against.
    pub status: Option<MembershipStatus>,
}

impl MembershipTerms {
    /// Computes the terms of a membership starting on `starting_date`.
    pub fn compute(starting_date: NaiveDate, package_label: &str, today: NaiveDate) -> Self {
        let package_label = package_label.trim().to_string();
        let duration_months = leading_months(&package_label).ok();
        let end_date =
            duration_months.and_then(|months| compute_end_date(starting_date, months).ok());
        let fee = compute_fee(&package_label);
        let status = end_date.map(|end| compute_status(end, today));

        Self {
            package_label,
            duration_months,
            end_date,
            fee,
            status,
        }
    }

    /// The listed package, if the label matches one exactly.
    pub fn package(&self) -> Option<MembershipPackage> {
        MembershipPackage::from_label(&self.package_label)
    }

    pub fn is_known_package(&self) -> bool {
        self.package().is_some()
    }
}

/// Terms plus the customer's age, as shown before a member is registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipQuote {
    pub terms: MembershipTerms,
    pub age: Option<u32>,
}

impl MembershipQuote {
    /// Quotes a membership; a birth date is optional.
    ///
    /// # Errors
    ///
    /// Returns `BirthDateInFuture` when the birth date is after `today`.
    pub fn compute(
        starting_date: NaiveDate,
        package_label: &str,
        birthdate: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self, MembershipError> {
        let age = birthdate.map(|b| compute_age(b, today)).transpose()?;
        Ok(Self {
            terms: MembershipTerms::compute(starting_date, package_label, today),
            age,
        })
    }
}

/// Duration of a label such as "3 Months".
pub fn leading_months(package_label: &str) -> Result<u32, MembershipError> {
    let first = package_label
        .split_whitespace()
        .next()
        .ok_or_else(|| MembershipError::invalid_package(package_label))?;
    parse_duration_months(first).map_err(|_| MembershipError::invalid_package(package_label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::membership::calculator::parse_date;

    fn date(s: &str) -> NaiveDate {
        parse_date("test", s).unwrap()
    }

    #[test]
    fn known_package_gets_all_terms() {
        let terms = MembershipTerms::compute(date("2024-01-01"), "3 Months", date("2024-02-01"));

        assert_eq!(terms.duration_months, Some(3));
        assert_eq!(terms.end_date, Some(date("2024-03-31")));
        assert_eq!(terms.fee.map(|f| f.major_units()), Some(800));
        assert_eq!(terms.status, Some(MembershipStatus::Active));
        assert_eq!(terms.package(), Some(MembershipPackage::ThreeMonths));
    }

    #[test]
    fn unlisted_duration_keeps_dates_but_has_no_fee() {
        let terms = MembershipTerms::compute(date("2024-01-01"), "7 Months", date("2024-01-01"));

        assert_eq!(terms.duration_months, Some(7));
        assert_eq!(terms.end_date, Some(date("2024-07-29")));
        assert_eq!(terms.fee, None);
        assert!(!terms.is_known_package());
    }

    #[test]
    fn unparseable_label_leaves_everything_unknown() {
        let terms = MembershipTerms::compute(date("2024-01-01"), "forever", date("2024-01-01"));

        assert_eq!(terms.duration_months, None);
        assert_eq!(terms.end_date, None);
        assert_eq!(terms.fee, None);
        assert_eq!(terms.status, None);
    }

    #[test]
    fn fee_needs_the_exact_label() {
        let terms =
            MembershipTerms::compute(date("2024-01-01"), "  6   Months ", date("2024-01-01"));

        assert_eq!(terms.package_label, "6   Months");
        assert_eq!(terms.fee, None);
        assert!(!terms.is_known_package());
        assert_eq!(terms.duration_months, Some(6));
        assert_eq!(terms.end_date, Some(date("2024-06-29")));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let terms = MembershipTerms::compute(date("2024-01-01"), " 6 Months ", date("2024-01-01"));
        assert_eq!(terms.package_label, "6 Months");
        assert_eq!(terms.fee.map(|f| f.major_units()), Some(1400));
    }

    #[test]
    fn expired_when_end_date_has_passed() {
        let terms = MembershipTerms::compute(date("2023-01-01"), "1 Month", date("2024-01-01"));
        assert_eq!(terms.status, Some(MembershipStatus::Expired));
    }

    #[test]
    fn quote_includes_age_when_birthdate_given() {
        let quote = MembershipQuote::compute(
            date("2024-06-15"),
            "1 Month",
            Some(date("2000-06-15")),
            date("2024-06-15"),
        )
        .unwrap();
        assert_eq!(quote.age, Some(24));
    }

    #[test]
    fn quote_without_birthdate_has_no_age() {
        let quote =
            MembershipQuote::compute(date("2024-06-15"), "1 Month", None, date("2024-06-15"))
                .unwrap();
        assert_eq!(quote.age, None);
    }

    #[test]
    fn leading_months_rejects_empty_label() {
        assert!(leading_months("").is_err());
        assert_eq!(leading_months("12 Months"), Ok(12));
    }
}
