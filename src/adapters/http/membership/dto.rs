//! Request and response DTOs for membership pricing endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;
use crate::domain::membership::{MembershipPackage, MembershipQuote, MembershipStatus};

/// A price as stored and as printed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoneyResponse {
    pub minor_units: i64,
    pub currency: String,
    /// e.g. "800 LE"
    pub display: String,
}

impl From<Money> for MoneyResponse {
    fn from(money: Money) -> Self {
        Self {
            minor_units: money.minor_units(),
            currency: money.currency().code().to_string(),
            display: money.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageResponse {
    pub label: String,
    pub months: u32,
    pub fee: MoneyResponse,
}

impl From<MembershipPackage> for PackageResponse {
    fn from(package: MembershipPackage) -> Self {
        Self {
            label: package.label().to_string(),
            months: package.months(),
            fee: package.fee().into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagesResponse {
    pub packages: Vec<PackageResponse>,
}

/// Request body for POST /api/membership/quote
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    pub starting_date: String,
    pub package: String,
    #[serde(default)]
    pub birthdate: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub package: String,
    pub known_package: bool,
    pub duration_months: Option<u32>,
    pub end_date: Option<NaiveDate>,
    pub fee: Option<MoneyResponse>,
    pub status: Option<MembershipStatus>,
    pub age: Option<u32>,
}

impl From<MembershipQuote> for QuoteResponse {
    fn from(quote: MembershipQuote) -> Self {
        let known_package = quote.terms.is_known_package();
        Self {
            package: quote.terms.package_label,
            known_package,
            duration_months: quote.terms.duration_months,
            end_date: quote.terms.end_date,
            fee: quote.terms.fee.map(MoneyResponse::from),
            status: quote.terms.status,
            age: quote.age,
        }
    }
}
