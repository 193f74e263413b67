//! Membership package definitions.
//!
//! Represents the fixed duration/fee tiers sold at the front desk.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Currency, Money};

/// Membership package sold at the gym.
///
/// Labels are matched exactly and case-sensitively; anything else is an
/// unknown package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MembershipPackage {
    #[serde(rename = "1 Month")]
    OneMonth,
    #[serde(rename = "2 Months")]
    TwoMonths,
    #[serde(rename = "3 Months")]
    ThreeMonths,
    #[serde(rename = "4 Months")]
    FourMonths,
    #[serde(rename = "6 Months")]
    SixMonths,
    #[serde(rename = "12 Months")]
    TwelveMonths,
}

impl MembershipPackage {
    /// Every package, shortest first.
    pub const ALL: [MembershipPackage; 6] = [
        MembershipPackage::OneMonth,
        MembershipPackage::TwoMonths,
        MembershipPackage::ThreeMonths,
        MembershipPackage::FourMonths,
        MembershipPackage::SixMonths,
        MembershipPackage::TwelveMonths,
    ];

    /// Looks a package up by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }

    /// Returns the display label, e.g. "3 Months".
    pub fn label(&self) -> &'static str {
        match self {
            MembershipPackage::OneMonth => "1 Month",
            MembershipPackage::TwoMonths => "2 Months",
            MembershipPackage::ThreeMonths => "3 Months",
            MembershipPackage::FourMonths => "4 Months",
            MembershipPackage::SixMonths => "6 Months",
            MembershipPackage::TwelveMonths => "12 Months",
        }
    }

    /// Duration in (30-day) months.
    pub fn months(&self) -> u32 {
        match self {
            MembershipPackage::OneMonth => 1,
            MembershipPackage::TwoMonths => 2,
            MembershipPackage::ThreeMonths => 3,
            MembershipPackage::FourMonths => 4,
            MembershipPackage::SixMonths => 6,
            MembershipPackage::TwelveMonths => 12,
        }
    }

    /// Price of the package.
    pub fn fee(&self) -> Money {
        let amount = match self {
            MembershipPackage::OneMonth => 350,
            MembershipPackage::TwoMonths => 600,
            MembershipPackage::ThreeMonths => 800,
            MembershipPackage::FourMonths => 1000,
            MembershipPackage::SixMonths => 1400,
            MembershipPackage::TwelveMonths => 2400,
        };
        Money::whole(amount, Currency::Egp)
    }
}

impl std::fmt::Display for MembershipPackage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
