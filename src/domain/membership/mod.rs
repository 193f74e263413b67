//! Membership domain module.
//!
//! Computes the lifecycle of a gym membership: age, end date, fee and
//! status.
//!
//! # Module Structure
//!
//! - `calculator` - Pure lifecycle functions
//! - `package` - MembershipPackage price list
//! - `status` - Derived MembershipStatus
//! - `terms` - Calculator applied to a starting date and package label

pub mod calculator;
mod errors;
mod package;
mod status;
mod terms;

pub use calculator::{
    compute_age, compute_end_date, compute_fee, compute_status, parse_date,
    parse_duration_months,
};
pub use errors::MembershipError;
pub use package::MembershipPackage;
pub use status::MembershipStatus;
pub use terms::{leading_months, MembershipQuote, MembershipTerms};
