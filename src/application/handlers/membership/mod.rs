//! Membership handlers.
//!
//! ## Queries
//! - Quote a membership (end date, fee, status, age) before registering

mod quote_membership;

pub use quote_membership::{QuoteMembershipHandler, QuoteMembershipQuery, QuoteMembershipResult};
