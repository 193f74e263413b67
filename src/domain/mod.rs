//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, money, errors)
//! - `membership` - Membership lifecycle calculator and package price list
//! - `member` - Member aggregate and front-desk profile
//! - `attendance` - Check-in records

pub mod attendance;
pub mod foundation;
pub mod member;
pub mod membership;
