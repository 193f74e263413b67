//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the gym domain.

mod errors;
mod ids;
mod money;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::MemberId;
pub use money::{Currency, Money};
