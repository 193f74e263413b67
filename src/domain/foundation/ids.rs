//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Identifier of a gym member.
///
/// Members are numbered by the database (serial primary key); the number is
/// what front-desk staff type in at check-in, so it is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(i32);

impl MemberId {
    /// Creates a MemberId, rejecting zero and negative numbers.
    pub fn new(id: i32) -> Result<Self, ValidationError> {
        if id < 1 {
            return Err(ValidationError::out_of_range(
                "member_id",
                1,
                i64::from(i32::MAX),
                i64::from(id),
            ));
        }
        Ok(Self(id))
    }

    /// Wraps a value read back from storage.
    pub fn from_db(id: i32) -> Self {
        Self(id)
    }

    /// Returns the inner number.
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MemberId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: i32 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::invalid_format("member_id", "must be a whole number"))?;
        Self::new(id)
    }
}
