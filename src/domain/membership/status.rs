//! Membership status.
//!
//! Derived from the end date on demand; there are no stored transitions.

use serde::{Deserialize, Serialize};

/// Whether a membership is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    /// End date lies in the future.
    Active,

    /// End date is today or in the past.
    Expired,
}

impl MembershipStatus {
    pub fn is_active(self) -> bool {
        matches!(self, MembershipStatus::Active)
    }

    /// Storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipStatus::Active => "active",
            MembershipStatus::Expired => "expired",
        }
    }

    /// Parses a stored value.
    ///
    /// Rows imported from the old system carry "VAL"/"EX"; those map to
    /// Active/Expired respectively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" | "val" => Some(MembershipStatus::Active),
            "expired" | "ex" => Some(MembershipStatus::Expired),
            _ => None,
        }
    }
}

impl std::fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_storage_values() {
        assert_eq!(MembershipStatus::parse("active"), Some(MembershipStatus::Active));
        assert_eq!(MembershipStatus::parse("expired"), Some(MembershipStatus::Expired));
    }

    #[test]
    fn parse_accepts_legacy_codes() {
        assert_eq!(MembershipStatus::parse("VAL"), Some(MembershipStatus::Active));
        assert_eq!(MembershipStatus::parse("EX"), Some(MembershipStatus::Expired));
    }

    #[test]
    fn only_active_is_active() {
        assert!(MembershipStatus::Active.is_active());
        assert!(!MembershipStatus::Expired.is_active());
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(MembershipStatus::parse("unknown"), None);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&MembershipStatus::Expired).unwrap();
        assert_eq!(json, "\"expired\"");
    }
}
