//! Member repository port.
//!
//! Defines the contract for persisting members together with their change
//! and renewal logs. Implementations handle the actual database operations.
//!
//! # Design
//!
//! - **Serial ids**: `save` takes a `NewMember` and returns the stored `Member`
//! - **Atomic logs**: an update and its change-log entries (or a renewal and
//!   its renewal-log entry) are written together or not at all
//! - **Unique email**: a second member with the same email is rejected with
//!   `DuplicateMember`

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::member::{Member, MemberChange, NewMember, RenewalRecord};

/// Search filters; every present filter must match (case-insensitive substring).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberFilter {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl MemberFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }

    /// Whether `member` satisfies every filter.
    pub fn matches(&self, member: &Member) -> bool {
        fn contains(haystack: Option<&str>, needle: &Option<String>) -> bool {
            match needle {
                None => true,
                Some(needle) => haystack
                    .map(|h| h.to_lowercase().contains(&needle.to_lowercase()))
                    .unwrap_or(false),
            }
        }

        contains(Some(&member.profile.name), &self.name)
            && contains(member.profile.phone.as_deref(), &self.phone)
            && contains(member.profile.email.as_deref(), &self.email)
    }
}

/// Repository port for Member persistence.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Stores a new member and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `DuplicateMember` if the email is already taken
    /// - `DatabaseError` on persistence failure
    async fn save(&self, member: &NewMember) -> Result<Member, DomainError>;

    /// Updates a member and appends its change-log entries.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if the member doesn't exist
    /// - `DuplicateMember` if the new email is already taken
    /// - `DatabaseError` on persistence failure
    async fn update(&self, member: &Member, changes: &[MemberChange]) -> Result<(), DomainError>;

    /// Stores a renewed member and appends the renewal-log entry.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if the member doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn renew(&self, member: &Member, renewal: &RenewalRecord) -> Result<(), DomainError>;

    /// Finds a member by id. Returns `None` if not found.
    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, DomainError>;

    /// Lists members matching `filter`, newest first.
    async fn search(&self, filter: &MemberFilter) -> Result<Vec<Member>, DomainError>;

    /// Deletes a member; attendance and logs go with it.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if the member doesn't exist
    async fn delete(&self, id: MemberId) -> Result<(), DomainError>;

    /// Change-log entries for a member, oldest first.
    async fn changes_for(&self, id: MemberId) -> Result<Vec<MemberChange>, DomainError>;

    /// Renewal-log entries for a member, oldest first.
    async fn renewals_for(&self, id: MemberId) -> Result<Vec<RenewalRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::{MemberInput, MemberProfile};
    use chrono::NaiveDate;

    #[test]
    fn member_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn MemberRepository) {}
    }

    fn member() -> Member {
        let profile = MemberProfile::parse(MemberInput {
            name: "mona".to_string(),
            phone: Some("01012345678".to_string()),
            email: Some("Mona@Example.com".to_string()),
            starting_date: "2024-01-01".to_string(),
            package: "1 Month".to_string(),
            ..Default::default()
        })
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Member::from_new(MemberId::from_db(1), NewMember::create(profile, today).unwrap())
    }

    #[test]
    fn empty_filter_matches_everyone() {
        let filter = MemberFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&member()));
    }

    #[test]
    fn filters_are_case_insensitive_substrings() {
        let filter = MemberFilter {
            name: Some("MON".to_string()),
            email: Some("example".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&member()));
    }

    #[test]
    fn every_filter_must_match() {
        let filter = MemberFilter {
            name: Some("mona".to_string()),
            phone: Some("999".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&member()));
    }
}
