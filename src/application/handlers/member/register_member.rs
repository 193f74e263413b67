//! RegisterMemberHandler - Command handler for registering a new member.

use std::sync::Arc;

use crate::domain::member::{Member, MemberError, MemberInput, MemberProfile, NewMember};
use crate::ports::{Clock, MemberRepository};

/// Command to register a member from the front-desk form.
#[derive(Debug, Clone)]
pub struct RegisterMemberCommand {
    pub input: MemberInput,
}

/// Result of successful registration: the stored member.
pub type RegisterMemberResult = Member;

/// Handler for registering members.
///
/// A package that is not on the price list is accepted; the member is
/// stored with an unknown fee.
pub struct RegisterMemberHandler {
    repository: Arc<dyn MemberRepository>,
    clock: Arc<dyn Clock>,
}

impl RegisterMemberHandler {
    pub fn new(repository: Arc<dyn MemberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(
        &self,
        cmd: RegisterMemberCommand,
    ) -> Result<RegisterMemberResult, MemberError> {
        let profile = MemberProfile::parse(cmd.input)?;
        let new_member = NewMember::create(profile, self.clock.today())?;

        if !new_member.terms.is_known_package() {
            tracing::warn!(
                package = %new_member.terms.package_label,
                "registering member with unlisted package, fee unknown"
            );
        }

        let member = self.repository.save(&new_member).await?;
        tracing::info!(member_id = %member.id, name = %member.name(), "member registered");

        Ok(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, InMemoryGymStore};
    use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
    use crate::domain::member::{MemberChange, RenewalRecord};
    use crate::domain::membership::MembershipStatus;
    use crate::ports::MemberFilter;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct FailingRepository;

    #[async_trait]
    impl MemberRepository for FailingRepository {
        async fn save(&self, _member: &NewMember) -> Result<Member, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated save failure"))
        }
        async fn update(&self, _: &Member, _: &[MemberChange]) -> Result<(), DomainError> {
            Ok(())
        }
        async fn renew(&self, _: &Member, _: &RenewalRecord) -> Result<(), DomainError> {
            Ok(())
        }
        async fn find_by_id(&self, _: MemberId) -> Result<Option<Member>, DomainError> {
            Ok(None)
        }
        async fn search(&self, _: &MemberFilter) -> Result<Vec<Member>, DomainError> {
            Ok(Vec::new())
        }
        async fn delete(&self, _: MemberId) -> Result<(), DomainError> {
            Ok(())
        }
        async fn changes_for(&self, _: MemberId) -> Result<Vec<MemberChange>, DomainError> {
            Ok(Vec::new())
        }
        async fn renewals_for(&self, _: MemberId) -> Result<Vec<RenewalRecord>, DomainError> {
            Ok(Vec::new())
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::new(
            NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        ))
    }

    fn input(package: &str) -> MemberInput {
        MemberInput {
            name: "  yasmin ".to_string(),
            email: Some("yasmin@example.com".to_string()),
            birthdate: Some("2000-01-15".to_string()),
            starting_date: "2024-01-01".to_string(),
            package: package.to_string(),
            ..Default::default()
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn registers_member_with_computed_terms() {
        let store = Arc::new(InMemoryGymStore::new());
        let handler = RegisterMemberHandler::new(store.clone(), clock());

        let member = handler
            .handle(RegisterMemberCommand { input: input("3 Months") })
            .await
            .unwrap();

        assert_eq!(member.id.as_i32(), 1);
        assert_eq!(member.name(), "Yasmin");
        assert_eq!(member.age, Some(24));
        assert_eq!(member.terms.end_date, NaiveDate::from_ymd_opt(2024, 3, 31));
        assert_eq!(member.terms.fee.map(|f| f.major_units()), Some(800));
        assert_eq!(member.terms.status, Some(MembershipStatus::Active));
        assert!(store.find_by_id(member.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn unlisted_package_is_stored_without_fee() {
        let store = Arc::new(InMemoryGymStore::new());
        let handler = RegisterMemberHandler::new(store, clock());

        let member = handler
            .handle(RegisterMemberCommand { input: input("7 Months") })
            .await
            .unwrap();

        assert_eq!(member.terms.fee, None);
        assert_eq!(member.terms.duration_months, Some(7));
    }

    #[tokio::test]
    async fn invalid_birthdate_is_rejected_before_saving() {
        let store = Arc::new(InMemoryGymStore::new());
        let handler = RegisterMemberHandler::new(store.clone(), clock());

        let result = handler
            .handle(RegisterMemberCommand {
                input: MemberInput {
                    birthdate: Some("2000-13-40".to_string()),
                    ..input("1 Month")
                },
            })
            .await;

        assert!(matches!(result, Err(MemberError::InvalidDate { .. })));
        assert!(store.search(&MemberFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_is_reported() {
        let store = Arc::new(InMemoryGymStore::new());
        let handler = RegisterMemberHandler::new(store, clock());
        handler
            .handle(RegisterMemberCommand { input: input("1 Month") })
            .await
            .unwrap();

        let result = handler
            .handle(RegisterMemberCommand { input: input("1 Month") })
            .await;

        assert_eq!(
            result.unwrap_err(),
            MemberError::DuplicateEmail("yasmin@example.com".to_string())
        );
    }

    #[tokio::test]
    async fn repository_failure_is_infrastructure_error() {
        let handler = RegisterMemberHandler::new(Arc::new(FailingRepository), clock());

        let result = handler
            .handle(RegisterMemberCommand { input: input("1 Month") })
            .await;

        assert!(matches!(result, Err(MemberError::Infrastructure(_))));
    }
}
