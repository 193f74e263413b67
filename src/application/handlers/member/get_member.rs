//! GetMemberHandler - Query handler for a single member.

use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::{Member, MemberError};
use crate::ports::{Clock, MemberRepository};

/// Query to get a member by id.
#[derive(Debug, Clone)]
pub struct GetMemberQuery {
    pub member_id: MemberId,
}

pub type GetMemberResult = Member;

/// Handler for retrieving a member, with status as of today.
pub struct GetMemberHandler {
    repository: Arc<dyn MemberRepository>,
    clock: Arc<dyn Clock>,
}

impl GetMemberHandler {
    pub fn new(repository: Arc<dyn MemberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, query: GetMemberQuery) -> Result<GetMemberResult, MemberError> {
        let mut member = self
            .repository
            .find_by_id(query.member_id)
            .await?
            .ok_or(MemberError::NotFound(query.member_id))?;

        member.refresh_status(self.clock.today());
        Ok(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, InMemoryGymStore};
    use crate::domain::member::{MemberInput, MemberProfile, NewMember};
    use crate::domain::membership::MembershipStatus;
    use chrono::NaiveDate;

    async fn store_with_member() -> Arc<InMemoryGymStore> {
        let store = Arc::new(InMemoryGymStore::new());
        let profile = MemberProfile::parse(MemberInput {
            name: "karim".to_string(),
            starting_date: "2024-01-01".to_string(),
            package: "1 Month".to_string(),
            ..Default::default()
        })
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        store
            .save(&NewMember::create(profile, today).unwrap())
            .await
            .unwrap();
        store
    }

    fn clock_on(y: i32, m: u32, d: u32) -> Arc<FixedClock> {
        Arc::new(FixedClock::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(12, 0, 0).unwrap(),
        ))
    }

    #[tokio::test]
    async fn returns_member_with_current_status() {
        let handler = GetMemberHandler::new(store_with_member().await, clock_on(2024, 1, 31));

        let member = handler
            .handle(GetMemberQuery { member_id: MemberId::from_db(1) })
            .await
            .unwrap();

        assert_eq!(member.name(), "Karim");
        assert_eq!(member.terms.status, Some(MembershipStatus::Expired));
    }

    #[tokio::test]
    async fn missing_member_is_not_found() {
        let handler = GetMemberHandler::new(store_with_member().await, clock_on(2024, 1, 2));

        let result = handler
            .handle(GetMemberQuery { member_id: MemberId::from_db(42) })
            .await;

        assert_eq!(result.unwrap_err(), MemberError::NotFound(MemberId::from_db(42)));
    }
}
