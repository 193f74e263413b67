//! GetMemberHistoryHandler - Query handler for a member's change and renewal logs.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::MemberId;
use crate::domain::member::{MemberChange, MemberError, RenewalRecord};
use crate::ports::MemberRepository;

#[derive(Debug, Clone)]
pub struct GetMemberHistoryQuery {
    pub member_id: MemberId,
}

/// Both logs for one member, oldest entries first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberHistory {
    pub member_id: MemberId,
    pub changes: Vec<MemberChange>,
    pub renewals: Vec<RenewalRecord>,
}

pub type GetMemberHistoryResult = MemberHistory;

pub struct GetMemberHistoryHandler {
    repository: Arc<dyn MemberRepository>,
}

impl GetMemberHistoryHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetMemberHistoryQuery,
    ) -> Result<GetMemberHistoryResult, MemberError> {
        if self.repository.find_by_id(query.member_id).await?.is_none() {
            return Err(MemberError::NotFound(query.member_id));
        }

        let changes = self.repository.changes_for(query.member_id).await?;
        let renewals = self.repository.renewals_for(query.member_id).await?;

        Ok(MemberHistory {
            member_id: query.member_id,
            changes,
            renewals,
        })
    }
}
