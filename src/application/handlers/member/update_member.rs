//! UpdateMemberHandler - Command handler for editing a member.
//!
//! Every changed field lands in the member change log together with the
//! name of whoever made the edit.

use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::{Member, MemberChange, MemberError, MemberInput, MemberProfile};
use crate::ports::{Clock, MemberRepository};

/// Command carrying the full edited form.
#[derive(Debug, Clone)]
pub struct UpdateMemberCommand {
    pub member_id: MemberId,
    pub input: MemberInput,
    pub edited_by: Option<String>,
}

/// Result of a successful edit.
#[derive(Debug, Clone)]
pub struct UpdateMemberResult {
    pub member: Member,
    pub changes: Vec<MemberChange>,
}

pub struct UpdateMemberHandler {
    repository: Arc<dyn MemberRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateMemberHandler {
    pub fn new(repository: Arc<dyn MemberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(
        &self,
        cmd: UpdateMemberCommand,
    ) -> Result<UpdateMemberResult, MemberError> {
        let profile = MemberProfile::parse(cmd.input)?;

        let mut member = self
            .repository
            .find_by_id(cmd.member_id)
            .await?
            .ok_or(MemberError::NotFound(cmd.member_id))?;

        let now = self.clock.now();
        let edited_by = cmd
            .edited_by
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        let changes: Vec<MemberChange> = member
            .edit(profile, now.date())?
            .into_iter()
            .map(|change| change.into_log(&member, edited_by.clone(), now))
            .collect();

        self.repository.update(&member, &changes).await?;

        tracing::info!(
            member_id = %member.id,
            changed = changes.len(),
            edited_by = edited_by.as_deref().unwrap_or("-"),
            "member updated"
        );

        Ok(UpdateMemberResult { member, changes })
    }
}
