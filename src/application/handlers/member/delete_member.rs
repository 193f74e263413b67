//! DeleteMemberHandler - Command handler for removing a member.

use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::MemberError;
use crate::ports::MemberRepository;

#[derive(Debug, Clone)]
pub struct DeleteMemberCommand {
    pub member_id: MemberId,
}

/// Deletes a member along with their board row and logs.
pub struct DeleteMemberHandler {
    repository: Arc<dyn MemberRepository>,
}

impl DeleteMemberHandler {
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteMemberCommand) -> Result<(), MemberError> {
        self.repository.delete(cmd.member_id).await?;
        tracing::info!(member_id = %cmd.member_id, "member deleted");
        Ok(())
    }
}
