//! RenewMembershipHandler - Command handler for renewing a membership.

use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::{Member, MemberError, RenewalRecord};
use crate::domain::membership::{parse_date, MembershipPackage};
use crate::ports::{Clock, MemberRepository};

/// Command to renew a member onto a listed package.
#[derive(Debug, Clone)]
pub struct RenewMembershipCommand {
    pub member_id: MemberId,
    pub package: String,
    /// `YYYY-MM-DD`; today when absent.
    pub renewal_date: Option<String>,
    pub edited_by: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RenewMembershipResult {
    pub member: Member,
    pub renewal: RenewalRecord,
}

pub struct RenewMembershipHandler {
    repository: Arc<dyn MemberRepository>,
    clock: Arc<dyn Clock>,
}

impl RenewMembershipHandler {
    pub fn new(repository: Arc<dyn MemberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(
        &self,
        cmd: RenewMembershipCommand,
    ) -> Result<RenewMembershipResult, MemberError> {
        let label = cmd.package.trim();
        let package = MembershipPackage::from_label(label)
            .ok_or_else(|| MemberError::invalid_package(label))?;

        let now = self.clock.now();
        let today = now.date();
        let renewal_date = match cmd.renewal_date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => parse_date("renewal_date", raw)?,
            _ => today,
        };

        let mut member = self
            .repository
            .find_by_id(cmd.member_id)
            .await?
            .ok_or(MemberError::NotFound(cmd.member_id))?;

        member.renew(package, renewal_date, today);

        let renewal = RenewalRecord {
            member_id: member.id,
            package,
            renewal_date,
            fee: package.fee(),
            edited_by: cmd.edited_by.filter(|e| !e.trim().is_empty()),
            renewed_at: now,
        };

        self.repository.renew(&member, &renewal).await?;

        tracing::info!(
            member_id = %member.id,
            package = %package,
            renewal_date = %renewal_date,
            fee = %renewal.fee,
            "membership renewed"
        );

        Ok(RenewMembershipResult { member, renewal })
    }
}
