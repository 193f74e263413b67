//! CheckInHandler - Command handler for recording a member's visit.

use std::sync::Arc;

use crate::domain::attendance::{AttendanceEntry, AttendanceRecord};
use crate::domain::foundation::MemberId;
use crate::domain::member::MemberError;
use crate::ports::{AttendanceRepository, Clock, MemberRepository};

#[derive(Debug, Clone)]
pub struct CheckInCommand {
    pub member_id: MemberId,
}

/// Result of a check-in.
///
/// Expired members are let in; `expired` tells the desk to ask for a renewal.
#[derive(Debug, Clone)]
pub struct CheckInResult {
    pub entry: AttendanceEntry,
    pub expired: bool,
}

pub struct CheckInHandler {
    members: Arc<dyn MemberRepository>,
    attendance: Arc<dyn AttendanceRepository>,
    clock: Arc<dyn Clock>,
}

impl CheckInHandler {
    pub fn new(
        members: Arc<dyn MemberRepository>,
        attendance: Arc<dyn AttendanceRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            members,
            attendance,
            clock,
        }
    }

    pub async fn handle(&self, cmd: CheckInCommand) -> Result<CheckInResult, MemberError> {
        let member = self
            .members
            .find_by_id(cmd.member_id)
            .await?
            .ok_or(MemberError::NotFound(cmd.member_id))?;

        let record = AttendanceRecord::check_in(&member, self.clock.now());
        let expired = record.is_expired();
        let entry = self.attendance.record_check_in(&record).await?;

        if expired {
            tracing::warn!(
                member_id = %member.id,
                end_date = ?record.end_date,
                "expired member checked in"
            );
        } else {
            tracing::info!(member_id = %member.id, num = entry.num, "member checked in");
        }

        Ok(CheckInResult { entry, expired })
    }
}
