//! ClearAttendanceHandler - Command handler for emptying the attendance board.

use std::sync::Arc;

use crate::domain::member::MemberError;
use crate::ports::AttendanceRepository;

#[derive(Debug, Clone, Default)]
pub struct ClearAttendanceCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearAttendanceResult {
    pub removed: u64,
}

/// Empties the board. The backup is untouched.
pub struct ClearAttendanceHandler {
    attendance: Arc<dyn AttendanceRepository>,
}

impl ClearAttendanceHandler {
    pub fn new(attendance: Arc<dyn AttendanceRepository>) -> Self {
        Self { attendance }
    }

    pub async fn handle(
        &self,
        _cmd: ClearAttendanceCommand,
    ) -> Result<ClearAttendanceResult, MemberError> {
        let removed = self.attendance.clear().await?;
        tracing::info!(removed, "attendance board cleared");
        Ok(ClearAttendanceResult { removed })
    }
}
