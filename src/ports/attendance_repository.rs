//! Attendance repository port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::attendance::{AttendanceEntry, AttendanceRecord};
use crate::domain::foundation::DomainError;

/// Repository port for the attendance board and its backup.
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Records a check-in.
    ///
    /// The board keeps one row per member: an existing row is overwritten,
    /// otherwise a new one is added. The check-in is also appended to the
    /// backup. Both writes succeed or fail together.
    async fn record_check_in(
        &self,
        record: &AttendanceRecord,
    ) -> Result<AttendanceEntry, DomainError>;

    /// The whole board in board order.
    async fn list_all(&self) -> Result<Vec<AttendanceEntry>, DomainError>;

    /// Board rows checked in on `date`, latest first.
    async fn list_for_date(&self, date: NaiveDate) -> Result<Vec<AttendanceEntry>, DomainError>;

    /// Empties the board, keeping the backup. Returns the number of rows removed.
    async fn clear(&self) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendance_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AttendanceRepository) {}
    }
}
