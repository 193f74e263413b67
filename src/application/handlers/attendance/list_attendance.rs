//! ListAttendanceHandler - Query handler for the attendance board.

use std::sync::Arc;

use crate::domain::attendance::AttendanceEntry;
use crate::domain::member::MemberError;
use crate::ports::{AttendanceRepository, Clock};

/// Which part of the board to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttendanceScope {
    /// Every row, in board order.
    #[default]
    All,
    /// Rows checked in today, latest first.
    Today,
}

#[derive(Debug, Clone, Default)]
pub struct ListAttendanceQuery {
    pub scope: AttendanceScope,
}

pub type ListAttendanceResult = Vec<AttendanceEntry>;

pub struct ListAttendanceHandler {
    attendance: Arc<dyn AttendanceRepository>,
    clock: Arc<dyn Clock>,
}

impl ListAttendanceHandler {
    pub fn new(attendance: Arc<dyn AttendanceRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { attendance, clock }
    }

    pub async fn handle(
        &self,
        query: ListAttendanceQuery,
    ) -> Result<ListAttendanceResult, MemberError> {
        let entries = match query.scope {
            AttendanceScope::All => self.attendance.list_all().await?,
            AttendanceScope::Today => self.attendance.list_for_date(self.clock.today()).await?,
        };
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, InMemoryGymStore};
    use crate::domain::attendance::AttendanceRecord;
    use crate::domain::foundation::MemberId;
    use chrono::{NaiveDate, NaiveTime};

    fn record(member_id: i32, day: u32, hour: u32) -> AttendanceRecord {
        AttendanceRecord {
            member_id: MemberId::from_db(member_id),
            name: format!("Member {}", member_id),
            end_date: None,
            status: None,
            attendance_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            attendance_date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            day: "Monday".to_string(),
        }
    }

    async fn handler() -> ListAttendanceHandler {
        let store = Arc::new(InMemoryGymStore::new());
        store.record_check_in(&record(1, 7, 20)).await.unwrap();
        store.record_check_in(&record(2, 8, 9)).await.unwrap();
        store.record_check_in(&record(3, 8, 17)).await.unwrap();

        let now = NaiveDate::from_ymd_opt(2024, 1, 8)
            .unwrap()
            .and_hms_opt(21, 0, 0)
            .unwrap();
        ListAttendanceHandler::new(store, Arc::new(FixedClock::new(now)))
    }

    fn member_ids(entries: &[AttendanceEntry]) -> Vec<i32> {
        entries.iter().map(|e| e.record.member_id.as_i32()).collect()
    }

    #[tokio::test]
    async fn all_lists_board_order() {
        let entries = handler().await.handle(ListAttendanceQuery::default()).await.unwrap();
        assert_eq!(member_ids(&entries), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn today_lists_latest_first() {
        let entries = handler()
            .await
            .handle(ListAttendanceQuery {
                scope: AttendanceScope::Today,
            })
            .await
            .unwrap();
        assert_eq!(member_ids(&entries), vec![3, 2]);
    }
}
