use async_trait::async_trait;
use chrono::NaiveDate;

use super::InMemoryGymStore;
use crate::domain::attendance::{AttendanceEntry, AttendanceRecord};
use crate::domain::foundation::DomainError;
use crate::ports::AttendanceRepository;

#[async_trait]
impl AttendanceRepository for InMemoryGymStore {
    async fn record_check_in(
        &self,
        record: &AttendanceRecord,
    ) -> Result<AttendanceEntry, DomainError> {
        let mut state = self.write()?;

        let existing = state
            .board
            .iter_mut()
            .find(|e| e.record.member_id == record.member_id)
            .map(|entry| {
                entry.record = record.clone();
                entry.clone()
            });
        let entry = match existing {
            Some(entry) => entry,
            None => {
                state.last_num += 1;
                let entry = AttendanceEntry {
                    num: state.last_num,
                    record: record.clone(),
                };
                state.board.push(entry.clone());
                entry
            }
        };

        state.backup.push(record.clone());
        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<AttendanceEntry>, DomainError> {
        let mut board = self.read()?.board.clone();
        board.sort_by_key(|e| e.num);
        Ok(board)
    }

    async fn list_for_date(&self, date: NaiveDate) -> Result<Vec<AttendanceEntry>, DomainError> {
        let mut entries: Vec<AttendanceEntry> = self
            .read()?
            .board
            .iter()
            .filter(|e| e.record.attendance_date == date)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.record.attendance_time.cmp(&a.record.attendance_time));
        Ok(entries)
    }

    async fn clear(&self) -> Result<u64, DomainError> {
        let mut state = self.write()?;
        let removed = state.board.len() as u64;
        state.board.clear();
        Ok(removed)
    }
}
