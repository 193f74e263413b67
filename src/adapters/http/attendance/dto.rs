//! Request and response DTOs for attendance endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::attendance::AttendanceEntry;

/// Request body for POST /api/attendance/check-in
///
/// The id is typed in at the desk, so both `7` and `"7"` are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInRequest {
    pub member_id: MemberIdInput,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MemberIdInput {
    Number(i64),
    Text(String),
}

impl MemberIdInput {
    pub fn as_text(&self) -> String {
        match self {
            MemberIdInput::Number(n) => n.to_string(),
            MemberIdInput::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckInResponse {
    #[serde(flatten)]
    pub entry: AttendanceEntry,
    pub expired: bool,
    pub message: String,
}

impl CheckInResponse {
    pub fn new(entry: AttendanceEntry, expired: bool) -> Self {
        let message = if expired {
            format!("{}'s membership has expired", entry.record.name)
        } else {
            format!("Welcome, {}", entry.record.name)
        };
        Self {
            entry,
            expired,
            message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceListResponse {
    pub entries: Vec<AttendanceEntry>,
    pub count: usize,
}

impl From<Vec<AttendanceEntry>> for AttendanceListResponse {
    fn from(entries: Vec<AttendanceEntry>) -> Self {
        Self {
            count: entries.len(),
            entries,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearAttendanceResponse {
    pub removed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_id_accepts_number_or_text() {
        let numeric: CheckInRequest = serde_json::from_str(r#"{"member_id": 12}"#).unwrap();
        let text: CheckInRequest = serde_json::from_str(r#"{"member_id": " 12 "}"#).unwrap();

        assert_eq!(numeric.member_id.as_text(), "12");
        assert_eq!(text.member_id.as_text(), " 12 ");
    }
}
