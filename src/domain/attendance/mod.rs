//! Attendance domain module.
//!
//! The attendance board holds the latest check-in of each member; every
//! check-in is additionally kept in the attendance backup.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::domain::foundation::MemberId;
use crate::domain::member::Member;
use crate::domain::membership::{compute_status, MembershipStatus};

/// A member's check-in, with a snapshot of their membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub member_id: MemberId,
    pub name: String,
    pub end_date: Option<NaiveDate>,
    /// Status as of the check-in date.
    pub status: Option<MembershipStatus>,
    pub attendance_time: NaiveTime,
    pub attendance_date: NaiveDate,
    /// Weekday name, e.g. "Monday".
    pub day: String,
}

impl AttendanceRecord {
    /// Records `member` checking in at `now`.
    pub fn check_in(member: &Member, now: NaiveDateTime) -> Self {
        let today = now.date();
        let attendance_time = now.time().with_nanosecond(0).unwrap_or_else(|| now.time());

        Self {
            member_id: member.id,
            name: member.name().to_string(),
            end_date: member.terms.end_date,
            status: member.terms.end_date.map(|end| compute_status(end, today)),
            attendance_time,
            attendance_date: today,
            day: now.format("%A").to_string(),
        }
    }

    /// Whether the member checked in without a running membership.
    pub fn is_expired(&self) -> bool {
        !self.status.is_some_and(|status| status.is_active())
    }
}

/// A row on the attendance board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceEntry {
    /// Board position, assigned on first check-in.
    pub num: i32,
    #[serde(flatten)]
    pub record: AttendanceRecord,
}
