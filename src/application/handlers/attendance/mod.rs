//! Attendance handlers.
//!
//! ## Commands
//! - Checking a member in
//! - Clearing the board
//!
//! ## Queries
//! - Listing the board (all or today)

mod check_in;
mod clear_attendance;
mod list_attendance;

// Commands
pub use check_in::{CheckInCommand, CheckInHandler, CheckInResult};
pub use clear_attendance::{ClearAttendanceCommand, ClearAttendanceHandler, ClearAttendanceResult};

// Queries
pub use list_attendance::{
    AttendanceScope, ListAttendanceHandler, ListAttendanceQuery, ListAttendanceResult,
};
