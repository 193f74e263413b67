//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MemberRepository` - Members with their change and renewal logs
//! - `AttendanceRepository` - Attendance board and backup
//! - `Clock` - Current date and time

mod attendance_repository;
mod clock;
mod member_repository;

pub use attendance_repository::AttendanceRepository;
pub use clock::Clock;
pub use member_repository::{MemberFilter, MemberRepository};
