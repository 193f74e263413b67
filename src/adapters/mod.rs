//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `clock` - System and fixed clocks
//! - `memory` - In-memory repositories for tests and database-less runs
//! - `postgres` - PostgreSQL repositories
//! - `http` - axum REST API

pub mod clock;
pub mod http;
pub mod memory;
pub mod postgres;

pub use clock::{FixedClock, SystemClock};
pub use memory::InMemoryGymStore;
pub use postgres::{PostgresAttendanceRepository, PostgresMemberRepository};
