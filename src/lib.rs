//! Rival Gym - membership management service
//!
//! Registers members, computes membership terms (end date, fee, status,
//! age) and records attendance check-ins, behind a JSON HTTP API.
//!
//! Layout follows a ports-and-adapters split:
//! - `domain` - membership calculator, members, attendance
//! - `ports` - repository and clock traits
//! - `application` - command and query handlers
//! - `adapters` - PostgreSQL, in-memory, clock and HTTP implementations

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;
