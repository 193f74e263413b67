//! HTTP adapter for attendance endpoints.
//!
//! - `POST /api/attendance/check-in` - Record a visit
//! - `GET /api/attendance` - Whole board
//! - `GET /api/attendance/today` - Today's check-ins
//! - `DELETE /api/attendance` - Empty the board

pub mod dto;
mod handlers;
mod routes;

pub use routes::attendance_routes;
