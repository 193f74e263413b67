//! Axum router configuration for attendance endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{check_in, clear_attendance, list_attendance, list_today};
use crate::adapters::http::GymAppState;

/// # Routes
///
/// - `POST /check-in` - Record a visit
/// - `GET /` - Whole board
/// - `GET /today` - Today's check-ins
/// - `DELETE /` - Empty the board
pub fn attendance_routes() -> Router<GymAppState> {
    Router::new()
        .route("/", get(list_attendance).delete(clear_attendance))
        .route("/today", get(list_today))
        .route("/check-in", post(check_in))
}
