//! HTTP handlers for attendance endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::attendance::{
    AttendanceScope, CheckInCommand, ClearAttendanceCommand, ListAttendanceQuery,
};
use crate::domain::foundation::MemberId;

use super::dto::{AttendanceListResponse, CheckInRequest, CheckInResponse, ClearAttendanceResponse};
use crate::adapters::http::{ApiError, GymAppState};

/// POST /api/attendance/check-in - Record a visit
pub async fn check_in(
    State(state): State<GymAppState>,
    payload: Result<Json<CheckInRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let member_id: MemberId = request.member_id.as_text().parse()?;

    let result = state
        .check_in_handler()
        .handle(CheckInCommand { member_id })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CheckInResponse::new(result.entry, result.expired)),
    ))
}

/// GET /api/attendance - The whole board
pub async fn list_attendance(
    State(state): State<GymAppState>,
) -> Result<impl IntoResponse, ApiError> {
    list(state, AttendanceScope::All).await
}

/// GET /api/attendance/today - Today's check-ins, latest first
pub async fn list_today(State(state): State<GymAppState>) -> Result<impl IntoResponse, ApiError> {
    list(state, AttendanceScope::Today).await
}

async fn list(
    state: GymAppState,
    scope: AttendanceScope,
) -> Result<Json<AttendanceListResponse>, ApiError> {
    let entries = state
        .list_attendance_handler()
        .handle(ListAttendanceQuery { scope })
        .await?;

    Ok(Json(AttendanceListResponse::from(entries)))
}

/// DELETE /api/attendance - Empty the board
pub async fn clear_attendance(
    State(state): State<GymAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .clear_attendance_handler()
        .handle(ClearAttendanceCommand)
        .await?;

    Ok(Json(ClearAttendanceResponse {
        removed: result.removed,
    }))
}
