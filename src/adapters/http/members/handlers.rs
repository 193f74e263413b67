//! HTTP handlers for member endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::member::{
    DeleteMemberCommand, GetMemberHistoryQuery, GetMemberQuery, RegisterMemberCommand,
    RenewMembershipCommand, SearchMembersQuery, UpdateMemberCommand,
};
use crate::domain::foundation::MemberId;
use crate::domain::member::MemberInput;

use super::dto::{
    MemberListResponse, MemberResponse, RenewMembershipRequest, RenewMembershipResponse,
    SearchMembersParams, UpdateMemberRequest, UpdateMemberResponse,
};
use crate::adapters::http::{ApiError, GymAppState};

fn parse_member_id(raw: &str) -> Result<MemberId, ApiError> {
    Ok(raw.parse::<MemberId>()?)
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/members - Search members
pub async fn search_members(
    State(state): State<GymAppState>,
    Query(params): Query<SearchMembersParams>,
) -> Result<impl IntoResponse, ApiError> {
    let members = state
        .search_members_handler()
        .handle(SearchMembersQuery {
            name: params.name,
            phone: params.phone,
            email: params.email,
        })
        .await?;

    Ok(Json(MemberListResponse::from(members)))
}

/// GET /api/members/:id - Get one member
pub async fn get_member(
    State(state): State<GymAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let member = state
        .get_member_handler()
        .handle(GetMemberQuery {
            member_id: parse_member_id(&id)?,
        })
        .await?;

    Ok(Json(MemberResponse::from(member)))
}

/// GET /api/members/:id/history - Change and renewal logs
pub async fn get_member_history(
    State(state): State<GymAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let history = state
        .member_history_handler()
        .handle(GetMemberHistoryQuery {
            member_id: parse_member_id(&id)?,
        })
        .await?;

    Ok(Json(history))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PUT/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/members - Register a member
pub async fn register_member(
    State(state): State<GymAppState>,
    payload: Result<Json<MemberInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload?;

    let member = state
        .register_member_handler()
        .handle(RegisterMemberCommand { input })
        .await?;

    Ok((StatusCode::CREATED, Json(MemberResponse::from(member))))
}

/// PUT /api/members/:id - Edit a member
pub async fn update_member(
    State(state): State<GymAppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateMemberRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let member_id = parse_member_id(&id)?;
    let Json(request) = payload?;

    let result = state
        .update_member_handler()
        .handle(UpdateMemberCommand {
            member_id,
            input: request.member,
            edited_by: request.edited_by,
        })
        .await?;

    Ok(Json(UpdateMemberResponse {
        member: result.member.into(),
        changes: result.changes,
    }))
}

/// POST /api/members/:id/renew - Renew onto a listed package
pub async fn renew_membership(
    State(state): State<GymAppState>,
    Path(id): Path<String>,
    payload: Result<Json<RenewMembershipRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let member_id = parse_member_id(&id)?;
    let Json(request) = payload?;

    let result = state
        .renew_membership_handler()
        .handle(RenewMembershipCommand {
            member_id,
            package: request.package,
            renewal_date: request.renewal_date,
            edited_by: request.edited_by,
        })
        .await?;

    Ok(Json(RenewMembershipResponse {
        member: result.member.into(),
        renewal: result.renewal.into(),
    }))
}

/// DELETE /api/members/:id - Remove a member
pub async fn delete_member(
    State(state): State<GymAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .delete_member_handler()
        .handle(DeleteMemberCommand {
            member_id: parse_member_id(&id)?,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
