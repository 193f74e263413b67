//! HTTP handlers for membership pricing endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::handlers::membership::QuoteMembershipQuery;
use crate::domain::membership::MembershipPackage;

use super::dto::{PackageResponse, PackagesResponse, QuoteRequest, QuoteResponse};
use crate::adapters::http::{ApiError, GymAppState};

/// GET /api/membership/packages - The price list
pub async fn list_packages() -> impl IntoResponse {
    Json(PackagesResponse {
        packages: MembershipPackage::ALL
            .into_iter()
            .map(PackageResponse::from)
            .collect(),
    })
}

/// POST /api/membership/quote - Terms for a starting date and package
pub async fn quote_membership(
    State(state): State<GymAppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let quote = state.quote_membership_handler().handle(QuoteMembershipQuery {
        starting_date: request.starting_date,
        package: request.package,
        birthdate: request.birthdate,
    })?;

    Ok(Json(QuoteResponse::from(quote)))
}
