//! Axum router configuration for membership pricing endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list_packages, quote_membership};
use crate::adapters::http::GymAppState;

/// # Routes
///
/// - `GET /packages` - Price list
/// - `POST /quote` - Terms for a starting date and package
pub fn membership_routes() -> Router<GymAppState> {
    Router::new()
        .route("/packages", get(list_packages))
        .route("/quote", post(quote_membership))
}
