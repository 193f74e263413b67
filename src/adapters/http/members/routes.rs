//! Axum router configuration for member endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    delete_member, get_member, get_member_history, register_member, renew_membership,
    search_members, update_member,
};
use crate::adapters::http::GymAppState;

/// Create the member API router.
///
/// # Routes
///
/// - `POST /` - Register a member
/// - `GET /` - Search members (`name`, `phone`, `email` query parameters)
/// - `GET /:id` - Get a member
/// - `PUT /:id` - Edit a member
/// - `DELETE /:id` - Delete a member
/// - `POST /:id/renew` - Renew a membership
/// - `GET /:id/history` - Change and renewal logs
pub fn member_routes() -> Router<GymAppState> {
    Router::new()
        .route("/", post(register_member).get(search_members))
        .route(
            "/:id",
            get(get_member).put(update_member).delete(delete_member),
        )
        .route("/:id/renew", post(renew_membership))
        .route("/:id/history", get(get_member_history))
}
