//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `api_router` mounts them all and adds the shared middleware.

pub mod attendance;
mod error;
pub mod members;
pub mod membership;
mod state;

pub use attendance::attendance_routes;
pub use error::{ApiError, ErrorResponse};
pub use members::member_routes;
pub use membership::membership_routes;
pub use state::GymAppState;

use axum::routing::get;
use axum::{Json, Router};
use http::{HeaderValue, Method};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /health - Liveness probe
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Builds the complete API router.
///
/// # Routes
///
/// - `GET /health`
/// - `/api/members/...` - see [`member_routes`]
/// - `/api/attendance/...` - see [`attendance_routes`]
/// - `/api/membership/...` - see [`membership_routes`]
pub fn api_router(state: GymAppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/members", member_routes())
        .nest("/api/attendance", attendance_routes())
        .nest("/api/membership", membership_routes())
        .with_state(state)
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy: any origin unless `cors_origins` lists specific ones.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, InMemoryGymStore};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router() -> Router {
        let store = Arc::new(InMemoryGymStore::new());
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let state = GymAppState::new(store.clone(), store, Arc::new(FixedClock::new(now)));
        api_router(state, &ServerConfig::default())
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = router()
            .oneshot(Request::builder().uri("/api/nothing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn cors_layer_accepts_configured_origins() {
        let config = ServerConfig {
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "bad\u{7f}origin".to_string(),
            ],
            ..Default::default()
        };
        let _ = cors_layer(&config);
    }
}
