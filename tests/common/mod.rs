//! Shared setup for HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use serde_json::Value;
use tower::ServiceExt;

use rival_gym::adapters::http::{api_router, GymAppState};
use rival_gym::adapters::{FixedClock, InMemoryGymStore};
use rival_gym::config::ServerConfig;

/// Router over a fresh in-memory store, with the clock stopped at
/// 2024-01-15 09:30.
pub fn test_app() -> Router {
    let now = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    let store = Arc::new(InMemoryGymStore::new());
    let state = GymAppState::new(store.clone(), store, Arc::new(FixedClock::new(now)));
    api_router(state, &ServerConfig::default())
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Registers a member and returns the created body.
pub async fn register(app: &Router, body: Value) -> Value {
    let (status, json) = send(app, Method::POST, "/api/members", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    json
}
