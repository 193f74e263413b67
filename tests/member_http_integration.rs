//! Integration tests for member and membership HTTP endpoints.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{register, send, test_app};

fn sara() -> serde_json::Value {
    json!({
        "name": "  sARA  ",
        "email": "sara@example.com",
        "phone": "01000000001",
        "birthdate": "1995-03-10",
        "starting_date": "2024-01-01",
        "package": "1 Month"
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Registration
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn register_computes_membership_terms() {
    let app = test_app();

    let member = register(&app, sara()).await;

    assert_eq!(member["id"], 1);
    assert_eq!(member["name"], "Sara");
    assert_eq!(member["age"], 28);
    assert_eq!(member["end_date"], "2024-01-31");
    assert_eq!(member["duration_months"], 1);
    assert_eq!(member["fee"]["display"], "350 LE");
    assert_eq!(member["fee"]["currency"], "EGP");
    assert_eq!(member["status"], "active");
    assert_eq!(member["invitations"], 0);
    assert_eq!(member["freeze_used"], false);
}

#[tokio::test]
async fn register_with_unknown_package_has_no_fee() {
    let app = test_app();

    let member = register(
        &app,
        json!({ "name": "omar", "starting_date": "2024-01-01", "package": "Custom" }),
    )
    .await;

    assert_eq!(member["package"], "Custom");
    assert!(member["fee"].is_null());
    assert!(member["end_date"].is_null());
    assert!(member["status"].is_null());
}

#[tokio::test]
async fn register_charges_only_exact_package_labels() {
    let app = test_app();

    let member = register(
        &app,
        json!({ "name": "omar", "starting_date": "2024-01-01", "package": "6  Months" }),
    )
    .await;

    assert_eq!(member["package"], "6  Months");
    assert_eq!(member["duration_months"], 6);
    assert_eq!(member["end_date"], "2024-06-29");
    assert!(member["fee"].is_null());
}

#[tokio::test]
async fn register_rejects_malformed_date() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/members",
        Some(json!({ "name": "omar", "starting_date": "01/01/2024", "package": "1 Month" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "INVALID_DATE");
    assert_eq!(body["details"]["field"], "starting_date");
}

#[tokio::test]
async fn register_rejects_birthdate_in_the_future() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/members",
        Some(json!({
            "name": "omar",
            "birthdate": "2030-01-01",
            "starting_date": "2024-01-01",
            "package": "1 Month"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["field"], "birthdate");
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let app = test_app();
    register(&app, sara()).await;

    let (status, body) = send(&app, Method::POST, "/api/members", Some(sara())).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error_code"], "DUPLICATE_MEMBER");
}

#[tokio::test]
async fn malformed_body_is_a_validation_error() {
    let app = test_app();

    let (status, body) = send(&app, Method::POST, "/api/members", Some(json!({ "name": 5 }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["field"], "body");
}

// ════════════════════════════════════════════════════════════════════════════════
// Lookup
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn get_member_by_id() {
    let app = test_app();
    register(&app, sara()).await;

    let (status, body) = send(&app, Method::GET, "/api/members/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "sara@example.com");
}

#[tokio::test]
async fn missing_member_is_not_found() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api/members/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_code"], "MEMBER_NOT_FOUND");
}

#[tokio::test]
async fn non_numeric_id_is_a_bad_request() {
    let app = test_app();

    let (status, _) = send(&app, Method::GET, "/api/members/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_filters_and_orders_newest_first() {
    let app = test_app();
    register(&app, sara()).await;
    register(
        &app,
        json!({
            "name": "sameh",
            "phone": "0122",
            "starting_date": "2024-01-02",
            "package": "3 Months"
        }),
    )
    .await;
    register(
        &app,
        json!({ "name": "omar", "starting_date": "2024-01-03", "package": "1 Month" }),
    )
    .await;

    let (status, all) = send(&app, Method::GET, "/api/members", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all["count"], 3);
    assert_eq!(all["members"][0]["name"], "Omar");

    let (_, by_name) = send(&app, Method::GET, "/api/members?name=SA", None).await;
    assert_eq!(by_name["count"], 2);
    assert_eq!(by_name["members"][0]["name"], "Sameh");
    assert_eq!(by_name["members"][1]["name"], "Sara");

    let (_, by_name_and_phone) =
        send(&app, Method::GET, "/api/members?name=sa&phone=0122", None).await;
    assert_eq!(by_name_and_phone["count"], 1);
    assert_eq!(by_name_and_phone["members"][0]["name"], "Sameh");
}

// ════════════════════════════════════════════════════════════════════════════════
// Edit, renew, delete
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn update_recomputes_terms_and_logs_changes() {
    let app = test_app();
    register(&app, sara()).await;

    let mut edit = sara();
    edit["package"] = json!("3 Months");
    edit["edited_by"] = json!("front desk");
    let (status, body) = send(&app, Method::PUT, "/api/members/1", Some(edit)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["member"]["end_date"], "2024-03-31");
    assert_eq!(body["member"]["fee"]["display"], "800 LE");

    let fields: Vec<&str> = body["changes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["field_name"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["package", "end_date", "fee"]);

    let (_, history) = send(&app, Method::GET, "/api/members/1/history", None).await;
    assert_eq!(history["changes"].as_array().unwrap().len(), 3);
    assert_eq!(history["changes"][0]["edited_by"], "front desk");
}

#[tokio::test]
async fn update_missing_member_is_not_found() {
    let app = test_app();

    let (status, _) = send(&app, Method::PUT, "/api/members/9", Some(sara())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn renew_starts_a_new_period() {
    let app = test_app();
    register(&app, sara()).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/members/1/renew",
        Some(json!({ "package": "6 Months", "renewal_date": "2024-02-01" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["member"]["starting_date"], "2024-02-01");
    assert_eq!(body["member"]["package"], "6 Months");
    assert_eq!(body["member"]["end_date"], "2024-07-30");
    assert_eq!(body["renewal"]["fee"]["display"], "1400 LE");

    let (_, history) = send(&app, Method::GET, "/api/members/1/history", None).await;
    assert_eq!(history["renewals"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn renew_rejects_unlisted_package() {
    let app = test_app();
    register(&app, sara()).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/members/1/renew",
        Some(json!({ "package": "5 Months" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "INVALID_PACKAGE");
}

#[tokio::test]
async fn delete_removes_member() {
    let app = test_app();
    register(&app, sara()).await;

    let (status, _) = send(&app, Method::DELETE, "/api/members/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, "/api/members/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/api/members/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ════════════════════════════════════════════════════════════════════════════════
// Pricing
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn packages_list_the_price_table() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api/membership/packages", None).await;

    assert_eq!(status, StatusCode::OK);
    let packages = body["packages"].as_array().unwrap();
    assert_eq!(packages.len(), 6);
    assert_eq!(packages[0]["label"], "1 Month");
    assert_eq!(packages[0]["fee"]["display"], "350 LE");
    assert_eq!(packages[5]["months"], 12);
}

#[tokio::test]
async fn quote_previews_terms() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/membership/quote",
        Some(json!({
            "starting_date": "2024-01-01",
            "package": "3 Months",
            "birthdate": "2000-01-15"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["known_package"], true);
    assert_eq!(body["end_date"], "2024-03-31");
    assert_eq!(body["fee"]["display"], "800 LE");
    assert_eq!(body["status"], "active");
    assert_eq!(body["age"], 24);
}

#[tokio::test]
async fn quote_with_future_birthdate_is_a_validation_error() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/membership/quote",
        Some(json!({
            "starting_date": "2024-01-01",
            "package": "1 Month",
            "birthdate": "2030-05-01"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["field"], "birthdate");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
