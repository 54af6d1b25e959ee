//! API Integration Tests
//!
//! Drive the full router (middleware included) over the in-memory store.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::util::ServiceExt;

mod common;

use common::{get, post_json, post_raw, setup_memory_app};

#[tokio::test]
async fn test_create_account_then_conflict() {
    let (app, _store) = setup_memory_app();
    let body = json!({ "document_number": "79754271011" });

    let (status, json) = post_json(&app, "/v1/accounts", &body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["account_id"].as_i64().unwrap() > 0);

    let (status, json) = post_json(&app, "/v1/accounts", &body).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error_code"], "account_already_exists");
}

#[tokio::test]
async fn test_create_account_invalid_document() {
    let (app, store) = setup_memory_app();

    let (status, json) =
        post_json(&app, "/v1/accounts", &json!({ "document_number": "76793495098" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_code"], "invalid_document_number");
    assert_eq!(store.account_inserts(), 0);
}

#[tokio::test]
async fn test_create_account_malformed_body() {
    let (app, _store) = setup_memory_app();

    let (status, json) = post_raw(&app, "/v1/accounts", r#"{"document_number": "1234567890""#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_code"], "invalid_request");

    let (status, _) = post_json(&app, "/v1/accounts", &json!({ "docuent_number": "79754271011" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_account_missing_content_type() {
    let (app, _store) = setup_memory_app();
    let req = Request::builder()
        .method("POST")
        .uri("/v1/accounts")
        .body(Body::from(r#"{"document_number":"79754271011"}"#))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_account_store_failure() {
    let (app, store) = setup_memory_app();
    store.set_unavailable(true);

    let (status, json) =
        post_json(&app, "/v1/accounts", &json!({ "document_number": "79754271011" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error_code"], "store_error");
    assert_eq!(json["error"], "Internal server error");
}

#[tokio::test]
async fn test_get_account() {
    let (app, _store) = setup_memory_app();
    let (_, created) =
        post_json(&app, "/v1/accounts", &json!({ "document_number": "19931301000167" })).await;
    let account_id = created["account_id"].as_i64().unwrap();

    let (status, json) = get(&app, &format!("/v1/accounts/{}", account_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["account_id"], account_id);
    assert_eq!(json["document_number"], "19931301000167");
}

#[tokio::test]
async fn test_get_account_errors() {
    let (app, store) = setup_memory_app();

    let (status, json) = get(&app, "/v1/accounts/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error_code"], "account_not_found");

    let (status, _) = get(&app, "/v1/accounts/invalid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    store.set_unavailable(true);
    let (status, _) = get(&app, "/v1/accounts/1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_credit_transaction_e2e() {
    let (app, store) = setup_memory_app();
    let (status, _) =
        post_json(&app, "/v1/accounts", &json!({ "document_number": "80502674075" })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = post_json(
        &app,
        "/v1/transactions",
        &json!({ "account_id": 1, "operation_type_id": 4, "amount": 100.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["transaction_id"].as_i64().unwrap() > 0);
    assert_eq!(store.transaction_inserts(), 1);
}

#[tokio::test]
async fn test_debit_transaction_e2e() {
    let (app, store) = setup_memory_app();
    post_json(&app, "/v1/accounts", &json!({ "document_number": "80502674075" })).await;

    let (status, _) = post_json(
        &app,
        "/v1/transactions",
        &json!({ "account_id": 1, "operation_type_id": 1, "amount": -50.25 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let stored = store.transactions().await;
    assert_eq!(stored[0].amount.to_string(), "-50.25");
}

#[tokio::test]
async fn test_sub_cent_amounts_stored_as_sent() {
    let (app, store) = setup_memory_app();
    post_json(&app, "/v1/accounts", &json!({ "document_number": "80502674075" })).await;

    for amount in [0.001, 1.005] {
        let (status, _) = post_json(
            &app,
            "/v1/transactions",
            &json!({ "account_id": 1, "operation_type_id": 4, "amount": amount }),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "amount: {}", amount);
    }

    let stored: Vec<String> = store
        .transactions()
        .await
        .iter()
        .map(|t| t.amount.to_string())
        .collect();
    assert_eq!(stored, vec!["0.001", "1.005"]);
}

#[tokio::test]
async fn test_transaction_rejections() {
    let (app, store) = setup_memory_app();
    post_json(&app, "/v1/accounts", &json!({ "document_number": "80502674075" })).await;

    let cases = [
        (json!({ "account_id": 10000, "operation_type_id": 40000, "amount": 0 }), "invalid_account"),
        (json!({ "account_id": 1, "operation_type_id": 40000, "amount": 10 }), "invalid_operation_type"),
        (json!({ "account_id": 1, "operation_type_id": 1, "amount": 10 }), "invalid_amount_for_operation_type"),
        (json!({ "account_id": 1, "operation_type_id": 4, "amount": -10 }), "invalid_amount_for_operation_type"),
        (json!({ "account_id": 1, "operation_type_id": 4, "amount": 0 }), "invalid_amount_for_operation_type"),
        (json!({ "account_id": "one", "operation_type_id": 4, "amount": 10 }), "invalid_request"),
        (json!({ "account_id": 1, "operation_type_id": 4, "amount": "100" }), "invalid_request"),
    ];

    for (body, expected_code) in cases {
        let (status, json) = post_json(&app, "/v1/transactions", &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(json["error_code"], expected_code, "body: {}", body);
    }

    assert_eq!(store.transaction_inserts(), 0);
}

#[tokio::test]
async fn test_transaction_store_failure() {
    let (app, store) = setup_memory_app();
    post_json(&app, "/v1/accounts", &json!({ "document_number": "80502674075" })).await;
    store.set_unavailable(true);

    let (status, _) = post_json(
        &app,
        "/v1/transactions",
        &json!({ "account_id": 1, "operation_type_id": 4, "amount": 100.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_app_info_and_health() {
    let (app, _store) = setup_memory_app();

    let (status, json) = get(&app, "/v1/app-info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["platform"].as_str().unwrap().contains('/'));

    let (status, json) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, "OK");
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let (app, _store) = setup_memory_app();
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();

    let request_id = response.headers().get("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(request_id.to_str().unwrap()).is_ok());
}
