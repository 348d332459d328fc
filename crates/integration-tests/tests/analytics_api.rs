//! Integration tests for the analytics surface.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;

use souk_integration_tests::TestApp;

#[tokio::test]
async fn test_summary_on_empty_catalog() {
    let app = TestApp::new();

    let (status, body) = app.request("GET", "/products/analytics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalProducts"], 0);
    assert!(body["mostLoved"].as_array().unwrap().is_empty());
    assert!(body["mostOrdered"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_record_event_and_rankings() {
    let app = TestApp::new();
    let a = app.create_product("A", 10.0).await;
    let b = app.create_product("B", 10.0).await;
    let a_id = a["id"].as_str().unwrap();
    let b_id = b["id"].as_str().unwrap();

    // B gets two likes, A gets one order.
    for _ in 0..2 {
        let (status, _) = app
            .request(
                "POST",
                "/products/analytics",
                Some(&json!({ "productId": b_id, "action": "like" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, updated) = app
        .request(
            "POST",
            "/products/analytics",
            Some(&json!({ "productId": a_id, "action": "order" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["orders"], 1);
    assert_eq!(updated["likes"], 0);

    let (_, summary) = app.request("GET", "/products/analytics", None).await;
    assert_eq!(summary["totalProducts"], 2);
    assert_eq!(summary["mostLoved"][0]["id"], b_id);
    assert_eq!(summary["mostLoved"][0]["likes"], 2);
    assert_eq!(summary["mostOrdered"][0]["id"], a_id);
}

#[tokio::test]
async fn test_summary_caps_rankings_at_five() {
    let app = TestApp::new();
    for i in 0..7 {
        app.create_product(&format!("P{i}"), 10.0).await;
    }

    let (_, summary) = app.request("GET", "/products/analytics", None).await;
    assert_eq!(summary["totalProducts"], 7);
    assert_eq!(summary["mostLoved"].as_array().unwrap().len(), 5);
    assert_eq!(summary["mostOrdered"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_record_event_validation() {
    let app = TestApp::new();
    let a = app.create_product("A", 10.0).await;
    let a_id = a["id"].as_str().unwrap();

    // Missing fields.
    let (status, body) = app
        .request("POST", "/products/analytics", Some(&json!({})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Product ID and action are required");

    // Unknown action is rejected, not ignored.
    let (status, body) = app
        .request(
            "POST",
            "/products/analytics",
            Some(&json!({ "productId": a_id, "action": "boost" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid action. Use \"like\" or \"order\"");

    // Unknown product is a 404.
    let (status, _) = app
        .request(
            "POST",
            "/products/analytics",
            Some(&json!({ "productId": "prod_missing", "action": "like" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
