//! Integration tests for the product CRUD surface.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;

use souk_integration_tests::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let (status, _) = app.request("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.request("GET", "/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_and_fetch_product() {
    let app = TestApp::new();

    let created = app.create_product("Brass Lantern", 42.5).await;
    let id = created["id"].as_str().unwrap();
    assert!(id.starts_with("prod_"));
    assert_eq!(created["category"], "Uncategorized");
    assert_eq!(created["description"], "");
    assert_eq!(created["likes"], 0);
    assert!(created.get("createdAt").is_some());
    assert!(created.get("updatedAt").is_none());

    let (status, fetched) = app.request("GET", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Brass Lantern");
    assert_eq!(fetched["price"], json!(42.5));
}

#[tokio::test]
async fn test_listing_reflects_creates() {
    let app = TestApp::new();
    app.create_product("A", 1.0).await;
    app.create_product("B", 2.0).await;

    let (status, body) = app.request("GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["name"], "A");
    assert_eq!(products[1]["name"], "B");
}

#[tokio::test]
async fn test_create_rejects_invalid_payloads() {
    let app = TestApp::new();

    // Non-positive price is a validation error.
    let (status, body) = app
        .request(
            "POST",
            "/products",
            Some(&json!({ "name": "X", "price": -5 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("price"));

    // Unknown fields are rejected at the boundary.
    let (status, _) = app
        .request(
            "POST",
            "/products",
            Some(&json!({ "name": "X", "price": 5, "discount": 1 })),
        )
        .await;
    assert_ne!(status, StatusCode::CREATED);

    // Nothing was persisted.
    let (_, body) = app.request("GET", "/products", None).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_patches_partially() {
    let app = TestApp::new();
    let created = app.create_product("Lantern", 10.0).await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) = app
        .request(
            "PUT",
            &format!("/products/{id}"),
            Some(&json!({ "price": 15, "category": "Lighting" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], json!(15.0));
    assert_eq!(updated["category"], "Lighting");
    assert_eq!(updated["name"], "Lantern");
    assert!(updated.get("updatedAt").is_some());
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let app = TestApp::new();
    let (status, body) = app
        .request("PUT", "/products/prod_missing", Some(&json!({ "price": 1 })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn test_update_rejects_non_positive_price() {
    let app = TestApp::new();
    let created = app.create_product("Lantern", 10.0).await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = app
        .request(
            "PUT",
            &format!("/products/{id}"),
            Some(&json!({ "price": 0 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, fetched) = app.request("GET", &format!("/products/{id}"), None).await;
    assert_eq!(fetched["price"], json!(10.0));
}

#[tokio::test]
async fn test_delete_product() {
    let app = TestApp::new();
    let created = app.create_product("Lantern", 10.0).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app
        .request("DELETE", &format!("/products/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = app.request("GET", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .request("DELETE", &format!("/products/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_document_shape_on_disk() {
    let app = TestApp::new();
    app.create_product("Lantern", 10.0).await;

    let raw = std::fs::read_to_string(app.data_file()).unwrap();
    let document: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(document["products"].is_array());
    assert_eq!(document["products"].as_array().unwrap().len(), 1);
}
