//! Integration tests for the checkout handoff.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;

use souk_integration_tests::TestApp;

/// A cart line: the product snapshot plus a quantity, as the client stores it.
fn cart_item(product: &serde_json::Value, quantity: u32) -> serde_json::Value {
    let mut line = product.as_object().unwrap().clone();
    line.insert("quantity".to_string(), json!(quantity));
    serde_json::Value::Object(line)
}

#[tokio::test]
async fn test_checkout_formats_order_and_link() {
    let app = TestApp::new();
    let a = app.create_product("Brass Lantern", 12.5).await;
    let b = app.create_product("Clay Tagine", 34.0).await;

    let items = json!({ "items": [cart_item(&a, 2), cart_item(&b, 1)] });

    let (status, body) = app.request("POST", "/checkout", Some(&items)).await;
    assert_eq!(status, StatusCode::OK);

    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Order Summary"));
    assert!(message.contains("Brass Lantern"));
    assert!(message.contains("Qty: 2 x $12.50 = $25.00"));
    assert!(message.contains("*Total: $59.00*"));

    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("https://wa.me/15551234567?text="));
    assert!(!url.contains(' '));
}

#[tokio::test]
async fn test_checkout_rejects_empty_cart() {
    let app = TestApp::new();
    let (status, body) = app
        .request("POST", "/checkout", Some(&json!({ "items": [] })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "cart is empty");
}
