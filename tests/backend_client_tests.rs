//! Backend client against a simulated Doppio API.

mod common;

use std::time::Duration;

use doppio_coffee_mcp::backend::{BackendClient, BackendError, CoffeeFilters};
use doppio_coffee_mcp::model::{CheckoutItem, Preparation, Size};
use httpmock::prelude::*;
use serde_json::json;

use common::{backend, checkout_response, coffee, variant, API_KEY};

#[tokio::test]
async fn list_coffees_posts_filters_with_auth_headers() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/coffees")
            .header("x-api-key", API_KEY)
            .header("content-type", "application/json")
            .json_body(json!({ "preparation": "espresso", "size": "large" }));
        then.status(200).json_body(json!({
            "coffees": [coffee("c1", "Brazil Santos", vec![variant("v1", "large", 1000, 28.5, true)])]
        }));
    });

    let client = backend(&server.base_url());
    let filters = CoffeeFilters {
        preparation: Some(Preparation::Espresso),
        size: Some(Size::Large),
        ..Default::default()
    };
    let coffees = client.list_coffees(&filters).await.unwrap();

    mock.assert();
    assert_eq!(coffees.len(), 1);
    assert_eq!(coffees[0].name, "Brazil Santos");
    assert_eq!(coffees[0].variants[0].weight, 1000);
}

#[tokio::test]
async fn empty_filters_send_empty_object() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/coffees").json_body(json!({}));
        then.status(200).json_body(json!({ "coffees": [] }));
    });

    let client = backend(&server.base_url());
    let coffees = client.list_coffees(&CoffeeFilters::default()).await.unwrap();

    mock.assert();
    assert!(coffees.is_empty());
}

#[tokio::test]
async fn unknown_filter_keys_pass_through() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/coffees")
            .json_body(json!({ "origin": "Rwanda", "certified": "organic" }));
        then.status(200).json_body(json!({ "coffees": [] }));
    });

    let filters: CoffeeFilters =
        serde_json::from_value(json!({ "origin": "Rwanda", "certified": "organic" })).unwrap();
    backend(&server.base_url()).list_coffees(&filters).await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn get_coffee_unwraps_envelope() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/coffee")
            .json_body(json!({ "coffee_id": "c42" }));
        then.status(200).json_body(json!({
            "coffee": coffee("c42", "Rwanda Nyamasheke", vec![])
        }));
    });

    let c = backend(&server.base_url()).get_coffee("c42").await.unwrap();

    mock.assert();
    assert_eq!(c.id, "c42");
    assert_eq!(c.flavor_notes, vec!["jasmine", "bergamot", "peach"]);
    assert_eq!(c.acidity, Some(4.0));
}

#[tokio::test]
async fn error_body_message_is_surfaced() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/coffee");
        then.status(404).json_body(json!({ "error": "Coffee not found" }));
    });

    let err = backend(&server.base_url()).get_coffee("nope").await.unwrap_err();

    assert!(matches!(err, BackendError::Status { status: 404, .. }));
    assert_eq!(err.to_string(), "API Error: 404 - Coffee not found");
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_status_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/coffees");
        then.status(500).body("<html>upstream exploded</html>");
    });

    let err = backend(&server.base_url())
        .list_coffees(&CoffeeFilters::default())
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Status { status: 500, .. }));
    assert_eq!(err.to_string(), "API Error: 500 - Internal Server Error");
}

#[tokio::test]
async fn create_checkout_omits_absent_email() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/checkout").json_body(json!({
            "items": [
                { "variant_id": "v1", "quantity": 2 },
                { "variant_id": "v7", "quantity": 1 }
            ]
        }));
        then.status(200).json_body(checkout_response(None));
    });

    let items = vec![
        CheckoutItem { variant_id: "v1".into(), quantity: 2 },
        CheckoutItem { variant_id: "v7".into(), quantity: 1 },
    ];
    let checkout = backend(&server.base_url())
        .create_checkout(&items, None)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(checkout.checkout_id, "chk_1");
    assert!(checkout.discount.is_none());
    assert_eq!(checkout.items.len(), 1);
}

#[tokio::test]
async fn create_checkout_sends_email_when_given() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/checkout").json_body(json!({
            "items": [{ "variant_id": "v1", "quantity": 1 }],
            "email": "buyer@example.com"
        }));
        then.status(200).json_body(checkout_response(None));
    });

    let items = vec![CheckoutItem { variant_id: "v1".into(), quantity: 1 }];
    backend(&server.base_url())
        .create_checkout(&items, Some("buyer@example.com"))
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/coffees");
        then.status(200).json_body(json!({ "coffees": [] }));
    });

    let client = backend(&format!("{}/", server.base_url()));
    client.list_coffees(&CoffeeFilters::default()).await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn health_check_true_on_ok() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/health").header("x-api-key", API_KEY);
        then.status(200).json_body(json!({ "status": "ok" }));
    });

    assert!(backend(&server.base_url()).health_check().await);
    mock.assert();
}

#[tokio::test]
async fn health_check_false_on_error_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(503).json_body(json!({ "error": "maintenance" }));
    });

    assert!(!backend(&server.base_url()).health_check().await);
}

#[tokio::test]
async fn health_check_false_on_malformed_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(200).body("definitely not json");
    });

    assert!(!backend(&server.base_url()).health_check().await);
}

#[tokio::test]
async fn health_check_false_when_unreachable() {
    // Port 1 is reserved and nothing listens there in test environments
    let client = BackendClient::new("http://127.0.0.1:1", API_KEY, Duration::from_secs(2)).unwrap();
    assert!(!client.health_check().await);
}

#[test]
fn api_key_with_newline_is_rejected() {
    let err = BackendClient::new("http://localhost", "bad\nkey", Duration::from_secs(1)).unwrap_err();
    assert!(matches!(err, BackendError::InvalidApiKey));
}
