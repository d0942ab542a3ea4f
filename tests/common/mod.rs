//! Shared fixtures: a services bundle pointed at an httpmock backend and a
//! temporary preferences file.

#![allow(dead_code)]

use std::path::Path;
use std::time::Duration;

use doppio_coffee_mcp::backend::BackendClient;
use doppio_coffee_mcp::handlers;
use doppio_coffee_mcp::preferences::PreferenceStore;
use doppio_coffee_mcp::protocol::ToolCallParams;
use doppio_coffee_mcp::services::Services;
use serde_json::{json, Value};

pub const API_KEY: &str = "test-key";

pub fn backend(base_url: &str) -> BackendClient {
    BackendClient::new(base_url, API_KEY, Duration::from_secs(5)).unwrap()
}

pub fn services(base_url: &str, prefs_dir: &Path) -> Services {
    Services::new(
        backend(base_url),
        PreferenceStore::new(prefs_dir.join("preferences.json")),
    )
}

/// Call a tool and return the parsed text payload plus the `isError` flag.
pub async fn call_tool(services: &Services, name: &str, arguments: Value) -> (Value, bool) {
    let params = ToolCallParams {
        name: name.to_string(),
        arguments: Some(arguments),
    };
    let result = handlers::dispatch_tool_call(&params, services).await;
    let payload = serde_json::from_str(&result.content[0].text).unwrap();
    (payload, result.is_error)
}

pub fn variant(id: &str, size: &str, weight: u32, price: f64, available: bool) -> Value {
    json!({
        "id": id,
        "size": size,
        "weight": weight,
        "price": price,
        "currency": "EUR",
        "available": available
    })
}

pub fn coffee(id: &str, name: &str, variants: Vec<Value>) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "Freshly roasted single origin",
        "preparation": ["filter"],
        "coffee_type": "arabica",
        "origin": "Ethiopia",
        "region": "Yirgacheffe",
        "altitude": "1900-2200 m",
        "altitude_min": 1900,
        "altitude_max": 2200,
        "processing": "washed",
        "flavor_notes": ["jasmine", "bergamot", "peach"],
        "roast_level": "Light",
        "farm": null,
        "variety": "Heirloom",
        "harvest_period": "2024",
        "cupping_score": 87.5,
        "acidity": 4,
        "bitterness": 2,
        "body": "light",
        "crema": null,
        "story": null,
        "price_min": 12.9,
        "variants": variants
    })
}

pub fn checkout_response(discount: Option<Value>) -> Value {
    json!({
        "checkout_id": "chk_1",
        "checkout_url": "https://shop.example/checkout/chk_1",
        "subtotal": { "amount": 30, "currency": "EUR" },
        "total": { "amount": 24, "currency": "EUR" },
        "discount": discount,
        "items": [
            { "title": "Ethiopia Yirgacheffe 330g", "quantity": 2, "price": 15 }
        ]
    })
}
