//! End-to-end tests of the newline-delimited JSON-RPC loop.

mod common;

use doppio_coffee_mcp::server::McpServer;
use serde_json::{json, Value};
use tokio::io::AsyncReadExt;

/// Feed `lines` to a fresh server and collect every response it writes.
async fn run_session(lines: &[Value], extra_raw: &str) -> Vec<Value> {
    let tmp = tempfile::tempdir().unwrap();
    let mut server = McpServer::new(common::services("http://127.0.0.1:1", tmp.path()));

    let mut input = String::new();
    for line in lines {
        input.push_str(&line.to_string());
        input.push('\n');
    }
    input.push_str(extra_raw);

    let (output, mut collected) = tokio::io::duplex(1024 * 1024);
    server.serve(input.as_bytes(), output).await.unwrap();

    let mut raw = String::new();
    collected.read_to_string(&mut raw).await.unwrap();
    raw.lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn initialize(id: i64) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "initialize",
        "params": {
            "protocolVersion": "2024-11-05",
            "clientInfo": { "name": "test-client", "version": "0.0.1" }
        }
    })
}

fn by_id(responses: &[Value], id: i64) -> &Value {
    responses
        .iter()
        .find(|r| r["id"] == json!(id))
        .unwrap_or_else(|| panic!("no response with id {id}"))
}

#[tokio::test]
async fn requests_before_initialize_are_rejected() {
    let responses = run_session(
        &[
            json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }),
            json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
        ],
        "",
    )
    .await;

    assert_eq!(responses.len(), 1, "notifications never get a response");
    assert_eq!(responses[0]["error"]["code"], -32600);
    assert_eq!(responses[0]["error"]["message"], "Server not initialized");
}

#[tokio::test]
async fn initialize_advertises_server_and_instructions() {
    let responses = run_session(&[initialize(1)], "").await;

    let result = &by_id(&responses, 1)["result"];
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "doppio-coffee-mcp");
    assert!(result["capabilities"]["tools"].is_object());
    assert!(result["instructions"].as_str().unwrap().contains("Package sizes"));
}

#[tokio::test]
async fn full_session_answers_every_request() {
    let responses = run_session(
        &[
            initialize(1),
            json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
            json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }),
            json!({ "jsonrpc": "2.0", "id": 3, "method": "ping" }),
            json!({
                "jsonrpc": "2.0",
                "id": 4,
                "method": "tools/call",
                "params": { "name": "get_preferences", "arguments": {} }
            }),
            json!({ "jsonrpc": "2.0", "id": 5, "method": "resources/list" }),
        ],
        "",
    )
    .await;

    assert_eq!(responses.len(), 5);
    assert_eq!(by_id(&responses, 2)["result"]["tools"].as_array().unwrap().len(), 5);
    assert_eq!(by_id(&responses, 3)["result"], json!({}));

    let call = &by_id(&responses, 4)["result"];
    let text = call["content"][0]["text"].as_str().unwrap();
    let payload: Value = serde_json::from_str(text).unwrap();
    assert_eq!(payload["preferences"], json!({}));

    assert_eq!(by_id(&responses, 5)["error"]["code"], -32601);
}

#[tokio::test]
async fn malformed_lines_produce_parse_errors() {
    let responses = run_session(
        &[initialize(1)],
        "this is not json\n\n{\"jsonrpc\":\"1.0\",\"id\":7,\"method\":\"ping\"}\n",
    )
    .await;

    assert_eq!(responses.len(), 3);
    assert_eq!(responses[1]["error"]["code"], -32700);
    assert!(responses[1].get("id").is_none());
    assert_eq!(by_id(&responses, 7)["error"]["code"], -32600);
}

#[tokio::test]
async fn tool_failures_stay_inside_the_result() {
    let responses = run_session(
        &[
            initialize(1),
            json!({
                "jsonrpc": "2.0",
                "id": 2,
                "method": "tools/call",
                "params": { "name": "list_coffees", "arguments": {} }
            }),
        ],
        "",
    )
    .await;

    let response = by_id(&responses, 2);
    assert!(response.get("error").is_none(), "backend failure must not be a protocol error");
    assert_eq!(response["result"]["isError"], true);

    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    let payload: Value = serde_json::from_str(text).unwrap();
    assert!(payload["error"].as_str().unwrap().starts_with("Backend request failed"));
}
