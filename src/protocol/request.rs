use serde::{Deserialize, Serialize};

use crate::model::Size;

/// JSON-RPC 2.0 ID, either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    Str(String),
}

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// Arguments for the `get_coffee_detail` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct GetCoffeeDetailParams {
    pub coffee_id: String,
}

/// One requested line of a `create_order` call.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemParams {
    pub coffee_id: String,
    /// Any JSON number; must be whole and at least 1.
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub size: Option<Size>,
}

/// Arguments for the `create_order` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderParams {
    pub items: Vec<OrderItemParams>,
    #[serde(default)]
    pub email: Option<String>,
}

/// MCP `initialize` params.
#[derive(Debug, Clone, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: Option<String>,
    #[serde(rename = "clientInfo")]
    pub client_info: Option<ClientInfo>,
}

/// Client information sent during `initialize`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Parameters for `tools/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}
