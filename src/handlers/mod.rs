pub mod coffee_detail;
pub mod create_order;
pub mod error;
pub mod list_coffees;
pub mod preferences;

pub use error::ToolError;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::protocol::{
    InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse, ToolCallParams,
    ToolErrorPayload, ToolResult,
};
use crate::schema;
use crate::services::Services;
use crate::tools::{Tool, SERVER_INSTRUCTIONS};

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "doppio-coffee-mcp";

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch(req: &JsonRpcRequest, services: &Services) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => {
            if let Some(params) = req
                .params
                .clone()
                .and_then(|v| serde_json::from_value::<InitializeParams>(v).ok())
            {
                let client = params.client_info.as_ref();
                debug!(
                    protocol_version = params.protocol_version.as_deref().unwrap_or("unknown"),
                    client = client.and_then(|c| c.name.as_deref()).unwrap_or("unknown"),
                    client_version = client.and_then(|c| c.version.as_deref()).unwrap_or("unknown"),
                    "initialize"
                );
            }

            let result = serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                },
                "instructions": SERVER_INSTRUCTIONS
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "tools/list" => {
            let tools: Vec<Value> = Tool::ALL.into_iter().map(Tool::descriptor).collect();
            Some(JsonRpcResponse::success(
                req.id.clone(),
                serde_json::json!({ "tools": tools }),
            ))
        }

        "tools/call" => {
            let params: ToolCallParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid tools/call params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for tools/call"),
                    ));
                }
            };

            let tool_result = dispatch_tool_call(&params, services).await;
            match serde_json::to_value(&tool_result) {
                Ok(result_json) => Some(JsonRpcResponse::success(req.id.clone(), result_json)),
                Err(e) => Some(JsonRpcResponse::error(
                    req.id.clone(),
                    JsonRpcError::internal_error(format!("Cannot encode tool result: {e}")),
                )),
            }
        }

        _ => {
            // Unknown notifications are dropped silently.
            req.id.as_ref()?;
            Some(JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::method_not_found(&req.method),
            ))
        }
    }
}

/// Run a named tool. Every failure, including an unknown tool name, becomes
/// an `{"error": ...}` payload rather than a protocol error.
pub async fn dispatch_tool_call(params: &ToolCallParams, services: &Services) -> ToolResult {
    let Some(tool) = Tool::from_name(&params.name) else {
        return ToolErrorPayload::new(format!("Unknown tool: {}", params.name)).into();
    };

    let arguments = params
        .arguments
        .clone()
        .unwrap_or_else(|| Value::Object(Default::default()));

    match run_tool(tool, arguments, services).await {
        Ok(value) => ToolResult::json(&value),
        Err(e) => {
            debug!(tool = tool.name(), error = %e, "tool call failed");
            ToolErrorPayload::from(e).into()
        }
    }
}

async fn run_tool(tool: Tool, arguments: Value, services: &Services) -> Result<Value, ToolError> {
    schema::validate_value(&tool.input_schema(), &arguments)
        .map_err(|e| ToolError::invalid_arguments(tool, e))?;

    match tool {
        Tool::SetPreferences => preferences::set(parse_arguments(tool, arguments)?, services).await,
        Tool::GetPreferences => preferences::get(services).await,
        Tool::ListCoffees => list_coffees::handle(parse_arguments(tool, arguments)?, services).await,
        Tool::GetCoffeeDetail => {
            coffee_detail::handle(parse_arguments(tool, arguments)?, services).await
        }
        Tool::CreateOrder => create_order::handle(parse_arguments(tool, arguments)?, services).await,
    }
}

fn parse_arguments<T: DeserializeOwned>(tool: Tool, arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(tool, e))
}
