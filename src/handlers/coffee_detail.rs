use serde_json::Value;

use super::ToolError;
use crate::format;
use crate::protocol::GetCoffeeDetailParams;
use crate::services::Services;

/// Handle a `get_coffee_detail` tool call.
pub async fn handle(params: GetCoffeeDetailParams, services: &Services) -> Result<Value, ToolError> {
    let coffee = services.backend.get_coffee(&params.coffee_id).await?;
    Ok(serde_json::to_value(format::coffee_detail(&coffee))?)
}
