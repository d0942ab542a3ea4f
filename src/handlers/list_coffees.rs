use serde::Serialize;
use serde_json::Value;

use super::ToolError;
use crate::backend::CoffeeFilters;
use crate::defaults;
use crate::format::{self, CoffeeSummary};
use crate::services::Services;

#[derive(Debug, Serialize)]
struct ListCoffeesResponse {
    count: usize,
    filters_applied: CoffeeFilters,
    coffees: Vec<CoffeeSummary>,
}

/// Handle a `list_coffees` tool call.
///
/// Saved `preparation`/`coffee_type` preferences are applied only when the
/// caller passed neither; the filters actually sent are echoed back.
pub async fn handle(filters: CoffeeFilters, services: &Services) -> Result<Value, ToolError> {
    let prefs = services.preferences.get().await;
    let filters = defaults::catalog_filters(filters, &prefs);

    let coffees = services.backend.list_coffees(&filters).await?;

    let payload = ListCoffeesResponse {
        count: coffees.len(),
        coffees: coffees.iter().map(format::coffee_summary).collect(),
        filters_applied: filters,
    };
    Ok(serde_json::to_value(payload)?)
}
