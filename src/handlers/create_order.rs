use serde_json::Value;
use tracing::debug;

use super::ToolError;
use crate::defaults;
use crate::format::{self, SizeSubstitution};
use crate::model::{CheckoutItem, CoffeeVariant, Size};
use crate::protocol::CreateOrderParams;
use crate::services::Services;
use crate::tools::Tool;

/// Handle a `create_order` tool call.
///
/// Items are resolved strictly in input order. The first item with no
/// available variant aborts the whole order; the checkout is only created
/// once every item has resolved.
pub async fn handle(params: CreateOrderParams, services: &Services) -> Result<Value, ToolError> {
    // Schema validation already requires one item; library callers skip it.
    if params.items.is_empty() {
        return Err(ToolError::invalid_arguments(
            Tool::CreateOrder,
            "items must contain at least one entry",
        ));
    }

    let prefs = services.preferences.get().await;

    let mut checkout_items = Vec::with_capacity(params.items.len());
    let mut substitutions = Vec::new();

    for item in &params.items {
        let coffee = services.backend.get_coffee(&item.coffee_id).await?;
        let requested = defaults::order_size(item.size, &prefs);

        let variant = select_variant(&coffee.variants, requested).ok_or_else(|| {
            ToolError::NoAvailableVariant {
                coffee: coffee.name.clone(),
            }
        })?;

        if variant.size != requested {
            debug!(
                coffee = %coffee.id,
                ?requested,
                selected = ?variant.size,
                "requested size unavailable, substituting"
            );
            substitutions.push(SizeSubstitution {
                coffee_id: coffee.id.clone(),
                coffee: coffee.name.clone(),
                requested_size: requested,
                selected_size: variant.size,
            });
        }

        let quantity = defaults::order_quantity(item.quantity)
            .map_err(|e| ToolError::invalid_arguments(Tool::CreateOrder, e))?;
        checkout_items.push(CheckoutItem {
            variant_id: variant.id.clone(),
            quantity,
        });
    }

    let email = defaults::order_email(params.email, &prefs);
    let checkout = services
        .backend
        .create_checkout(&checkout_items, email.as_deref())
        .await?;
    debug!(checkout_id = %checkout.checkout_id, items = checkout_items.len(), "checkout created");

    Ok(serde_json::to_value(format::order_confirmation(checkout, substitutions))?)
}

/// First available variant of `size`, otherwise the first available variant
/// of any size, in backend order.
pub fn select_variant(variants: &[CoffeeVariant], size: Size) -> Option<&CoffeeVariant> {
    variants
        .iter()
        .find(|v| v.available && v.size == size)
        .or_else(|| variants.iter().find(|v| v.available))
}
