//! Compact, human-readable views of backend records.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::model::{CheckoutLineItem, CheckoutResponse, Coffee, CoffeeVariant, Preparation, Size};

/// One catalog row as shown by `list_coffees`.
#[derive(Debug, Clone, Serialize)]
pub struct CoffeeSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub coffee_type: String,
    pub preparation: String,
    pub origin: String,
    pub region: Option<String>,
    pub roast_level: Option<String>,
    pub flavor_notes: Vec<String>,
    pub prices: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoffeeDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub coffee_type: String,
    pub preparation: Vec<Preparation>,
    pub origin: String,
    pub region: Option<String>,
    pub altitude: Option<String>,
    pub processing: Option<String>,
    pub flavor_notes: Vec<String>,
    pub roast_level: Option<String>,
    pub farm: Option<String>,
    pub variety: Option<String>,
    pub harvest_period: Option<String>,
    pub cupping_score: Option<f64>,
    pub acidity: Option<f64>,
    pub bitterness: Option<f64>,
    pub body: Option<String>,
    pub crema: Option<String>,
    pub story: Option<String>,
    pub variants: Vec<VariantDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VariantDetail {
    pub id: String,
    pub size: Size,
    pub weight: String,
    pub price: String,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderConfirmation {
    pub success: bool,
    pub order: OrderTotals,
    pub checkout_url: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<DiscountSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub substitutions: Vec<SizeSubstitution>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderTotals {
    pub items: Vec<CheckoutLineItem>,
    pub subtotal: String,
    pub total: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiscountSummary {
    pub code: String,
    pub savings: String,
}

/// A variant of a different size was chosen because the requested size was
/// not available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeSubstitution {
    pub coffee_id: String,
    pub coffee: String,
    pub requested_size: Size,
    pub selected_size: Size,
}

const CHECKOUT_MESSAGE: &str = "Complete payment at the checkout URL";

pub fn coffee_summary(coffee: &Coffee) -> CoffeeSummary {
    let prices = coffee
        .variants
        .iter()
        .filter(|v| v.available)
        .map(|v| format!("{}g: {}{}", v.weight, v.price.normalize(), v.currency))
        .collect::<Vec<_>>()
        .join(", ");

    let preparation = coffee
        .preparation
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("/");

    CoffeeSummary {
        id: coffee.id.clone(),
        name: coffee.name.clone(),
        coffee_type: coffee.coffee_type.clone(),
        preparation,
        origin: coffee.origin.clone(),
        region: coffee.region.clone(),
        roast_level: coffee.roast_level.clone(),
        flavor_notes: coffee.flavor_notes.clone(),
        prices,
    }
}

pub fn coffee_detail(coffee: &Coffee) -> CoffeeDetail {
    CoffeeDetail {
        id: coffee.id.clone(),
        name: coffee.name.clone(),
        description: coffee.description.clone(),
        coffee_type: coffee.coffee_type.clone(),
        preparation: coffee.preparation.clone(),
        origin: coffee.origin.clone(),
        region: coffee.region.clone(),
        altitude: coffee.altitude.clone(),
        processing: coffee.processing.clone(),
        flavor_notes: coffee.flavor_notes.clone(),
        roast_level: coffee.roast_level.clone(),
        farm: coffee.farm.clone(),
        variety: coffee.variety.clone(),
        harvest_period: coffee.harvest_period.clone(),
        cupping_score: coffee.cupping_score,
        acidity: coffee.acidity,
        bitterness: coffee.bitterness,
        body: coffee.body.clone(),
        crema: coffee.crema.clone(),
        story: coffee.story.clone(),
        variants: coffee.variants.iter().map(variant_detail).collect(),
    }
}

fn variant_detail(variant: &CoffeeVariant) -> VariantDetail {
    VariantDetail {
        id: variant.id.clone(),
        size: variant.size,
        weight: format!("{}g", variant.weight),
        price: format!("{} {}", variant.price.normalize(), variant.currency),
        available: variant.available,
    }
}

pub fn order_confirmation(
    checkout: CheckoutResponse,
    substitutions: Vec<SizeSubstitution>,
) -> OrderConfirmation {
    let discount = checkout.discount.as_ref().map(|d| DiscountSummary {
        code: d.code.clone(),
        savings: format!("{} {}", two_places(d.amount), checkout.total.currency),
    });

    let message = match &discount {
        Some(d) => format!("Discount {} applied! {CHECKOUT_MESSAGE}", d.code),
        None => CHECKOUT_MESSAGE.to_string(),
    };

    OrderConfirmation {
        success: true,
        order: OrderTotals {
            subtotal: checkout.subtotal.to_string(),
            total: checkout.total.to_string(),
            items: checkout.items,
        },
        checkout_url: checkout.checkout_url,
        message,
        discount,
        substitutions,
    }
}

fn two_places(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
