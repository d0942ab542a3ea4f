//! Records exchanged with the Doppio backend and persisted locally.

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Brewing method a coffee is roasted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preparation {
    Filter,
    Espresso,
    /// Suitable for both filter and espresso.
    Omni,
}

impl Preparation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Filter => "filter",
            Self::Espresso => "espresso",
            Self::Omni => "omni",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoffeeType {
    Robusta,
    Arabica,
    Blend,
    Decaf,
}

/// Package size. `small` is 220g (330g for filter roasts), `medium` 500g,
/// `large` 1kg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub name: String,
    pub street: String,
    pub city: String,
    pub zip: String,
}

/// Saved defaults. A missing field means "no default set".
///
/// Each field decodes on its own: a value that does not fit (an unknown
/// enum variant, a wrong type) reads as unset and leaves the other fields
/// intact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub preparation: Option<Preparation>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub coffee_type: Option<CoffeeType>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub default_size: Option<Size>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl UserPreferences {
    /// Shallow merge: fields present in `partial` win, absent ones are kept.
    pub fn merge(self, partial: UserPreferences) -> UserPreferences {
        UserPreferences {
            preparation: partial.preparation.or(self.preparation),
            coffee_type: partial.coffee_type.or(self.coffee_type),
            default_size: partial.default_size.or(self.default_size),
            email: partial.email.or(self.email),
            shipping_address: partial.shipping_address.or(self.shipping_address),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeVariant {
    pub id: String,
    pub size: Size,
    /// Grams.
    pub weight: u32,
    pub price: Decimal,
    pub currency: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coffee {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub preparation: Vec<Preparation>,
    #[serde(default)]
    pub coffee_type: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub altitude: Option<String>,
    #[serde(default)]
    pub altitude_min: Option<u32>,
    #[serde(default)]
    pub altitude_max: Option<u32>,
    #[serde(default)]
    pub processing: Option<String>,
    #[serde(default)]
    pub flavor_notes: Vec<String>,
    #[serde(default)]
    pub roast_level: Option<String>,
    #[serde(default)]
    pub farm: Option<String>,
    #[serde(default)]
    pub variety: Option<String>,
    #[serde(default)]
    pub harvest_period: Option<String>,
    #[serde(default)]
    pub cupping_score: Option<f64>,
    /// 1-5.
    #[serde(default)]
    pub acidity: Option<f64>,
    /// 1-5.
    #[serde(default)]
    pub bitterness: Option<f64>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub crema: Option<String>,
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default)]
    pub price_min: Option<Decimal>,
    #[serde(default)]
    pub variants: Vec<CoffeeVariant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency: String,
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount.normalize(), self.currency)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub code: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutLineItem {
    pub title: String,
    pub quantity: u32,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub checkout_id: String,
    pub checkout_url: String,
    pub subtotal: Money,
    pub total: Money,
    #[serde(default)]
    pub discount: Option<Discount>,
    #[serde(default)]
    pub items: Vec<CheckoutLineItem>,
}

/// One line of a checkout request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub variant_id: String,
    pub quantity: u32,
}
