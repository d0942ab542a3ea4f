//! The advertised tool set: names, descriptions and input schemas.

use serde_json::{json, Value};

/// Description sent to clients in the `initialize` result.
pub const SERVER_INSTRUCTIONS: &str = "DOPPIO Coffee - MCP server for ordering freshly roasted coffee from DOPPIO roastery based in Zilina, Slovakia.

We offer freshly roasted specialty coffee crafted with passion and expertise.

Package sizes:
- small: 220g (330g for filter coffee - default)
- medium: 500g
- large: 1kg (1000g)

For any questions or issues, please contact us:
DOPPIO Coffee - www.kavadoppio.sk";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    SetPreferences,
    GetPreferences,
    ListCoffees,
    GetCoffeeDetail,
    CreateOrder,
}

impl Tool {
    /// Advertised order.
    pub const ALL: [Tool; 5] = [
        Tool::SetPreferences,
        Tool::GetPreferences,
        Tool::ListCoffees,
        Tool::GetCoffeeDetail,
        Tool::CreateOrder,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::SetPreferences => "set_preferences",
            Self::GetPreferences => "get_preferences",
            Self::ListCoffees => "list_coffees",
            Self::GetCoffeeDetail => "get_coffee_detail",
            Self::CreateOrder => "create_order",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::SetPreferences => "Sets user's default coffee preferences. Use when user mentions:
- Brewing method preference (filter, espresso machine, or both)
- Preferred coffee type (robusta, arabica, blend, decaf)
- Default package size (small, medium or large)
- Wants to save email or shipping address for orders
Examples: \"I use a filter\", \"I prefer arabica\", \"Always order 1kg bags\"",
            Self::GetPreferences => "Returns user's saved coffee preferences. Use when:
- User asks about their settings
- You need to apply preferences to filter coffees
- Before creating an order to get saved email/address",
            Self::ListCoffees => "Lists available coffee products with optional filtering.
Use when user:
- Asks about coffee, menu, prices, or what's available
- Says they're running out of coffee or need to order
- Wants recommendations
- Asks \"what do you have?\"

If neither preparation nor coffee_type is given, applies user's saved preferences automatically.",
            Self::GetCoffeeDetail => "Gets detailed information about a specific coffee.
Use when user wants to know more about a particular coffee:
- Flavor profile, origin, processing method
- Available sizes and prices
- Whether it's suitable for their brewing method",
            Self::CreateOrder => "Creates an order with one or more coffees and returns checkout URL.
Use when user wants to buy/order/purchase coffee.
Accepts array of items for multi-product orders.
Returns a payment URL where user completes the purchase.
If the requested size is unavailable another available size is chosen and reported under `substitutions`.

Examples: \"order 2x Ethiopia\", \"buy one of each\", \"I'll take the Brazil\"",
        }
    }

    /// JSON Schema (draft 2020-12) for the tool's `arguments`.
    pub fn input_schema(self) -> Value {
        match self {
            Self::SetPreferences => json!({
                "type": "object",
                "properties": {
                    "preparation": preparation_schema("Brewing method: filter, espresso machine, or omni (both)"),
                    "coffee_type": coffee_type_schema("Preferred coffee type"),
                    "default_size": size_schema("Default size: small (220g/330g), medium (500g), large (1kg)"),
                    "email": {
                        "type": "string",
                        "description": "Email for orders"
                    },
                    "shipping_address": {
                        "type": "object",
                        "description": "Shipping address for orders",
                        "required": ["name", "street", "city", "zip"],
                        "properties": {
                            "name": { "type": "string" },
                            "street": { "type": "string" },
                            "city": { "type": "string" },
                            "zip": { "type": "string" }
                        }
                    }
                }
            }),

            Self::GetPreferences => json!({
                "type": "object",
                "properties": {}
            }),

            Self::ListCoffees => json!({
                "type": "object",
                "properties": {
                    "preparation": preparation_schema("Filter by brewing method"),
                    "coffee_type": coffee_type_schema("Filter by coffee type"),
                    "size": size_schema("Filter by package size: small (220g/330g), medium (500g), large (1kg)"),
                    "origin": {
                        "type": "string",
                        "description": "Filter by country of origin (e.g., 'Brazil', 'Ethiopia', 'Rwanda')"
                    },
                    "roast_level": {
                        "type": "string",
                        "description": "Filter by roast level (e.g., 'Light', 'Medium', 'Dark')"
                    },
                    "price_max": {
                        "type": "number",
                        "minimum": 0,
                        "description": "Maximum price in EUR (filters by cheapest variant)"
                    },
                    "flavor": {
                        "type": "string",
                        "description": "Filter by flavor notes (e.g., 'chocolate', 'fruit', 'nuts')"
                    },
                    "altitude_min": {
                        "type": "number",
                        "description": "Minimum altitude in meters (higher altitude = more complex flavors)"
                    },
                    "acidity_min": scale_schema("Minimum acidity level (1-5, higher = more acidic/bright)"),
                    "acidity_max": scale_schema("Maximum acidity level (1-5, higher = more acidic/bright)"),
                    "bitterness_min": scale_schema("Minimum bitterness level (1-5, higher = more bitter/intense)"),
                    "bitterness_max": scale_schema("Maximum bitterness level (1-5, higher = more bitter/intense)")
                }
            }),

            Self::GetCoffeeDetail => json!({
                "type": "object",
                "required": ["coffee_id"],
                "properties": {
                    "coffee_id": {
                        "type": "string",
                        "minLength": 1,
                        "description": "The coffee ID from the catalog"
                    }
                }
            }),

            Self::CreateOrder => json!({
                "type": "object",
                "required": ["items"],
                "properties": {
                    "items": {
                        "type": "array",
                        "description": "List of coffees to order",
                        "minItems": 1,
                        "items": {
                            "type": "object",
                            "required": ["coffee_id"],
                            "properties": {
                                "coffee_id": {
                                    "type": "string",
                                    "minLength": 1,
                                    "description": "Coffee ID from catalog"
                                },
                                "quantity": {
                                    "type": "integer",
                                    "minimum": 1,
                                    "description": "Number of bags (default: 1)"
                                },
                                "size": size_schema("Package size: small (220g/330g), medium (500g), large (1kg)")
                            }
                        }
                    },
                    "email": {
                        "type": "string",
                        "description": "Email for order (uses saved preference if not provided)"
                    }
                }
            }),
        }
    }

    /// Entry for the `tools/list` result.
    pub fn descriptor(self) -> Value {
        json!({
            "name": self.name(),
            "description": self.description(),
            "inputSchema": self.input_schema()
        })
    }
}

fn preparation_schema(description: &str) -> Value {
    json!({
        "type": "string",
        "enum": ["filter", "espresso", "omni"],
        "description": description
    })
}

fn coffee_type_schema(description: &str) -> Value {
    json!({
        "type": "string",
        "enum": ["robusta", "arabica", "blend", "decaf"],
        "description": description
    })
}

fn size_schema(description: &str) -> Value {
    json!({
        "type": "string",
        "enum": ["small", "medium", "large"],
        "description": description
    })
}

fn scale_schema(description: &str) -> Value {
    json!({
        "type": "number",
        "minimum": 1,
        "maximum": 5,
        "description": description
    })
}
