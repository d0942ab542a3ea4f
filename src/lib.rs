//! MCP server for the Doppio Coffee roastery.
//!
//! Exposes `set_preferences`, `get_preferences`, `list_coffees`,
//! `get_coffee_detail` and `create_order` tools over JSON-RPC 2.0 stdio
//! transport, backed by the Doppio catalog/checkout HTTP API and a local
//! preferences file.

pub mod backend;
pub mod config;
pub mod defaults;
pub mod format;
pub mod handlers;
pub mod model;
pub mod preferences;
pub mod protocol;
pub mod schema;
pub mod server;
pub mod services;
pub mod tools;
