//! HTTP client for the Doppio catalog and checkout backend.

pub mod client;
pub mod error;

pub use client::{BackendClient, CoffeeFilters};
pub use error::BackendError;
