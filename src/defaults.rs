//! Precedence rules for tool arguments: explicit argument, then saved
//! preference, then the hardcoded default.

use crate::backend::CoffeeFilters;
use crate::model::{Size, UserPreferences};

/// Size used when neither the caller nor the saved preferences name one.
pub const DEFAULT_SIZE: Size = Size::Small;

/// Quantity used when an order item omits it.
pub const DEFAULT_QUANTITY: u32 = 1;

/// First present value wins; `fallback` when both are absent.
pub fn resolve<T>(explicit: Option<T>, saved: Option<T>, fallback: T) -> T {
    explicit.or(saved).unwrap_or(fallback)
}

pub fn order_size(explicit: Option<Size>, prefs: &UserPreferences) -> Size {
    resolve(explicit, prefs.default_size, DEFAULT_SIZE)
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("quantity must be a whole number of at least 1, got {0}")]
pub struct InvalidQuantity(pub f64);

/// Quantity as sent by the client, which may be `2.0` as well as `2`.
pub fn order_quantity(explicit: Option<f64>) -> Result<u32, InvalidQuantity> {
    let Some(q) = explicit else {
        return Ok(DEFAULT_QUANTITY);
    };
    if q.fract() != 0.0 || q < 1.0 || q > f64::from(u32::MAX) {
        return Err(InvalidQuantity(q));
    }
    Ok(q as u32)
}

/// Explicit email, then the saved one; empty strings count as absent.
pub fn order_email(explicit: Option<String>, prefs: &UserPreferences) -> Option<String> {
    let non_empty = |e: &String| !e.trim().is_empty();
    explicit
        .filter(non_empty)
        .or_else(|| prefs.email.clone().filter(non_empty))
}

/// Apply saved `preparation`/`coffee_type` when the caller supplied neither.
///
/// Supplying either one disables the overlay for both.
pub fn catalog_filters(mut filters: CoffeeFilters, prefs: &UserPreferences) -> CoffeeFilters {
    if filters.preparation.is_none() && filters.coffee_type.is_none() {
        filters.preparation = prefs.preparation;
        filters.coffee_type = prefs.coffee_type;
    }
    filters
}
