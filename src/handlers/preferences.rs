use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::ToolError;
use crate::model::UserPreferences;
use crate::services::Services;

#[derive(Debug, Serialize)]
struct SetPreferencesResponse {
    success: bool,
    preferences: UserPreferences,
    saved_to: String,
}

#[derive(Debug, Serialize)]
struct GetPreferencesResponse {
    preferences: UserPreferences,
    file_path: String,
}

/// Handle a `set_preferences` tool call.
///
/// Merges the supplied fields onto the saved record. Persistence failures
/// are absorbed by the store, so this only fails on serialization.
pub async fn set(partial: UserPreferences, services: &Services) -> Result<Value, ToolError> {
    let store = &services.preferences;
    let preferences = store.save(partial).await;
    debug!(path = %store.path().display(), "preferences updated");

    let payload = SetPreferencesResponse {
        success: true,
        preferences,
        saved_to: store.path().display().to_string(),
    };
    Ok(serde_json::to_value(payload)?)
}

/// Handle a `get_preferences` tool call.
pub async fn get(services: &Services) -> Result<Value, ToolError> {
    let store = &services.preferences;
    let payload = GetPreferencesResponse {
        preferences: store.get().await,
        file_path: store.path().display().to_string(),
    };
    Ok(serde_json::to_value(payload)?)
}
