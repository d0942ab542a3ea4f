//! File-backed store for [`UserPreferences`].
//!
//! The file is the primary copy. When it cannot be read or written the store
//! degrades to an in-process value owned by the store; persistence failures
//! are logged and never surfaced to callers.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, warn};

use crate::model::UserPreferences;

/// Preferences persisted as a single JSON file.
///
/// `save` reads, merges and writes without locking the file, so two
/// concurrent saves may lose one update (last writer wins).
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    fallback: Mutex<UserPreferences>,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fallback: Mutex::new(UserPreferences::default()),
        }
    }

    /// Location of the preferences file, for display.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current preferences: the file if readable and well-formed, otherwise
    /// the in-process fallback.
    pub async fn get(&self) -> UserPreferences {
        match self.read_file().await {
            Ok(prefs) => prefs,
            Err(reason) => {
                debug!(path = %self.path.display(), %reason, "using in-memory preferences");
                self.fallback_value()
            }
        }
    }

    /// Merge `partial` onto the current preferences and persist the result.
    ///
    /// Returns the merged record whether or not it reached disk.
    pub async fn save(&self, partial: UserPreferences) -> UserPreferences {
        let merged = self.get().await.merge(partial);

        if let Err(e) = self.write_file(&merged).await {
            warn!(path = %self.path.display(), error = %e, "cannot persist preferences, keeping them in memory");
            self.set_fallback(merged.clone());
        }

        merged
    }

    /// Reset to an empty record, in memory and on disk.
    pub async fn clear(&self) {
        self.set_fallback(UserPreferences::default());
        if let Err(e) = tokio::fs::write(&self.path, b"{}").await {
            debug!(path = %self.path.display(), error = %e, "cannot clear preferences file");
        }
    }

    async fn read_file(&self) -> Result<UserPreferences, String> {
        let data = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| e.to_string())?;
        serde_json::from_str(&data).map_err(|e| e.to_string())
    }

    async fn write_file(&self, prefs: &UserPreferences) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(prefs)?;
        tokio::fs::write(&self.path, json).await
    }

    fn fallback_value(&self) -> UserPreferences {
        self.fallback
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_fallback(&self, prefs: UserPreferences) {
        *self.fallback.lock().unwrap_or_else(PoisonError::into_inner) = prefs;
    }
}
