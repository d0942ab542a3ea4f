use crate::backend::{BackendClient, BackendError};
use crate::config::ServerConfig;
use crate::preferences::PreferenceStore;

/// Collaborators shared by every tool invocation.
#[derive(Debug)]
pub struct Services {
    pub backend: BackendClient,
    pub preferences: PreferenceStore,
}

impl Services {
    pub fn new(backend: BackendClient, preferences: PreferenceStore) -> Self {
        Self { backend, preferences }
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, BackendError> {
        let backend = BackendClient::new(&config.api_url, &config.api_key, config.http_timeout)?;
        let preferences = PreferenceStore::new(config.preferences_path.clone());
        Ok(Self::new(backend, preferences))
    }
}
