use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::error::{ApiErrorBody, BackendError};
use crate::model::{CheckoutItem, CheckoutResponse, Coffee, CoffeeType, Preparation, Size};

const API_KEY_HEADER: &str = "x-api-key";

/// Catalog filters. Every field is optional; unknown keys supplied by the
/// caller are forwarded untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoffeeFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<Preparation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coffee_type: Option<CoffeeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roast_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acidity_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acidity_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitterness_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitterness_max: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct CoffeeListEnvelope {
    coffees: Vec<Coffee>,
}

#[derive(Debug, Deserialize)]
struct CoffeeEnvelope {
    coffee: Coffee,
}

#[derive(Debug, Serialize)]
struct CoffeeLookup<'a> {
    coffee_id: &'a str,
}

#[derive(Debug, Serialize)]
struct CheckoutRequest<'a> {
    items: &'a [CheckoutItem],
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct HealthStatus {
    status: String,
}

/// Stateless client for the Doppio backend.
///
/// Every data-bearing call is a `POST` with a JSON body, including reads.
/// Each request carries `Content-Type: application/json` and `X-API-Key`.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, BackendError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key = HeaderValue::from_str(api_key).map_err(|_| BackendError::InvalidApiKey)?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(BackendError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List coffees matching `filters`. Empty filters mean no restriction.
    #[instrument(skip(self, filters))]
    pub async fn list_coffees(&self, filters: &CoffeeFilters) -> Result<Vec<Coffee>, BackendError> {
        let envelope: CoffeeListEnvelope = self.post("/api/coffees", filters).await?;
        debug!(count = envelope.coffees.len(), "listed coffees");
        Ok(envelope.coffees)
    }

    #[instrument(skip(self))]
    pub async fn get_coffee(&self, coffee_id: &str) -> Result<Coffee, BackendError> {
        let envelope: CoffeeEnvelope = self
            .post("/api/coffee", &CoffeeLookup { coffee_id })
            .await?;
        Ok(envelope.coffee)
    }

    /// Create a checkout session for `items` (variant id + quantity, in order).
    #[instrument(skip(self, items, email), fields(items = items.len()))]
    pub async fn create_checkout(
        &self,
        items: &[CheckoutItem],
        email: Option<&str>,
    ) -> Result<CheckoutResponse, BackendError> {
        self.post("/api/checkout", &CheckoutRequest { items, email })
            .await
    }

    /// Probe the backend. Any failure is reported as `false`.
    pub async fn health_check(&self) -> bool {
        let result: Result<HealthStatus, BackendError> = async {
            let response = self
                .http
                .get(self.url("/api/health"))
                .send()
                .await
                .map_err(BackendError::Transport)?;
            read_json::<HealthStatus>(response).await
        }
        .await;

        match result {
            Ok(health) => {
                debug!(status = %health.status, "backend healthy");
                true
            }
            Err(e) => {
                debug!(error = %e, "backend health check failed");
                false
            }
        }
    }

    async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(BackendError::Transport)?;
        read_json(response).await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }
}

/// Decode a success body, or turn a failure status into [`BackendError::Status`]
/// using the body's `error` field and falling back to the status text.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.json::<ApiErrorBody>().await.unwrap_or_default();
        let message = body
            .error
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown status").to_string());
        return Err(BackendError::Status {
            status: status.as_u16(),
            message,
        });
    }

    response.json::<T>().await.map_err(BackendError::Decode)
}
