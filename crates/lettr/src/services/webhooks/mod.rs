//! Managing webhook configurations.

pub mod types;

pub use types::{ListWebhooksResponse, Webhook};

use crate::error::{LettrError, Result};
use crate::http::HttpClient;

/// Service for managing webhooks.
pub struct Webhooks {
    http: HttpClient,
}

impl Webhooks {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List all configured webhooks.
    pub async fn list(&self) -> Result<ListWebhooksResponse> {
        self.http.get("/webhooks", None).await
    }

    /// Get details of a specific webhook.
    pub async fn get(&self, webhook_id: &str) -> Result<Webhook> {
        if webhook_id.is_empty() {
            return Err(LettrError::invalid_input("'webhook_id' is required"));
        }
        self.http.get(&format!("/webhooks/{webhook_id}"), None).await
    }
}
