//! Response types for the webhooks service.

use serde::Deserialize;

/// A webhook configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Webhook {
    pub id: String,
    pub name: Option<String>,
    /// Destination URL events are delivered to.
    pub url: String,
    #[serde(default)]
    pub enabled: bool,
    /// Event types this webhook subscribes to, e.g. "delivery", "bounce".
    #[serde(default)]
    pub event_types: Vec<String>,
    /// Authentication scheme used when delivering, e.g. "basic" or "oauth2".
    pub auth_type: Option<String>,
    #[serde(default)]
    pub has_auth_credentials: bool,
    pub last_successful_at: Option<String>,
    pub last_failure_at: Option<String>,
    /// Outcome of the most recent delivery attempt.
    pub last_status: Option<String>,
}

/// Response from listing webhooks.
#[derive(Debug, Clone, Deserialize)]
pub struct ListWebhooksResponse {
    /// Configured webhooks.
    #[serde(default)]
    pub webhooks: Vec<Webhook>,
}
