//! Per-resource services. Each one is a thin typed wrapper over the shared
//! HTTP client.

pub mod domains;
pub mod emails;
pub mod templates;
pub mod webhooks;
