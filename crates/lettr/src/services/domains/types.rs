//! Request and response types for the domains service.

use serde::{Deserialize, Serialize};

use crate::error::{LettrError, Result};

/// Options for registering a new sending domain.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDomainOptions {
    domain: String,
}

impl CreateDomainOptions {
    /// Create options for registering a sending domain.
    ///
    /// # Errors
    /// Returns [`LettrError::InvalidInput`] when the name is empty.
    pub fn new(domain: impl Into<String>) -> Result<Self> {
        let domain = domain.into();
        if domain.is_empty() {
            return Err(LettrError::invalid_input("'domain' is required"));
        }
        Ok(Self { domain })
    }
}

/// A sending domain registered with Lettr.
#[derive(Debug, Clone, Deserialize)]
pub struct Domain {
    pub domain: String,
    /// Verification status, e.g. "verified" or "pending".
    pub status: Option<String>,
    pub status_label: Option<String>,
    /// Whether the domain is ready to send mail.
    #[serde(default)]
    pub can_send: bool,
    pub cname_status: Option<String>,
    pub dkim_status: Option<String>,
    pub tracking_domain: Option<String>,
    /// DNS records that must be published for verification.
    pub dns: Option<DnsRecords>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// DNS records associated with a domain.
#[derive(Debug, Clone, Deserialize)]
pub struct DnsRecords {
    pub dkim: Option<DkimRecord>,
}

/// A DKIM DNS record.
#[derive(Debug, Clone, Deserialize)]
pub struct DkimRecord {
    pub selector: Option<String>,
    /// Public key value to publish.
    #[serde(rename = "public")]
    pub public_key: Option<String>,
}

/// Response from listing domains.
#[derive(Debug, Clone, Deserialize)]
pub struct ListDomainsResponse {
    /// Registered sending domains.
    #[serde(default)]
    pub domains: Vec<Domain>,
}

/// Response returned after creating a new sending domain.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDomainResponse {
    pub domain: String,
    pub status: Option<String>,
    pub status_label: Option<String>,
    /// DKIM configuration for the new domain.
    pub dkim: Option<DkimInfo>,
}

/// DKIM configuration returned when a domain is created.
#[derive(Debug, Clone, Deserialize)]
pub struct DkimInfo {
    #[serde(rename = "public")]
    pub public_key: Option<String>,
    pub selector: Option<String>,
    pub headers: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_options_require_a_domain_name() {
        let err = CreateDomainOptions::new("").expect_err("should fail");
        assert!(matches!(err, LettrError::InvalidInput(msg) if msg.contains("'domain'")));
    }

    #[test]
    fn create_options_serialize_to_domain_field() {
        let options = CreateDomainOptions::new("example.com").expect("options");
        assert_eq!(serde_json::to_value(&options).expect("serialize"), json!({"domain": "example.com"}));
    }

    #[test]
    fn deserializes_domain_with_nested_dns_records() {
        let domain: Domain = serde_json::from_value(json!({
            "domain": "example.com",
            "status": "verified",
            "status_label": "Verified",
            "can_send": true,
            "cname_status": "valid",
            "dkim_status": "valid",
            "dns": {"dkim": {"selector": "lettr", "public": "k=rsa; p=MIGf..."}},
            "created_at": "2024-01-01T00:00:00.000+00:00"
        }))
        .expect("should deserialize");

        assert!(domain.can_send);
        let dkim = domain.dns.and_then(|d| d.dkim).expect("dkim record");
        assert_eq!(dkim.selector.as_deref(), Some("lettr"));
        assert_eq!(dkim.public_key.as_deref(), Some("k=rsa; p=MIGf..."));
    }
}
