//! Managing sending domains.

pub mod types;

pub use types::{
    CreateDomainOptions, CreateDomainResponse, DkimInfo, DkimRecord, DnsRecords, Domain,
    ListDomainsResponse,
};

use crate::error::{LettrError, Result};
use crate::http::HttpClient;

/// Service for managing sending domains.
pub struct Domains {
    http: HttpClient,
}

impl Domains {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List all sending domains.
    pub async fn list(&self) -> Result<ListDomainsResponse> {
        self.http.get("/domains", None).await
    }

    /// Get details of a specific domain, including its DNS records.
    pub async fn get(&self, domain: &str) -> Result<Domain> {
        if domain.is_empty() {
            return Err(LettrError::invalid_input("'domain' is required"));
        }
        self.http.get(&format!("/domains/{domain}"), None).await
    }

    /// Register a new sending domain.
    pub async fn create(&self, options: CreateDomainOptions) -> Result<CreateDomainResponse> {
        self.http.post("/domains", &options).await
    }

    /// Delete a sending domain.
    pub async fn delete(&self, domain: &str) -> Result<()> {
        if domain.is_empty() {
            return Err(LettrError::invalid_input("'domain' is required"));
        }
        self.http.delete(&format!("/domains/{domain}")).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn service(server: &MockServer) -> Domains {
        let http = HttpClient::new("test-api-key").expect("http client").with_base_url(server.uri());
        Domains::new(http)
    }

    #[tokio::test]
    async fn list_decodes_domains_without_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "domains": [
                    {"domain": "example.com", "status": "verified", "can_send": true},
                    {"domain": "staging.example.com", "status": "pending", "can_send": false}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = service(&server).list().await.expect("response");
        assert_eq!(response.domains.len(), 2);
        assert_eq!(response.domains[0].domain, "example.com");
        assert!(!response.domains[1].can_send);
    }

    #[tokio::test]
    async fn get_decodes_data_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains/example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"domain": "example.com", "status": "verified", "can_send": true}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let domain = service(&server).get("example.com").await.expect("response");
        assert_eq!(domain.domain, "example.com");
        assert_eq!(domain.status.as_deref(), Some("verified"));
    }

    #[tokio::test]
    async fn get_with_empty_name_fails_without_a_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

        let err = service(&server).get("").await.expect_err("should fail");
        assert!(matches!(err, LettrError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn create_posts_domain_name_and_decodes_dkim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/domains"))
            .and(body_json(json!({"domain": "example.com"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "domain": "example.com",
                    "status": "pending",
                    "status_label": "Pending verification",
                    "dkim": {"public": "k=rsa; p=MIGf...", "selector": "lettr", "headers": "from:to:subject"}
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = CreateDomainOptions::new("example.com").expect("options");
        let response = service(&server).create(options).await.expect("response");
        assert_eq!(response.domain, "example.com");
        assert_eq!(
            response.dkim.and_then(|d| d.selector),
            Some("lettr".to_string())
        );
    }

    #[tokio::test]
    async fn delete_returns_unit_on_204() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/domains/example.com"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        service(&server).delete("example.com").await.expect("delete should succeed");
    }

    #[tokio::test]
    async fn delete_with_empty_name_fails_without_a_request() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE")).respond_with(ResponseTemplate::new(204)).expect(0).mount(&server).await;

        let err = service(&server).delete("").await.expect_err("should fail");
        assert!(matches!(err, LettrError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn not_found_domain_surfaces_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domains/missing.com"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Domain not found",
                "error_code": "not_found"
            })))
            .mount(&server)
            .await;

        let err = service(&server).get("missing.com").await.expect_err("should fail");
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.error_code(), Some("not_found"));
    }
}
