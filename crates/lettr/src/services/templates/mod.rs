//! Managing email templates.

pub mod types;

pub use types::{
    CreateTemplateOptions, CreateTemplateOptionsBuilder, CreateTemplateResponse,
    ListTemplatesParams, ListTemplatesParamsBuilder, ListTemplatesResponse, MergeTag, Template,
    TemplatesPagination,
};

use crate::error::Result;
use crate::http::HttpClient;

/// Service for managing email templates.
pub struct Templates {
    http: HttpClient,
}

impl Templates {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List templates with optional filtering and page-based pagination.
    pub async fn list(&self, params: Option<ListTemplatesParams>) -> Result<ListTemplatesResponse> {
        let query = params.as_ref().map(ListTemplatesParams::to_query_params);
        self.http.get("/templates", query.as_deref()).await
    }

    /// Create a new email template.
    pub async fn create(&self, options: CreateTemplateOptions) -> Result<CreateTemplateResponse> {
        self.http.post("/templates", &options).await
    }
}
