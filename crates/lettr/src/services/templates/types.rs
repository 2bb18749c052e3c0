//! Request and response types for the templates service.

use serde::{Deserialize, Serialize};

use crate::error::{LettrError, Result};

/// Options for creating a new email template.
///
/// Exactly one of `html` or `json` content must be provided;
/// [`CreateTemplateOptionsBuilder::build`] enforces the exclusion.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTemplateOptions {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    json: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    folder_id: Option<u64>,
}

impl CreateTemplateOptions {
    /// Start building template options.
    pub fn builder() -> CreateTemplateOptionsBuilder {
        CreateTemplateOptionsBuilder::default()
    }
}

/// Builder for [`CreateTemplateOptions`].
#[derive(Debug, Default)]
pub struct CreateTemplateOptionsBuilder {
    name: Option<String>,
    html: Option<String>,
    json: Option<String>,
    project_id: Option<u64>,
    folder_id: Option<u64>,
}

impl CreateTemplateOptionsBuilder {
    /// Template name (required).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// HTML content. Mutually exclusive with [`json`](Self::json).
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Topol editor JSON content. Mutually exclusive with
    /// [`html`](Self::html).
    pub fn json(mut self, json: impl Into<String>) -> Self {
        self.json = Some(json.into());
        self
    }

    /// Project to create the template in; defaults to the team's default
    /// project when unset.
    pub fn project_id(mut self, project_id: u64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Folder within the project.
    pub fn folder_id(mut self, folder_id: u64) -> Self {
        self.folder_id = Some(folder_id);
        self
    }

    /// Validate the collected fields and produce the immutable options.
    ///
    /// # Errors
    /// Returns [`LettrError::InvalidInput`] when `name` is missing, when
    /// neither content kind is set, or when both are.
    pub fn build(self) -> Result<CreateTemplateOptions> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(LettrError::invalid_input("'name' is required")),
        };
        if self.html.is_none() && self.json.is_none() {
            return Err(LettrError::invalid_input("either 'html' or 'json' is required"));
        }
        if self.html.is_some() && self.json.is_some() {
            return Err(LettrError::invalid_input("'html' and 'json' are mutually exclusive"));
        }

        Ok(CreateTemplateOptions {
            name,
            html: self.html,
            json: self.json,
            project_id: self.project_id,
            folder_id: self.folder_id,
        })
    }
}

/// Parameters for listing templates with optional filtering and page-based
/// pagination.
#[derive(Debug, Clone, Default)]
pub struct ListTemplatesParams {
    project_id: Option<u64>,
    per_page: Option<u32>,
    page: Option<u32>,
}

impl ListTemplatesParams {
    /// Start building list parameters.
    pub fn builder() -> ListTemplatesParamsBuilder {
        ListTemplatesParamsBuilder::default()
    }

    pub(crate) fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(project_id) = self.project_id {
            params.push(("project_id", project_id.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        params
    }
}

/// Builder for [`ListTemplatesParams`]. All fields are optional.
#[derive(Debug, Default)]
pub struct ListTemplatesParamsBuilder {
    params: ListTemplatesParams,
}

impl ListTemplatesParamsBuilder {
    /// Project to list templates from.
    pub fn project_id(mut self, project_id: u64) -> Self {
        self.params.project_id = Some(project_id);
        self
    }

    /// Number of results per page (1-100).
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.params.per_page = Some(per_page);
        self
    }

    /// Page number.
    pub fn page(mut self, page: u32) -> Self {
        self.params.page = Some(page);
        self
    }

    /// Produce the parameters. Never fails.
    pub fn build(self) -> ListTemplatesParams {
        self.params
    }
}

/// An email template.
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub id: u64,
    pub name: String,
    /// Slug used to reference the template when sending.
    pub slug: String,
    #[serde(default)]
    pub project_id: u64,
    pub folder_id: Option<u64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Response from listing templates.
#[derive(Debug, Clone, Deserialize)]
pub struct ListTemplatesResponse {
    #[serde(default)]
    pub templates: Vec<Template>,
    /// Page-based pagination info.
    pub pagination: Option<TemplatesPagination>,
}

/// Page-based pagination info for template listings.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesPagination {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub last_page: u32,
}

/// Response returned after creating a new template.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTemplateResponse {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub project_id: u64,
    pub folder_id: Option<u64>,
    #[serde(default)]
    pub active_version: u32,
    /// Merge tags extracted from the template content.
    #[serde(default)]
    pub merge_tags: Vec<MergeTag>,
    pub created_at: Option<String>,
}

/// A merge tag extracted from template content.
#[derive(Debug, Clone, Deserialize)]
pub struct MergeTag {
    pub key: String,
    #[serde(default)]
    pub required: bool,
}
