//! Request and response types for the emails service.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LettrError, Result};

/// Options for sending an email.
///
/// At minimum `from`, `to`, `subject`, and one of `html`, `text`, or
/// `template_slug` are required; [`CreateEmailOptionsBuilder::build`]
/// enforces this before any request is made.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEmailOptions {
    from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    from_name: Option<String>,
    to: Vec<String>,
    subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachments: Option<Vec<Attachment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    substitution_data: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<EmailOptions>,
}

impl CreateEmailOptions {
    /// Start building email options.
    pub fn builder() -> CreateEmailOptionsBuilder {
        CreateEmailOptionsBuilder::default()
    }
}

/// Builder for [`CreateEmailOptions`].
#[derive(Debug, Default)]
pub struct CreateEmailOptionsBuilder {
    from: Option<String>,
    from_name: Option<String>,
    to: Vec<String>,
    subject: Option<String>,
    html: Option<String>,
    text: Option<String>,
    template_slug: Option<String>,
    template_version: Option<u32>,
    project_id: Option<u64>,
    attachments: Option<Vec<Attachment>>,
    substitution_data: Option<HashMap<String, Value>>,
    metadata: Option<HashMap<String, Value>>,
    options: Option<EmailOptions>,
}

impl CreateEmailOptionsBuilder {
    /// Sender email address (required).
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Sender display name.
    pub fn from_name(mut self, from_name: impl Into<String>) -> Self {
        self.from_name = Some(from_name.into());
        self
    }

    /// Recipient email addresses (required, at least one).
    pub fn to<I, S>(mut self, to: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.to = to.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single recipient.
    pub fn add_to(mut self, recipient: impl Into<String>) -> Self {
        self.to.push(recipient.into());
        self
    }

    /// Subject line (required).
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// HTML content. At least one of html, text, or template_slug is required.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Plain text content. At least one of html, text, or template_slug is
    /// required.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Slug of a stored template to render this email from.
    pub fn template_slug(mut self, template_slug: impl Into<String>) -> Self {
        self.template_slug = Some(template_slug.into());
        self
    }

    /// Specific template version to use.
    pub fn template_version(mut self, template_version: u32) -> Self {
        self.template_version = Some(template_version);
        self
    }

    /// Project ID for template lookup.
    pub fn project_id(mut self, project_id: u64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// File attachments.
    pub fn attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = Some(attachments);
        self
    }

    /// Substitution data for template variable replacement; variables like
    /// `{{first_name}}` in the template are replaced by these values.
    pub fn substitution_data(mut self, substitution_data: HashMap<String, Value>) -> Self {
        self.substitution_data = Some(substitution_data);
        self
    }

    /// Metadata attached to the email for tracking purposes.
    pub fn metadata(mut self, metadata: HashMap<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Tracking options (click tracking, open tracking, transactional flag).
    pub fn options(mut self, options: EmailOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Validate the collected fields and produce the immutable options.
    ///
    /// # Errors
    /// Returns [`LettrError::InvalidInput`] when a required field is missing.
    pub fn build(self) -> Result<CreateEmailOptions> {
        let from = match self.from {
            Some(from) if !from.is_empty() => from,
            _ => return Err(LettrError::invalid_input("'from' is required")),
        };
        if self.to.is_empty() {
            return Err(LettrError::invalid_input("'to' is required"));
        }
        let subject = match self.subject {
            Some(subject) if !subject.is_empty() => subject,
            _ => return Err(LettrError::invalid_input("'subject' is required")),
        };
        if self.html.is_none() && self.text.is_none() && self.template_slug.is_none() {
            return Err(LettrError::invalid_input(
                "at least one of 'html', 'text', or 'template_slug' is required",
            ));
        }

        Ok(CreateEmailOptions {
            from,
            from_name: self.from_name,
            to: self.to,
            subject,
            html: self.html,
            text: self.text,
            template_slug: self.template_slug,
            template_version: self.template_version,
            project_id: self.project_id,
            attachments: self.attachments,
            substitution_data: self.substitution_data,
            metadata: self.metadata,
            options: self.options,
        })
    }
}

/// A file attachment. The file data must be base64 encoded.
#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    name: String,
    #[serde(rename = "type")]
    content_type: String,
    data: String,
}

impl Attachment {
    /// Start building an attachment.
    pub fn builder() -> AttachmentBuilder {
        AttachmentBuilder::default()
    }
}

/// Builder for [`Attachment`].
#[derive(Debug, Default)]
pub struct AttachmentBuilder {
    name: Option<String>,
    content_type: Option<String>,
    data: Option<String>,
}

impl AttachmentBuilder {
    /// Filename of the attachment (e.g. "invoice.pdf").
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// MIME type of the attachment (e.g. "application/pdf").
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Base64-encoded file content.
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Validate the collected fields and produce the attachment.
    ///
    /// # Errors
    /// Returns [`LettrError::InvalidInput`] when a field is missing.
    pub fn build(self) -> Result<Attachment> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(LettrError::invalid_input("attachment 'name' is required")),
        };
        let content_type = match self.content_type {
            Some(content_type) if !content_type.is_empty() => content_type,
            _ => return Err(LettrError::invalid_input("attachment 'type' is required")),
        };
        let data = match self.data {
            Some(data) if !data.is_empty() => data,
            _ => return Err(LettrError::invalid_input("attachment 'data' is required")),
        };
        Ok(Attachment { name, content_type, data })
    }
}

/// Tracking options for an email.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmailOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    click_tracking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    open_tracking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transactional: Option<bool>,
}

impl EmailOptions {
    /// Start building tracking options.
    pub fn builder() -> EmailOptionsBuilder {
        EmailOptionsBuilder::default()
    }
}

/// Builder for [`EmailOptions`]. All fields are optional.
#[derive(Debug, Default)]
pub struct EmailOptionsBuilder {
    click_tracking: Option<bool>,
    open_tracking: Option<bool>,
    transactional: Option<bool>,
}

impl EmailOptionsBuilder {
    /// Enable or disable click tracking.
    pub fn click_tracking(mut self, click_tracking: bool) -> Self {
        self.click_tracking = Some(click_tracking);
        self
    }

    /// Enable or disable open tracking.
    pub fn open_tracking(mut self, open_tracking: bool) -> Self {
        self.open_tracking = Some(open_tracking);
        self
    }

    /// Mark the email as transactional or non-transactional.
    pub fn transactional(mut self, transactional: bool) -> Self {
        self.transactional = Some(transactional);
        self
    }

    /// Produce the options. Never fails.
    pub fn build(self) -> EmailOptions {
        EmailOptions {
            click_tracking: self.click_tracking,
            open_tracking: self.open_tracking,
            transactional: self.transactional,
        }
    }
}

/// Parameters for listing sent emails with optional filtering and
/// cursor-based pagination.
#[derive(Debug, Clone, Default)]
pub struct ListEmailsParams {
    per_page: Option<u32>,
    cursor: Option<String>,
    recipients: Option<String>,
    from: Option<String>,
    to: Option<String>,
}

impl ListEmailsParams {
    /// Start building list parameters.
    pub fn builder() -> ListEmailsParamsBuilder {
        ListEmailsParamsBuilder::default()
    }

    pub(crate) fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        if let Some(cursor) = &self.cursor {
            params.push(("cursor", cursor.clone()));
        }
        if let Some(recipients) = &self.recipients {
            params.push(("recipients", recipients.clone()));
        }
        if let Some(from) = &self.from {
            params.push(("from", from.clone()));
        }
        if let Some(to) = &self.to {
            params.push(("to", to.clone()));
        }
        params
    }
}

/// Builder for [`ListEmailsParams`]. All fields are optional.
#[derive(Debug, Default)]
pub struct ListEmailsParamsBuilder {
    params: ListEmailsParams,
}

impl ListEmailsParamsBuilder {
    /// Number of results per page (1-100).
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.params.per_page = Some(per_page);
        self
    }

    /// Pagination cursor from a previous response.
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.params.cursor = Some(cursor.into());
        self
    }

    /// Filter by recipient email address.
    pub fn recipients(mut self, recipients: impl Into<String>) -> Self {
        self.params.recipients = Some(recipients.into());
        self
    }

    /// Only emails sent on or after this date (ISO 8601, e.g. "2024-01-01").
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.params.from = Some(from.into());
        self
    }

    /// Only emails sent on or before this date (ISO 8601, e.g. "2024-12-31").
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.params.to = Some(to.into());
        self
    }

    /// Produce the parameters. Never fails.
    pub fn build(self) -> ListEmailsParams {
        self.params
    }
}

/// Response returned after successfully queuing an email for delivery.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmailResponse {
    /// Unique request ID for this transmission; use it with
    /// [`Emails::get`](super::Emails::get) to retrieve delivery events.
    pub request_id: String,
    /// Number of accepted recipients.
    #[serde(default)]
    pub accepted: u32,
    /// Number of rejected recipients.
    #[serde(default)]
    pub rejected: u32,
}

/// Response from listing sent emails.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEmailsResponse {
    /// Email events matching the filters.
    #[serde(default)]
    pub results: Vec<EmailEvent>,
    /// Total number of matching events.
    #[serde(default)]
    pub total_count: u64,
    /// Cursor-based pagination info.
    pub pagination: Option<EmailsPagination>,
}

/// Cursor-based pagination info for email listings.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailsPagination {
    /// Cursor for the next page, absent on the last page.
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub per_page: u32,
}

/// Response from retrieving the events of a specific email.
#[derive(Debug, Clone, Deserialize)]
pub struct GetEmailResponse {
    /// All events for this email (injection, delivery, bounce, open, ...).
    #[serde(default)]
    pub results: Vec<EmailEvent>,
    #[serde(default)]
    pub total_count: u64,
}

/// A single email event (injection, delivery, bounce, open, click, ...).
///
/// Timestamps are ISO 8601 strings with fractional seconds and a zone
/// offset; the SDK treats them as opaque.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailEvent {
    pub event_id: String,
    /// Event type, e.g. "injection", "delivery", "bounce".
    #[serde(rename = "type")]
    pub event_type: String,
    pub timestamp: String,
    pub request_id: Option<String>,
    pub message_id: Option<String>,
    pub subject: Option<String>,
    pub friendly_from: Option<String>,
    pub sending_domain: Option<String>,
    /// Recipient address the event applies to.
    pub rcpt_to: Option<String>,
    pub raw_rcpt_to: Option<String>,
    pub recipient_domain: Option<String>,
    pub mailbox_provider: Option<String>,
    pub mailbox_provider_region: Option<String>,
    pub sending_ip: Option<String>,
    #[serde(default)]
    pub click_tracking: bool,
    #[serde(default)]
    pub open_tracking: bool,
    #[serde(default)]
    pub transactional: bool,
    /// Message size in bytes.
    #[serde(default)]
    pub msg_size: u64,
    pub injection_time: Option<String>,
    /// Classified failure reason, for bounce events.
    pub reason: Option<String>,
    pub raw_reason: Option<String>,
    pub error_code: Option<String>,
    /// Recipient metadata echoed back from the send request.
    pub rcpt_meta: Option<HashMap<String, Value>>,
}
