//! Sending and retrieving emails.
//!
//! ```no_run
//! use lettr::{Lettr, CreateEmailOptions};
//! # async fn example() -> Result<(), lettr::LettrError> {
//! let lettr = Lettr::new("your-api-key")?;
//!
//! let response = lettr
//!     .emails()
//!     .send(
//!         CreateEmailOptions::builder()
//!             .from("sender@example.com")
//!             .to(["recipient@example.com"])
//!             .subject("Hello!")
//!             .html("<p>Hello, world!</p>")
//!             .build()?,
//!     )
//!     .await?;
//!
//! println!("queued as {}", response.request_id);
//! # Ok(())
//! # }
//! ```

pub mod types;

pub use types::{
    Attachment, AttachmentBuilder, CreateEmailOptions, CreateEmailOptionsBuilder,
    CreateEmailResponse, EmailEvent, EmailOptions, EmailOptionsBuilder, EmailsPagination,
    GetEmailResponse, ListEmailsParams, ListEmailsParamsBuilder, ListEmailsResponse,
};

use crate::error::{LettrError, Result};
use crate::http::HttpClient;

/// Service for sending and retrieving emails.
pub struct Emails {
    http: HttpClient,
}

impl Emails {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Send a transactional email.
    ///
    /// Returns the request ID and per-recipient acceptance counts.
    pub async fn send(&self, options: CreateEmailOptions) -> Result<CreateEmailResponse> {
        self.http.post("/emails", &options).await
    }

    /// List sent emails with optional filtering and cursor pagination.
    pub async fn list(&self, params: Option<ListEmailsParams>) -> Result<ListEmailsResponse> {
        let query = params.as_ref().map(ListEmailsParams::to_query_params);
        self.http.get("/emails", query.as_deref()).await
    }

    /// Get all events for a specific email transmission (injection,
    /// delivery, bounce, ...).
    pub async fn get(&self, request_id: &str) -> Result<GetEmailResponse> {
        if request_id.is_empty() {
            return Err(LettrError::invalid_input("'request_id' is required"));
        }
        self.http.get(&format!("/emails/{request_id}"), None).await
    }
}
