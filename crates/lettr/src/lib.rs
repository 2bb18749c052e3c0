//! # Lettr Rust SDK
//!
//! Client for the Lettr transactional email API: send email, manage sending
//! domains, templates, and webhooks.
//!
//! Create a [`Lettr`] instance with your API key and access services via its
//! methods:
//!
//! ```no_run
//! use lettr::{CreateEmailOptions, Lettr};
//!
//! # async fn example() -> Result<(), lettr::LettrError> {
//! let lettr = Lettr::new("your-api-key")?;
//!
//! // Send an email
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
//! println!("queued as {}", response.request_id);
//!
//! // List domains
//! let domains = lettr.domains().list().await?;
//! println!("{} domains", domains.domains.len());
//! # Ok(())
//! # }
//! ```
//!
//! Every operation performs exactly one HTTP request with a 30 second
//! timeout and returns [`LettrError`] on failure; callers can match on the
//! variant (input validation, transport, decode, API, field-level
//! validation) to react programmatically. Nothing is retried internally.

pub mod error;
mod http;
pub mod services;

pub use error::{LettrError, Result};
pub use services::domains::{self, Domains};
pub use services::emails::{self, Emails};
pub use services::templates::{self, Templates};
pub use services::webhooks::{self, Webhooks};

// Commonly used request types, re-exported at the crate root.
pub use services::domains::CreateDomainOptions;
pub use services::emails::{Attachment, CreateEmailOptions, EmailOptions, ListEmailsParams};
pub use services::templates::{CreateTemplateOptions, ListTemplatesParams};

use http::HttpClient;

/// Main entry point for the Lettr SDK.
///
/// Holds the credential and hands a shared HTTP client to the per-resource
/// services. Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Lettr {
    http: HttpClient,
}

impl Lettr {
    /// Create a new client with the given API key.
    ///
    /// # Errors
    /// Returns [`LettrError::InvalidInput`] when the key is empty, or
    /// [`LettrError::Transport`] when the underlying HTTP client cannot be
    /// constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LettrError::invalid_input(
                "API key is required. Get yours at https://app.lettr.com",
            ));
        }
        Ok(Self { http: HttpClient::new(api_key)? })
    }

    /// The emails service, for sending and retrieving emails.
    pub fn emails(&self) -> Emails {
        Emails::new(self.http.clone())
    }

    /// The domains service, for managing sending domains.
    pub fn domains(&self) -> Domains {
        Domains::new(self.http.clone())
    }

    /// The templates service, for managing email templates.
    pub fn templates(&self) -> Templates {
        Templates::new(self.http.clone())
    }

    /// The webhooks service, for managing webhook configurations.
    pub fn webhooks(&self) -> Webhooks {
        Webhooks::new(self.http.clone())
    }
}
