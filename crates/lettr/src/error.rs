//! Error types returned by the Lettr SDK.

use std::collections::HashMap;

use thiserror::Error;

/// Main error type for the Lettr SDK.
///
/// Every fallible operation returns this type. Callers can match on the
/// variant to recover programmatically, e.g. surfacing the per-field
/// messages of [`LettrError::Validation`] to an end user.
#[derive(Error, Debug)]
pub enum LettrError {
    /// A builder or facade precondition failed before any request was made
    /// (missing required field, contradictory fields, empty identifier).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network-level failure: connection refused, DNS failure, timeout,
    /// I/O error, or an interrupted request. No HTTP status is available.
    #[error("Network error: {message}")]
    Transport {
        /// Human-readable description of the failure.
        message: String,
        /// Underlying client error, when one exists.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The API returned a success status but the body could not be decoded
    /// into the expected shape.
    #[error("Failed to decode API response: {message}")]
    Decode {
        /// Human-readable description of the failure.
        message: String,
        /// Underlying parse error, when one exists.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The API returned an error response (status >= 400).
    #[error("API error (status {status}): {message}")]
    Api {
        /// Error message from the response body, or a synthetic one when
        /// the body was empty.
        message: String,
        /// HTTP status code of the response.
        status: u16,
        /// Error code from the response body (e.g. "not_found"), if present.
        error_code: Option<String>,
    },

    /// The API rejected the request with a 422 carrying field-level errors.
    ///
    /// Status code and error code for this variant are fixed at `422` and
    /// `"validation_error"`.
    #[error("Validation failed: {message}")]
    Validation {
        /// Error message from the response body.
        message: String,
        /// Field name mapped to the ordered error messages for that field.
        errors: HashMap<String, Vec<String>>,
    },
}

impl LettrError {
    /// HTTP status code of the API response, when the error carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Validation { .. } => Some(422),
            _ => None,
        }
    }

    /// Error code from the API response body (e.g. "validation_error",
    /// "not_found"), when the error carries one.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Api { error_code, .. } => error_code.as_deref(),
            Self::Validation { .. } => Some("validation_error"),
            _ => None,
        }
    }

    /// Field-level validation errors, for [`LettrError::Validation`].
    pub fn validation_errors(&self) -> Option<&HashMap<String, Vec<String>>> {
        match self {
            Self::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub(crate) fn decode(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode { message: message.into(), source: Some(source) }
    }

    pub(crate) fn empty_body() -> Self {
        Self::Decode { message: "response body was empty".to_string(), source: None }
    }
}

/// Convert client errors into the transport variant.
impl From<reqwest::Error> for LettrError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "failed to connect to the Lettr API".to_string()
        } else {
            "network error communicating with the Lettr API".to_string()
        };
        Self::Transport { message, source: Some(err) }
    }
}

/// Result type alias for Lettr SDK operations.
pub type Result<T> = std::result::Result<T, LettrError>;
