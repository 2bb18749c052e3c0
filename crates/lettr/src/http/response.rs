//! Translation of raw HTTP responses into typed results.
//!
//! The API wraps success payloads inconsistently: some endpoints return
//! `{ "data": {...} }`, others return the object directly (e.g. list
//! endpoints returning `{"templates": [...], "pagination": {...}}`), so the
//! translator probes for a `data` key rather than assuming a fixed envelope.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::LettrError;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Convert a raw `(status, body)` pair into a decoded value of type `T`.
///
/// Returns `Ok(None)` for an intentionally empty success body (DELETE 204
/// and the like); callers expecting a payload decide how to treat that.
/// Statuses >= 400 are mapped to [`LettrError::Api`] or
/// [`LettrError::Validation`], success bodies that fail to decode to
/// [`LettrError::Decode`].
pub(crate) fn translate<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Option<T>, LettrError> {
    if status >= 400 {
        return Err(error_from_response(status, body));
    }

    if body.is_empty() {
        return Ok(None);
    }

    let mut envelope: Value = serde_json::from_str(body)
        .map_err(|e| LettrError::decode("response body is not valid JSON", e))?;

    // Unwrap the `data` envelope when present; decode the whole body otherwise.
    let payload = match envelope.as_object_mut().and_then(|obj| obj.remove("data")) {
        Some(data) => data,
        None => envelope,
    };

    serde_json::from_value(payload)
        .map(Some)
        .map_err(|e| LettrError::decode("response body did not match the expected shape", e))
}

/// Build the error for a response with status >= 400.
///
/// Error bodies are not guaranteed to be valid JSON (intermediaries may
/// return HTML error pages); a body that fails to parse as a JSON object
/// becomes the error message verbatim.
pub(crate) fn error_from_response(status: u16, body: &str) -> LettrError {
    if body.is_empty() {
        return LettrError::Api {
            message: format!("API request failed with status {status}"),
            status,
            error_code: None,
        };
    }

    let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) else {
        return LettrError::Api { message: body.to_string(), status, error_code: None };
    };

    let message = fields
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_ERROR)
        .to_string();
    let error_code = fields.get("error_code").and_then(Value::as_str).map(str::to_string);

    // 422 with a structured `errors` object refines into a validation error.
    if status == 422 {
        if let Some(Value::Object(field_errors)) = fields.get("errors") {
            let errors: HashMap<String, Vec<String>> = field_errors
                .iter()
                .map(|(field, messages)| {
                    let messages = messages
                        .as_array()
                        .map(|values| {
                            values
                                .iter()
                                .filter_map(Value::as_str)
                                .map(str::to_string)
                                .collect()
                        })
                        .unwrap_or_default();
                    (field.clone(), messages)
                })
                .collect();
            return LettrError::Validation { message, errors };
        }
    }

    LettrError::Api { message, status, error_code }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        id: String,
        count: i64,
    }

    #[test]
    fn unwraps_data_envelope() {
        let body = r#"{"data":{"id":"abc","count":2},"id":"outer","count":99}"#;
        let decoded: Payload = translate(200, body).expect("should decode").expect("payload");
        assert_eq!(decoded, Payload { id: "abc".to_string(), count: 2 });
    }

    #[test]
    fn decodes_whole_body_without_data_key() {
        let body = r#"{"id":"abc","count":7}"#;
        let decoded: Payload = translate(200, body).expect("should decode").expect("payload");
        assert_eq!(decoded, Payload { id: "abc".to_string(), count: 7 });
    }

    #[test]
    fn empty_body_on_204_is_no_value() {
        let decoded: Option<Payload> = translate(204, "").expect("should succeed");
        assert!(decoded.is_none());
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        let result: Result<Option<Payload>, _> = translate(200, "not json");
        assert!(matches!(result, Err(LettrError::Decode { .. })));
    }

    #[test]
    fn shape_mismatch_is_decode_error() {
        let result: Result<Option<Payload>, _> = translate(200, r#"{"id":42}"#);
        assert!(matches!(result, Err(LettrError::Decode { .. })));
    }

    #[test]
    fn status_422_with_errors_object_is_validation_error() {
        let body = r#"{"message":"Invalid","errors":{"to":["is required"]}}"#;
        let err = translate::<Payload>(422, body).expect_err("should fail");
        match err {
            LettrError::Validation { message, errors } => {
                assert_eq!(message, "Invalid");
                assert_eq!(errors.get("to"), Some(&vec!["is required".to_string()]));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn validation_error_preserves_message_order_per_field() {
        let body = r#"{"message":"Invalid","errors":{"to":["is required","must be an email"]}}"#;
        let err = translate::<Payload>(422, body).expect_err("should fail");
        let errors = err.validation_errors().expect("field errors");
        assert_eq!(
            errors.get("to"),
            Some(&vec!["is required".to_string(), "must be an email".to_string()])
        );
    }

    #[test]
    fn status_422_without_errors_object_is_api_error() {
        let body = r#"{"message":"Unprocessable","error_code":"unprocessable"}"#;
        let err = translate::<Payload>(422, body).expect_err("should fail");
        match err {
            LettrError::Api { message, status, error_code } => {
                assert_eq!(message, "Unprocessable");
                assert_eq!(status, 422);
                assert_eq!(error_code, Some("unprocessable".to_string()));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn status_500_maps_message_and_error_code() {
        let body = r#"{"message":"boom","error_code":"internal"}"#;
        let err = translate::<Payload>(500, body).expect_err("should fail");
        match err {
            LettrError::Api { message, status, error_code } => {
                assert_eq!(message, "boom");
                assert_eq!(status, 500);
                assert_eq!(error_code, Some("internal".to_string()));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn non_json_error_body_becomes_message_verbatim() {
        let err = translate::<Payload>(400, "<html>Bad Gateway</html>").expect_err("should fail");
        match err {
            LettrError::Api { message, status, error_code } => {
                assert_eq!(message, "<html>Bad Gateway</html>");
                assert_eq!(status, 400);
                assert_eq!(error_code, None);
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn empty_error_body_gets_synthetic_message() {
        let err = translate::<Payload>(404, "").expect_err("should fail");
        match err {
            LettrError::Api { message, status, error_code } => {
                assert_eq!(message, "API request failed with status 404");
                assert_eq!(status, 404);
                assert_eq!(error_code, None);
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn error_body_without_message_defaults_to_unknown() {
        let err = translate::<Payload>(500, r#"{"error_code":"internal"}"#).expect_err("fail");
        match err {
            LettrError::Api { message, .. } => assert_eq!(message, "Unknown error"),
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn non_object_json_error_body_falls_back_to_raw_text() {
        // Valid JSON but not an object: the raw body becomes the message.
        let err = translate::<Payload>(502, r#""upstream down""#).expect_err("should fail");
        match err {
            LettrError::Api { message, error_code, .. } => {
                assert_eq!(message, r#""upstream down""#);
                assert_eq!(error_code, None);
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }
}
