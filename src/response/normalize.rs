//! Outcome classification for raw transport results.

use serde_json::Value;

use crate::error::QueryError;

use super::sanitize::strip_nulls;

/// The normalized result of one request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Status 200 with a decodable body; nulls have been stripped.
    Success(Value),
    /// Anything else. `body` is the decoded-but-unsanitized JSON when the
    /// body was decodable, and `error` is absent for plain non-200
    /// responses.
    Failure {
        error: Option<QueryError>,
        body: Option<Value>,
    },
}

impl Outcome {
    /// Whether this is the success arm.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Convert to a `Result`, substituting [`QueryError::NonSuccessStatus`]
    /// when a failure carries no error of its own (the non-200 case).
    pub fn into_result(self) -> Result<Value, QueryError> {
        match self {
            Self::Success(json) => Ok(json),
            Self::Failure { error: Some(e), .. } => Err(e),
            Self::Failure { error: None, .. } => Err(QueryError::NonSuccessStatus),
        }
    }
}

/// Classify a raw transport result.
///
/// Evaluated strictly in order:
/// 1. no status at all → failure with the transport error;
/// 2. status but no body → failure with the transport error, or
///    [`QueryError::MalformedResponse`] when there is none;
/// 3. body present → decode, then let a transport error take precedence
///    over the decoded content; otherwise only an exact status of 200 is a
///    success. 201, 204 and the rest classify as failures with the decoded
///    body attached.
pub fn normalize(
    status: Option<u16>,
    body: Option<&[u8]>,
    transport_error: Option<QueryError>,
) -> Outcome {
    let Some(status) = status else {
        return Outcome::Failure {
            error: transport_error,
            body: None,
        };
    };

    tracing::debug!(status, "response received");

    let Some(bytes) = body else {
        if transport_error.is_some() {
            return Outcome::Failure {
                error: transport_error,
                body: None,
            };
        }
        tracing::warn!(status, "bad response: no body and no transport error");
        return Outcome::Failure {
            error: Some(QueryError::MalformedResponse),
            body: None,
        };
    };

    let parsed: Value = match serde_json::from_slice(bytes) {
        Ok(v) => v,
        Err(e) => {
            return Outcome::Failure {
                error: Some(QueryError::Decode(e.to_string())),
                body: None,
            };
        }
    };

    if transport_error.is_some() {
        return Outcome::Failure {
            error: transport_error,
            body: Some(parsed),
        };
    }

    if status != 200 {
        return Outcome::Failure {
            error: None,
            body: Some(parsed),
        };
    }

    Outcome::Success(strip_nulls(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transport_err() -> QueryError {
        QueryError::Transport("connection reset".to_string())
    }

    #[test]
    fn test_no_status_yields_transport_failure() {
        let outcome = normalize(None, Some(br#"{"ignored": true}"#), Some(transport_err()));
        assert_eq!(
            outcome,
            Outcome::Failure {
                error: Some(transport_err()),
                body: None
            }
        );
    }

    #[test]
    fn test_no_status_no_error() {
        let outcome = normalize(None, None, None);
        assert_eq!(outcome, Outcome::Failure { error: None, body: None });
    }

    #[test]
    fn test_no_body_with_error() {
        let outcome = normalize(Some(500), None, Some(transport_err()));
        assert_eq!(
            outcome,
            Outcome::Failure {
                error: Some(transport_err()),
                body: None
            }
        );
    }

    #[test]
    fn test_no_body_no_error_is_malformed() {
        let outcome = normalize(Some(204), None, None);
        assert_eq!(
            outcome,
            Outcome::Failure {
                error: Some(QueryError::MalformedResponse),
                body: None
            }
        );
    }

    #[test]
    fn test_undecodable_body_is_a_decode_failure() {
        let outcome = normalize(Some(200), Some(b"{not json"), None);
        match outcome {
            Outcome::Failure { error: Some(QueryError::Decode(_)), body: None } => {}
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_transport_error_takes_precedence_over_decoded_body() {
        let outcome = normalize(Some(200), Some(br#"{"ok": true}"#), Some(transport_err()));
        assert_eq!(
            outcome,
            Outcome::Failure {
                error: Some(transport_err()),
                body: Some(json!({"ok": true}))
            }
        );
    }

    #[test]
    fn test_status_200_is_success_with_nulls_stripped() {
        let body = br#"{"a": 1, "b": null, "list": [null, 2]}"#;
        let outcome = normalize(Some(200), Some(body), None);
        assert_eq!(outcome, Outcome::Success(json!({"a": 1, "list": [2]})));
    }

    #[test]
    fn test_status_201_is_a_failure_with_unsanitized_body() {
        let body = br#"{"id": 7, "note": null}"#;
        let outcome = normalize(Some(201), Some(body), None);
        // failure body keeps its nulls
        assert_eq!(
            outcome,
            Outcome::Failure {
                error: None,
                body: Some(json!({"id": 7, "note": null}))
            }
        );
    }

    #[test]
    fn test_fragment_body_decodes() {
        // bare scalars are valid JSON documents
        let outcome = normalize(Some(200), Some(b"42"), None);
        assert_eq!(outcome, Outcome::Success(json!(42)));
    }

    #[test]
    fn test_top_level_null_body_survives_success_path() {
        let outcome = normalize(Some(200), Some(b"null"), None);
        assert_eq!(outcome, Outcome::Success(Value::Null));
    }

    #[test]
    fn test_into_result_maps_non_success_status() {
        let outcome = normalize(Some(404), Some(br#"{"error": "missing"}"#), None);
        let err = outcome.into_result().unwrap_err();
        assert!(matches!(err, QueryError::NonSuccessStatus));
    }

    #[test]
    fn test_into_result_success() {
        let outcome = normalize(Some(200), Some(br#"{"ok": true}"#), None);
        assert_eq!(outcome.into_result().unwrap(), json!({"ok": true}));
    }
}
