//! Type conversions for `QueryError`.
//!
//! From trait implementations for the error types produced by the
//! transport and decode layers.

use super::QueryError;

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let query_err: QueryError = json_err.into();
        assert!(matches!(query_err, QueryError::Decode(_)));
    }
}
