//! Error handling types for jsonquery.
//!
//! This module is intentionally dependency-light: every variant carries a
//! rendered message rather than the source error, so outcomes stay `Clone`
//! and can be handed across the failure callback boundary freely.

mod conversions;

use thiserror::Error;

/// Errors surfaced through the failure side of an [`crate::Outcome`].
///
/// None of these are fatal to the process; they describe why a single
/// request did not produce usable JSON.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Network-level failure (DNS, connect, TLS, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body was present but is not valid JSON.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Request completed with a status other than 200.
    ///
    /// Produced only by [`crate::Outcome::into_result`]; the raw
    /// classification keeps `error: None` for this case.
    #[error("Non-success status")]
    NonSuccessStatus,

    /// A response arrived with neither body bytes nor a transport error.
    #[error("Malformed response: no body and no transport error")]
    MalformedResponse,

    /// The request URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid header name/value or other request construction problem.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for jsonquery operations.
pub type Result<T> = std::result::Result<T, QueryError>;
