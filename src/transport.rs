//! HTTP transport abstraction.
//!
//! The transport is an injectable collaborator: it takes a fully encoded
//! request and yields whatever it observed on the wire, without judging the
//! outcome. Classification lives in [`crate::response`], which is why
//! [`RawResponse`] can legitimately carry both an error and body bytes at
//! the same time. Tests use this seam to return synthetic responses without
//! touching the network.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;

use crate::error::QueryError;
use crate::types::{HttpConfig, Method};

/// Transport-level request data.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    /// Fixed deadline for the whole request/response cycle.
    pub timeout: Duration,
}

/// What the transport observed: status, headers, body bytes, and any
/// transport-level error.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub status: Option<u16>,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    pub error: Option<QueryError>,
}

impl RawResponse {
    /// A response that never got off the ground: no status, just an error.
    pub fn from_error(error: QueryError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}

/// The network-sending collaborator.
///
/// Implementations must not retry, coalesce, or reorder: each call is one
/// independent request/response pair.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> RawResponse;
}

/// Default transport backed by `reqwest`.
///
/// Built from an explicit [`HttpConfig`]; no global session state is
/// consulted.
pub struct ReqwestTransport {
    client: reqwest::Client,
    default_headers: HeaderMap,
}

impl ReqwestTransport {
    /// Build a transport from `config`.
    pub fn new(config: HttpConfig) -> Result<Self, QueryError> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout);
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let mut default_headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let header_name = reqwest::header::HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| {
                    QueryError::Configuration(format!("Invalid header name '{name}': {e}"))
                })?;
            let header_value = reqwest::header::HeaderValue::from_str(value).map_err(|e| {
                QueryError::Configuration(format!("Invalid header value '{value}': {e}"))
            })?;
            default_headers.insert(header_name, header_value);
        }
        let client = builder
            .build()
            .map_err(|e| QueryError::Configuration(format!("Failed to build client: {e}")))?;
        Ok(Self {
            client,
            default_headers,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> RawResponse {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let url = match reqwest::Url::parse(&request.url) {
            Ok(url) => url,
            Err(e) => {
                return RawResponse::from_error(QueryError::InvalidUrl(format!(
                    "{}: {e}",
                    request.url
                )));
            }
        };

        let mut builder = self
            .client
            .request(method, url)
            .headers(self.default_headers.clone())
            .headers(request.headers)
            .timeout(request.timeout);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return RawResponse::from_error(QueryError::Transport(e.to_string())),
        };

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        match response.bytes().await {
            // an empty body reads as no body at all, so classification can
            // tell "nothing arrived" apart from a zero-length document
            Ok(bytes) => RawResponse {
                status: Some(status),
                headers,
                body: (!bytes.is_empty()).then_some(bytes),
                error: None,
            },
            // response line arrived but the body read failed: keep the
            // status so classification sees a response with an error
            Err(e) => RawResponse {
                status: Some(status),
                headers,
                body: None,
                error: Some(QueryError::Transport(e.to_string())),
            },
        }
    }
}
