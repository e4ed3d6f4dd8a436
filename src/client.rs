//! The request client: encoder → transport → normalizer.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::encoding::{RequestBody, encode};
use crate::error::QueryError;
use crate::response::{Outcome, normalize};
use crate::transport::{HttpTransport, ReqwestTransport, TransportRequest};
use crate::types::{HttpConfig, Method, RequestParameters};

/// A thin request client.
///
/// Stateless apart from the transport handle: calls share nothing, carry no
/// cache, and complete independently of one another. Each call resumes the
/// caller's own task when the transport finishes, so callers need no
/// synchronization of their own.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn HttpTransport>,
    timeout: Duration,
}

impl Client {
    /// Client over the default `reqwest` transport with default
    /// configuration.
    pub fn new() -> Result<Self, QueryError> {
        Self::with_config(HttpConfig::default())
    }

    /// Client over the default `reqwest` transport built from `config`.
    pub fn with_config(config: HttpConfig) -> Result<Self, QueryError> {
        let timeout = config.timeout;
        Ok(Self {
            transport: Arc::new(ReqwestTransport::new(config)?),
            timeout,
        })
    }

    /// Client over a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            timeout: HttpConfig::default().timeout,
        }
    }

    /// Send a request with an optional JSON body.
    ///
    /// POST and PUT derive `Content-Type: application/json`; caller headers
    /// are merged afterwards and win on collision. A parameter map that
    /// fails to serialize is logged and dropped, and the request still goes
    /// out.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        headers: &HashMap<String, String>,
        parameters: Option<RequestParameters>,
    ) -> Outcome {
        let body = match parameters {
            Some(params) => RequestBody::Json(params),
            None => RequestBody::None,
        };
        self.dispatch(method, url, headers, body).await
    }

    /// Send a `multipart/form-data` request.
    ///
    /// Parts are framed in parameter insertion order under a boundary
    /// generated for this request.
    pub async fn multipart_request(
        &self,
        method: Method,
        url: &str,
        headers: &HashMap<String, String>,
        parameters: RequestParameters,
    ) -> Outcome {
        self.dispatch(method, url, headers, RequestBody::Multipart(parameters))
            .await
    }

    async fn dispatch(
        &self,
        method: Method,
        url: &str,
        headers: &HashMap<String, String>,
        body: RequestBody,
    ) -> Outcome {
        let encoded = match encode(method, url, headers, body) {
            Ok(encoded) => encoded,
            Err(e) => {
                return Outcome::Failure {
                    error: Some(e),
                    body: None,
                };
            }
        };

        let raw = self
            .transport
            .execute(TransportRequest {
                method: encoded.method,
                url: encoded.url,
                headers: encoded.headers,
                body: encoded.body,
                timeout: self.timeout,
            })
            .await;

        normalize(raw.status, raw.body.as_deref(), raw.error)
    }
}
