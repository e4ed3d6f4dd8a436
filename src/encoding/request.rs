//! Request assembly: header derivation, caller-header merge, body encoding.

use std::collections::HashMap;

use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::error::QueryError;
use crate::types::{Method, RequestParameters};

use super::multipart::{encode_multipart, generate_boundary};

/// Body selector for [`encode`].
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// No body.
    None,
    /// JSON-encode the plain parameter map.
    Json(RequestParameters),
    /// Frame the parameters as `multipart/form-data`.
    Multipart(RequestParameters),
}

/// A transport-ready request.
#[derive(Debug, Clone)]
pub struct EncodedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// Build a transport-ready request.
///
/// Method-derived headers are applied first, then the caller's headers,
/// which win on key collision. A JSON serialization failure is not fatal:
/// it is logged and the request proceeds without a body.
pub fn encode(
    method: Method,
    url: &str,
    headers: &HashMap<String, String>,
    body: RequestBody,
) -> Result<EncodedRequest, QueryError> {
    let mut header_map = HeaderMap::new();
    let mut body_bytes = None;

    match body {
        RequestBody::None => {
            if matches!(method, Method::Post | Method::Put) {
                header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
        }
        RequestBody::Json(params) => {
            if matches!(method, Method::Post | Method::Put) {
                header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            if params.has_attachments() {
                tracing::warn!("attachment parameters have no JSON form and are skipped");
            }
            match serde_json::to_vec_pretty(&params.to_json_object()) {
                Ok(bytes) => body_bytes = Some(Bytes::from(bytes)),
                Err(e) => {
                    tracing::warn!("error attaching parameters, sending without body: {e}");
                }
            }
        }
        RequestBody::Multipart(params) => {
            let boundary = generate_boundary();
            let content_type = format!("multipart/form-data; boundary={boundary}");
            header_map.insert(
                CONTENT_TYPE,
                HeaderValue::from_str(&content_type)
                    .map_err(|e| QueryError::Configuration(format!("Invalid content type: {e}")))?,
            );
            body_bytes = Some(encode_multipart(&params, &boundary));
        }
    }

    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| QueryError::Configuration(format!("Invalid header name '{name}': {e}")))?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            QueryError::Configuration(format!("Invalid header value '{value}': {e}"))
        })?;
        header_map.insert(header_name, header_value);
    }

    Ok(EncodedRequest {
        method,
        url: url.to_string(),
        headers: header_map,
        body: body_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_post_json_derives_content_type_and_body() {
        let params = RequestParameters::new().with("name", "a").with("count", 2);
        let req = encode(Method::Post, "https://x.test/y", &HashMap::new(), RequestBody::Json(params))
            .unwrap();
        assert_eq!(
            req.headers.get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let decoded: Value = serde_json::from_slice(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(decoded, json!({"name": "a", "count": 2}));
    }

    #[test]
    fn test_json_body_skips_attachment_parameters() {
        let params = RequestParameters::new()
            .with("name", "a")
            .with("file", crate::Attachment::png(vec![0x89u8], "x.png"));
        let req = encode(Method::Post, "https://x.test/y", &HashMap::new(), RequestBody::Json(params))
            .unwrap();
        let decoded: Value = serde_json::from_slice(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(decoded, json!({"name": "a"}));
    }

    #[test]
    fn test_get_carries_no_derived_content_type() {
        let req = encode(Method::Get, "https://x.test/y", &HashMap::new(), RequestBody::None)
            .unwrap();
        assert!(req.headers.get(CONTENT_TYPE).is_none());
        assert!(req.body.is_none());
    }

    #[test]
    fn test_caller_headers_win_on_collision() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "text/custom".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());
        let req = encode(
            Method::Post,
            "https://x.test/y",
            &headers,
            RequestBody::Json(RequestParameters::new().with("k", "v")),
        )
        .unwrap();
        assert_eq!(req.headers.get(CONTENT_TYPE).unwrap(), "text/custom");
        assert_eq!(req.headers.get("Accept").unwrap(), "application/json");
    }

    #[test]
    fn test_multipart_content_type_carries_boundary() {
        let params = RequestParameters::new().with("k", "v");
        let req = encode(
            Method::Post,
            "https://x.test/upload",
            &HashMap::new(),
            RequestBody::Multipart(params),
        )
        .unwrap();
        let ct = req.headers.get(CONTENT_TYPE).unwrap().to_str().unwrap();
        let boundary = ct
            .strip_prefix("multipart/form-data; boundary=")
            .expect("multipart content type");
        let body = String::from_utf8_lossy(req.body.as_deref().unwrap()).into_owned();
        assert!(body.contains(&format!("\r\n--{boundary}\r\n")));
        assert!(body.ends_with(&format!("\r\n--{boundary}--\r\n")));
    }

    #[test]
    fn test_invalid_header_name_is_a_configuration_error() {
        let mut headers = HashMap::new();
        headers.insert("bad header".to_string(), "v".to_string());
        let err = encode(Method::Get, "https://x.test", &headers, RequestBody::None).unwrap_err();
        assert!(matches!(err, QueryError::Configuration(_)));
    }
}
