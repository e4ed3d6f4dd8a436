//! `multipart/form-data` body framing.
//!
//! The framing is produced by hand rather than delegated to the HTTP layer
//! so the byte layout stays under this crate's control: each part is
//! preceded by `\r\n--{boundary}\r\n`, and a single `\r\n--{boundary}--\r\n`
//! closes the body.

use bytes::{BufMut, Bytes, BytesMut};

use crate::types::{ParameterValue, RequestParameters};

/// Fixed tag prefixing every generated boundary.
const BOUNDARY_TAG: &str = "NET-POST-boundary";

/// Generate a boundary token unique to one request.
///
/// Two independent random 32-bit values behind a fixed tag; high enough
/// entropy that collision with part content is not a practical concern.
pub fn generate_boundary() -> String {
    format!(
        "{BOUNDARY_TAG}-{}-{}",
        rand::random::<u32>(),
        rand::random::<u32>()
    )
}

/// Frame `params` into a multipart body using `boundary`.
///
/// Parts are emitted in insertion order. Attachment parts carry a
/// `filename` clause and a `Content-Type` line; for
/// [`crate::MimeType::Unknown`] the `Content-Type` value is empty rather
/// than the header being dropped, matching the wire format existing
/// consumers parse. Plain values are rendered as text parts.
pub fn encode_multipart(params: &RequestParameters, boundary: &str) -> Bytes {
    let mut body = BytesMut::new();

    for (key, value) in params.iter() {
        body.put_slice(format!("\r\n--{boundary}\r\n").as_bytes());

        match value {
            ParameterValue::Attachment(att) => {
                body.put_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{key}\"; filename=\"{}\"\r\n",
                        att.filename()
                    )
                    .as_bytes(),
                );
                let mime = att.mime_type().as_str().unwrap_or_default();
                body.put_slice(format!("Content-Type: {mime}\r\n\r\n").as_bytes());
                body.put_slice(att.bytes());
            }
            ParameterValue::Value(v) => {
                body.put_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{key}\"\r\n\r\n{}",
                        ParameterValue::render_text(v)
                    )
                    .as_bytes(),
                );
            }
        }
    }

    body.put_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body.freeze()
}
