//! Request encoding.
//!
//! Turns a method, URL, caller headers, and a parameter set into a
//! transport-ready request: either a JSON body with
//! `Content-Type: application/json`, or a `multipart/form-data` body with a
//! generated boundary.

pub mod multipart;
pub mod request;

pub use multipart::{encode_multipart, generate_boundary};
pub use request::{EncodedRequest, RequestBody, encode};
