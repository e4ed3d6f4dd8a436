//! Core data types: attachments, request parameters, HTTP configuration.

pub mod attachment;
pub mod http;
pub mod params;

pub use attachment::{Attachment, MimeType};
pub use http::{HttpConfig, HttpConfigBuilder};
pub use params::{Method, ParameterValue, RequestParameters};
