//! jsonquery
//!
//! A thin client-side HTTP request helper. It builds requests (JSON bodies or
//! `multipart/form-data` uploads), dispatches them through an injectable
//! transport, and normalizes responses into parsed JSON with a simplified
//! success/failure outcome. Null values are recursively stripped from decoded
//! JSON before data reaches the caller.
//!
//! The transport is a collaborator, not part of the core: anything that can
//! take a [`transport::TransportRequest`] and produce a
//! [`transport::RawResponse`] plugs in behind the [`transport::HttpTransport`]
//! trait. A `reqwest`-backed default is provided.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use jsonquery::{Client, Method, Outcome, RequestParameters};
//!
//! let client = Client::new()?;
//! let params = RequestParameters::new().with("name", "value");
//! let headers = HashMap::new();
//! match client.request(Method::Post, "https://api.example.com/items", &headers, Some(params)).await {
//!     Outcome::Success(json) => println!("{json}"),
//!     Outcome::Failure { error, body } => eprintln!("{error:?} {body:?}"),
//! }
//! ```
#![deny(unsafe_code)]

pub mod client;
pub mod encoding;
pub mod error;
pub mod response;
pub mod transport;
pub mod types;

pub use client::Client;
pub use error::{QueryError, Result};
pub use response::{Outcome, normalize, strip_nulls};
pub use transport::{HttpTransport, RawResponse, ReqwestTransport, TransportRequest};
pub use types::{Attachment, HttpConfig, Method, MimeType, ParameterValue, RequestParameters};
