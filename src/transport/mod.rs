//! Shared request/response pipeline.
//!
//! Every facade operation flows through [`HttpTransport`]: one network
//! call per invocation, outcome classified into a [`Payload`] or a typed
//! [`crate::Error`]. The facades never touch a raw HTTP response.

pub mod http;
pub mod payload;

pub use http::HttpTransport;
pub use payload::Payload;
