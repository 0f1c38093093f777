//! # waha-rs
//!
//! Typed async Rust client for [WAHA](https://waha.devlike.pro), the
//! self-hosted WhatsApp HTTP API.
//!
//! ## Overview
//!
//! The crate is a thin, predictable layer over the server's REST surface:
//! one shared request pipeline, and resource-grouped operations (sessions,
//! messages, chats, contacts, groups, status, profile, channels) that map
//! each call onto a verb, path, query and JSON body.
//!
//! Every call resolves to either a decoded [`Payload`] or a single typed
//! [`Error`]; HTTP status handling, error-message extraction and
//! content-type-driven decoding all live in the pipeline, never in the
//! operation groups.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use waha_rs::{SendTextRequest, WahaClient};
//!
//! #[tokio::main]
//! async fn main() -> waha_rs::Result<()> {
//!     let client = WahaClient::builder()
//!         .base_url("http://localhost:3000")
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let sent = client
//!         .messages()
//!         .send_text(SendTextRequest::new("default", "1234567890@c.us", "Hello, World!"))
//!         .await?;
//!     println!("{}", sent);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client entry point and low-level request surface |
//! | [`config`] | Builder and configuration defaults |
//! | [`transport`] | Request pipeline, outcome classification, payloads |
//! | [`facade`] | Resource-grouped operations |
//! | [`media`] | Local file-to-base64 helpers for media endpoints |
//! | [`error`] | Error taxonomy |

pub mod client;
pub mod config;
pub mod error;
pub mod facade;
pub mod media;
pub mod transport;

// Re-export main types for convenience
pub use client::WahaClient;
pub use config::WahaClientBuilder;
pub use error::{Error, Result};
pub use facade::{
    CreateSessionRequest, ListContactsRequest, Poll, QrFormat, SendSeenRequest, SendTextRequest,
    SendVideoRequest,
};
pub use media::MediaFile;
pub use transport::Payload;
