//! Client entry point.
//!
//! [`WahaClient`] holds the one shared [`HttpTransport`] instance; the
//! resource accessors hand out lightweight facades that borrow it. The
//! low-level `request`/`get`/`post`/`put`/`delete` surface is exposed as
//! an escape hatch for endpoints the facades do not cover.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::config::WahaClientBuilder;
use crate::facade::{Channels, Chats, Contacts, Groups, Messages, Profile, Sessions, Status};
use crate::transport::{HttpTransport, Payload};
use crate::Result;

/// Async client for a WAHA server.
///
/// Cheap to clone; every clone shares the same transport and immutable
/// configuration, so a single client can serve many tasks concurrently.
#[derive(Clone, Debug)]
pub struct WahaClient {
    http: Arc<HttpTransport>,
}

impl WahaClient {
    /// Connect to a server without an API key, with default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        WahaClientBuilder::new().base_url(base_url).build()
    }

    pub fn builder() -> WahaClientBuilder {
        WahaClientBuilder::new()
    }

    pub(crate) fn from_transport(transport: HttpTransport) -> Self {
        Self {
            http: Arc::new(transport),
        }
    }

    /// Base URL the client was configured with.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Session lifecycle and pairing.
    pub fn sessions(&self) -> Sessions<'_> {
        Sessions::new(&self.http)
    }

    /// Sending and manipulating messages.
    pub fn messages(&self) -> Messages<'_> {
        Messages::new(&self.http)
    }

    /// Chat listing and chat-level actions.
    pub fn chats(&self) -> Chats<'_> {
        Chats::new(&self.http)
    }

    /// Contact lookup and management.
    pub fn contacts(&self) -> Contacts<'_> {
        Contacts::new(&self.http)
    }

    /// Group management.
    pub fn groups(&self) -> Groups<'_> {
        Groups::new(&self.http)
    }

    /// Status (stories) publishing.
    pub fn status(&self) -> Status<'_> {
        Status::new(&self.http)
    }

    /// Own-profile helpers.
    pub fn profile(&self) -> Profile<'_> {
        Profile::new(&self.http)
    }

    /// Channel operations.
    pub fn channels(&self) -> Channels<'_> {
        Channels::new(&self.http)
    }

    /// Issue a request against an arbitrary endpoint.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: Option<&[(String, String)]>,
        json: Option<&Value>,
    ) -> Result<Payload> {
        self.http.request(method, path, params, json).await
    }

    pub async fn get(&self, path: &str, params: Option<&[(String, String)]>) -> Result<Payload> {
        self.http.get(path, params).await
    }

    pub async fn post(&self, path: &str, json: Option<&Value>) -> Result<Payload> {
        self.http.post(path, json).await
    }

    pub async fn put(&self, path: &str, json: Option<&Value>) -> Result<Payload> {
        self.http.put(path, json).await
    }

    pub async fn delete(&self, path: &str) -> Result<Payload> {
        self.http.delete(path).await
    }
}
