//! Session lifecycle and pairing.
//!
//! A session is one WhatsApp account connection managed by the server,
//! identified by name.

use serde_json::{json, Map, Value};

use crate::transport::{HttpTransport, Payload};
use crate::Result;

/// QR rendering requested from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrFormat {
    /// A PNG image of the code.
    Image,
    /// The raw pairing value.
    Raw,
}

impl QrFormat {
    fn as_str(self) -> &'static str {
        match self {
            QrFormat::Image => "image",
            QrFormat::Raw => "raw",
        }
    }
}

/// Options for [`Sessions::create`].
#[derive(Debug, Clone)]
pub struct CreateSessionRequest {
    name: Option<String>,
    config: Option<Value>,
    start: bool,
}

impl CreateSessionRequest {
    pub fn new() -> Self {
        Self {
            name: None,
            config: None,
            start: true,
        }
    }

    /// Session name; the server generates one when omitted.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Server-side session configuration object.
    pub fn config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }

    /// Create the session without starting it.
    pub fn no_autostart(mut self) -> Self {
        self.start = false;
        self
    }

    fn into_body(self) -> Value {
        let mut body = Map::new();
        if let Some(name) = self.name {
            body.insert("name".to_string(), Value::String(name));
        }
        if let Some(config) = self.config {
            body.insert("config".to_string(), config);
        }
        if !self.start {
            body.insert("start".to_string(), Value::Bool(false));
        }
        Value::Object(body)
    }
}

impl Default for CreateSessionRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Session operations.
pub struct Sessions<'a> {
    http: &'a HttpTransport,
}

impl<'a> Sessions<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// List sessions; `all` includes stopped ones.
    pub async fn list(&self, all: bool) -> Result<Value> {
        let params = all.then(|| vec![("all".to_string(), "true".to_string())]);
        self.http
            .get("/api/sessions", params.as_deref())
            .await?
            .into_json()
    }

    pub async fn get(&self, session: &str) -> Result<Value> {
        self.http
            .get(&format!("/api/sessions/{}", session), None)
            .await?
            .into_json()
    }

    pub async fn create(&self, request: CreateSessionRequest) -> Result<Value> {
        self.http
            .post("/api/sessions", Some(&request.into_body()))
            .await?
            .into_json()
    }

    /// Replace the session configuration. The full config is required.
    pub async fn update(&self, session: &str, config: Value) -> Result<Value> {
        let body = json!({ "name": session, "config": config });
        self.http
            .put(&format!("/api/sessions/{}", session), Some(&body))
            .await?
            .into_json()
    }

    pub async fn start(&self, session: &str) -> Result<Value> {
        self.lifecycle(session, "start").await
    }

    pub async fn stop(&self, session: &str) -> Result<Value> {
        self.lifecycle(session, "stop").await
    }

    pub async fn restart(&self, session: &str) -> Result<Value> {
        self.lifecycle(session, "restart").await
    }

    pub async fn logout(&self, session: &str) -> Result<Value> {
        self.lifecycle(session, "logout").await
    }

    pub async fn delete(&self, session: &str) -> Result<Value> {
        self.http
            .delete(&format!("/api/sessions/{}", session))
            .await?
            .into_json()
    }

    /// Account information for the session; null when not authenticated.
    pub async fn me(&self, session: &str) -> Result<Value> {
        self.http
            .get(&format!("/api/sessions/{}/me", session), None)
            .await?
            .into_json()
    }

    /// Fetch the pairing QR code.
    ///
    /// Depending on `format` and the server's Accept handling, the body is
    /// a PNG, base64 JSON, or the raw pairing value; the same GET is
    /// issued in every case, so the payload variant is the caller's to
    /// inspect.
    pub async fn qr(&self, session: &str, format: QrFormat) -> Result<Payload> {
        let params = vec![("format".to_string(), format.as_str().to_string())];
        self.http
            .get(&format!("/api/{}/auth/qr", session), Some(&params))
            .await
    }

    /// Request a pairing code for the given phone number.
    pub async fn request_code(&self, session: &str, phone_number: &str) -> Result<Value> {
        let body = json!({ "phoneNumber": phone_number });
        self.http
            .post(&format!("/api/{}/auth/request-code", session), Some(&body))
            .await?
            .into_json()
    }

    /// Screenshot of the session's current screen.
    pub async fn screenshot(&self, session: &str) -> Result<Payload> {
        let params = vec![("session".to_string(), session.to_string())];
        self.http.get("/api/screenshot", Some(&params)).await
    }

    async fn lifecycle(&self, session: &str, op: &str) -> Result<Value> {
        self.http
            .post(&format!("/api/sessions/{}/{}", session, op), None)
            .await?
            .into_json()
    }
}
