use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info};

use super::Payload;
use crate::{Error, Result};

/// Header carrying the WAHA API key.
const API_KEY_HEADER: &str = "X-Api-Key";

/// The shared request pipeline.
///
/// Owns the `reqwest` client, the normalized base URL and the configured
/// headers. Stateless per call: no retries, no caching, safe to share
/// across tasks behind an `Arc`.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build the transport. `base_url` must already be normalized (no
    /// trailing slash); the API key, when present, is attached to every
    /// request as a sensitive default header.
    pub(crate) fn new(
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(key) = &api_key {
            let mut value = HeaderValue::from_str(key)
                .map_err(|_| Error::Configuration("API key is not a valid header value".into()))?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Base URL the transport was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Dispatch one request and classify the outcome.
    ///
    /// Query pairs and the JSON body are attached only when supplied;
    /// both are independent. Transport failures surface as
    /// [`Error::Transport`] and are never retried.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: Option<&[(String, String)]>,
        json: Option<&Value>,
    ) -> Result<Payload> {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, path, "dispatching request");

        let mut req = self.client.request(method, &url);
        if let Some(params) = params {
            req = req.query(params);
        }
        if let Some(body) = json {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        let body = response.bytes().await?;

        match classify(status, &content_type, body) {
            Ok(payload) => Ok(payload),
            Err(err) => {
                info!(http_status = status, path, "request failed");
                Err(err)
            }
        }
    }

    pub async fn get(&self, path: &str, params: Option<&[(String, String)]>) -> Result<Payload> {
        self.request(Method::GET, path, params, None).await
    }

    pub async fn post(&self, path: &str, json: Option<&Value>) -> Result<Payload> {
        self.request(Method::POST, path, None, json).await
    }

    pub async fn put(&self, path: &str, json: Option<&Value>) -> Result<Payload> {
        self.request(Method::PUT, path, None, json).await
    }

    pub async fn delete(&self, path: &str) -> Result<Payload> {
        self.request(Method::DELETE, path, None, None).await
    }
}

/// Map a response onto the error taxonomy or a decoded payload.
///
/// Classification is by status code alone, in fixed precedence; the
/// content type only selects the success decoding. JSON parse failures
/// while extracting an error message are swallowed into the documented
/// fallbacks, never surfaced as secondary errors.
fn classify(status: u16, content_type: &str, body: Bytes) -> Result<Payload> {
    match status {
        401 => Err(Error::Authentication),
        404 => Err(Error::NotFound),
        429 => Err(Error::RateLimit),
        s if s >= 500 => {
            let message =
                extract_message(&body).unwrap_or_else(|| "Server error".to_string());
            Err(Error::Server { status: s, message })
        }
        200 | 201 | 204 => Ok(decode_body(content_type, body)),
        s if s >= 400 => {
            let message = match serde_json::from_slice::<Value>(&body) {
                Ok(data) => data
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_owned)
                    .unwrap_or_else(|| "Unknown error".to_string()),
                Err(_) => String::from_utf8_lossy(&body).into_owned(),
            };
            Err(Error::Api { status: s, message })
        }
        // Unlisted 2xx/3xx: hand the body back untouched.
        _ => Ok(Payload::Binary(body)),
    }
}

fn extract_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_owned)
}

fn decode_body(content_type: &str, body: Bytes) -> Payload {
    if content_type.contains("application/json") {
        // An empty or malformed body (a 204 with a JSON content type,
        // say) decodes to null rather than failing the call.
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        Payload::Json(value)
    } else if content_type.contains("image/") || content_type.contains("application/octet-stream") {
        Payload::Binary(body)
    } else {
        Payload::Text(String::from_utf8_lossy(&body).into_owned())
    }
}
