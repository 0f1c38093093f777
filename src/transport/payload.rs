use bytes::Bytes;
use serde_json::Value;

use crate::{Error, Result};

/// Decoded body of a successful API response.
///
/// Most endpoints answer with JSON, but QR codes, screenshots and picture
/// endpoints return raw image bytes, and a few return plain text. The
/// variant is chosen from the response content type, never guessed from
/// the body itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Binary(Bytes),
    Text(String),
}

impl Payload {
    /// Unwrap a JSON payload.
    ///
    /// An empty text body (a 204, typically) yields `Value::Null`;
    /// non-empty text is preserved as a JSON string. Binary bodies are a
    /// caller-side mismatch and refuse the conversion.
    pub fn into_json(self) -> Result<Value> {
        match self {
            Payload::Json(value) => Ok(value),
            Payload::Text(text) if text.is_empty() => Ok(Value::Null),
            Payload::Text(text) => Ok(Value::String(text)),
            Payload::Binary(_) => Err(Error::UnexpectedPayload(
                "binary body where JSON was expected",
            )),
        }
    }

    /// Raw bytes of the payload regardless of variant.
    pub fn into_bytes(self) -> Bytes {
        match self {
            Payload::Json(value) => Bytes::from(value.to_string()),
            Payload::Text(text) => Bytes::from(text),
            Payload::Binary(bytes) => bytes,
        }
    }

    /// Payload rendered as text; binary data is lossily decoded.
    pub fn into_text(self) -> String {
        match self {
            Payload::Json(value) => value.to_string(),
            Payload::Text(text) => text,
            Payload::Binary(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// Borrow the JSON value when the payload is JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }
}
