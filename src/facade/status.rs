//! Status (stories) publishing.

use serde_json::{json, Map, Value};

use crate::media::MediaFile;
use crate::transport::HttpTransport;
use crate::Result;

/// Status operations.
pub struct Status<'a> {
    http: &'a HttpTransport,
}

impl<'a> Status<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    pub async fn send_text(&self, session: &str, text: &str) -> Result<Value> {
        let body = json!({ "text": text });
        self.http
            .post(&status_path(session, "text"), Some(&body))
            .await?
            .into_json()
    }

    pub async fn send_image(
        &self,
        session: &str,
        file: MediaFile,
        caption: Option<&str>,
    ) -> Result<Value> {
        let body = file_body(&file, caption)?;
        self.http
            .post(&status_path(session, "image"), Some(&body))
            .await?
            .into_json()
    }

    pub async fn send_voice(&self, session: &str, file: MediaFile) -> Result<Value> {
        let body = file_body(&file, None)?;
        self.http
            .post(&status_path(session, "voice"), Some(&body))
            .await?
            .into_json()
    }

    pub async fn send_video(
        &self,
        session: &str,
        file: MediaFile,
        caption: Option<&str>,
    ) -> Result<Value> {
        let body = file_body(&file, caption)?;
        self.http
            .post(&status_path(session, "video"), Some(&body))
            .await?
            .into_json()
    }

    pub async fn delete(&self, session: &str, message_id: &str) -> Result<Value> {
        let body = json!({ "messageId": message_id });
        self.http
            .post(&status_path(session, "delete"), Some(&body))
            .await?
            .into_json()
    }

    /// Reserve a message id for a status about to be published.
    pub async fn new_message_id(&self, session: &str) -> Result<Value> {
        self.http
            .get(&status_path(session, "new-message-id"), None)
            .await?
            .into_json()
    }
}

fn status_path(session: &str, op: &str) -> String {
    format!("/api/{}/status/{}", session, op)
}

fn file_body(file: &MediaFile, caption: Option<&str>) -> Result<Value> {
    let mut body = Map::new();
    body.insert("file".to_string(), serde_json::to_value(file)?);
    if let Some(caption) = caption {
        body.insert("caption".to_string(), Value::String(caption.to_string()));
    }
    Ok(Value::Object(body))
}
