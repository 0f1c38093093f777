//! Sending and manipulating messages.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::media::MediaFile;
use crate::transport::HttpTransport;
use crate::Result;

/// Parameters for [`Messages::send_text`].
#[derive(Debug, Clone)]
pub struct SendTextRequest {
    session: String,
    chat_id: String,
    text: String,
    reply_to: Option<String>,
    mentions: Option<Vec<String>>,
    link_preview: bool,
    link_preview_high_quality: bool,
}

impl SendTextRequest {
    pub fn new(
        session: impl Into<String>,
        chat_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            session: session.into(),
            chat_id: chat_id.into(),
            text: text.into(),
            reply_to: None,
            mentions: None,
            link_preview: true,
            link_preview_high_quality: false,
        }
    }

    /// Message id to quote.
    pub fn reply_to(mut self, message_id: impl Into<String>) -> Self {
        self.reply_to = Some(message_id.into());
        self
    }

    /// Chat ids to mention (groups only).
    pub fn mentions(mut self, mentions: Vec<String>) -> Self {
        self.mentions = Some(mentions);
        self
    }

    pub fn without_link_preview(mut self) -> Self {
        self.link_preview = false;
        self
    }

    pub fn high_quality_link_preview(mut self) -> Self {
        self.link_preview_high_quality = true;
        self
    }

    fn into_body(self) -> Value {
        let mut body = Map::new();
        body.insert("session".to_string(), Value::String(self.session));
        body.insert("chatId".to_string(), Value::String(self.chat_id));
        body.insert("text".to_string(), Value::String(self.text));
        if let Some(reply_to) = self.reply_to {
            body.insert("reply_to".to_string(), Value::String(reply_to));
        }
        if let Some(mentions) = self.mentions {
            body.insert("mentions".to_string(), json!(mentions));
        }
        if !self.link_preview {
            body.insert("linkPreview".to_string(), Value::Bool(false));
        }
        if self.link_preview_high_quality {
            body.insert("linkPreviewHighQuality".to_string(), Value::Bool(true));
        }
        Value::Object(body)
    }
}

/// Parameters for [`Messages::send_seen`].
#[derive(Debug, Clone)]
pub struct SendSeenRequest {
    session: String,
    chat_id: String,
    message_ids: Option<Vec<String>>,
    participant: Option<String>,
}

impl SendSeenRequest {
    pub fn new(session: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            chat_id: chat_id.into(),
            message_ids: None,
            participant: None,
        }
    }

    /// Specific message ids to acknowledge.
    pub fn message_ids(mut self, ids: Vec<String>) -> Self {
        self.message_ids = Some(ids);
        self
    }

    /// Sender to acknowledge within a group chat.
    pub fn participant(mut self, participant: impl Into<String>) -> Self {
        self.participant = Some(participant.into());
        self
    }

    fn into_body(self) -> Value {
        let mut body = Map::new();
        body.insert("session".to_string(), Value::String(self.session));
        body.insert("chatId".to_string(), Value::String(self.chat_id));
        if let Some(ids) = self.message_ids {
            body.insert("messageIds".to_string(), json!(ids));
        }
        if let Some(participant) = self.participant {
            body.insert("participant".to_string(), Value::String(participant));
        }
        Value::Object(body)
    }
}

/// Parameters for [`Messages::send_video`].
#[derive(Debug, Clone)]
pub struct SendVideoRequest {
    session: String,
    chat_id: String,
    file: MediaFile,
    caption: Option<String>,
    as_note: bool,
    convert: bool,
}

impl SendVideoRequest {
    pub fn new(session: impl Into<String>, chat_id: impl Into<String>, file: MediaFile) -> Self {
        Self {
            session: session.into(),
            chat_id: chat_id.into(),
            file,
            caption: None,
            as_note: false,
            convert: false,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Send as a rounded video note.
    pub fn as_note(mut self) -> Self {
        self.as_note = true;
        self
    }

    /// Ask the server to transcode into a compatible format.
    pub fn convert(mut self) -> Self {
        self.convert = true;
        self
    }

    fn into_body(self) -> Result<Value> {
        let mut body = Map::new();
        body.insert("session".to_string(), Value::String(self.session));
        body.insert("chatId".to_string(), Value::String(self.chat_id));
        body.insert("file".to_string(), serde_json::to_value(&self.file)?);
        if let Some(caption) = self.caption {
            body.insert("caption".to_string(), Value::String(caption));
        }
        if self.as_note {
            body.insert("asNote".to_string(), Value::Bool(true));
        }
        if self.convert {
            body.insert("convert".to_string(), Value::Bool(true));
        }
        Ok(Value::Object(body))
    }
}

/// A poll, sent as a message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub name: String,
    pub options: Vec<String>,
    pub multiple_answers: bool,
}

impl Poll {
    pub fn new(name: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            name: name.into(),
            options,
            multiple_answers: false,
        }
    }

    pub fn multiple_answers(mut self) -> Self {
        self.multiple_answers = true;
        self
    }
}

/// Message operations.
pub struct Messages<'a> {
    http: &'a HttpTransport,
}

impl<'a> Messages<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    pub async fn send_text(&self, request: SendTextRequest) -> Result<Value> {
        self.http
            .post("/api/sendText", Some(&request.into_body()))
            .await?
            .into_json()
    }

    /// Mark messages as seen.
    pub async fn send_seen(&self, request: SendSeenRequest) -> Result<Value> {
        self.http
            .post("/api/sendSeen", Some(&request.into_body()))
            .await?
            .into_json()
    }

    pub async fn send_image(
        &self,
        session: &str,
        chat_id: &str,
        file: MediaFile,
        caption: Option<&str>,
    ) -> Result<Value> {
        let mut body = media_body(session, chat_id, &file)?;
        if let Some(caption) = caption {
            body["caption"] = Value::String(caption.to_string());
        }
        self.http
            .post("/api/sendImage", Some(&body))
            .await?
            .into_json()
    }

    pub async fn send_video(&self, request: SendVideoRequest) -> Result<Value> {
        let body = request.into_body()?;
        self.http
            .post("/api/sendVideo", Some(&body))
            .await?
            .into_json()
    }

    pub async fn send_voice(
        &self,
        session: &str,
        chat_id: &str,
        file: MediaFile,
        convert: bool,
    ) -> Result<Value> {
        let mut body = media_body(session, chat_id, &file)?;
        if convert {
            body["convert"] = Value::Bool(true);
        }
        self.http
            .post("/api/sendVoice", Some(&body))
            .await?
            .into_json()
    }

    /// Send a document.
    pub async fn send_file(
        &self,
        session: &str,
        chat_id: &str,
        file: MediaFile,
        caption: Option<&str>,
    ) -> Result<Value> {
        let mut body = media_body(session, chat_id, &file)?;
        if let Some(caption) = caption {
            body["caption"] = Value::String(caption.to_string());
        }
        self.http
            .post("/api/sendFile", Some(&body))
            .await?
            .into_json()
    }

    pub async fn send_location(
        &self,
        session: &str,
        chat_id: &str,
        latitude: f64,
        longitude: f64,
        title: Option<&str>,
    ) -> Result<Value> {
        let mut body = Map::new();
        body.insert("session".to_string(), Value::String(session.to_string()));
        body.insert("chatId".to_string(), Value::String(chat_id.to_string()));
        body.insert("latitude".to_string(), json!(latitude));
        body.insert("longitude".to_string(), json!(longitude));
        if let Some(title) = title {
            body.insert("title".to_string(), Value::String(title.to_string()));
        }
        self.http
            .post("/api/sendLocation", Some(&Value::Object(body)))
            .await?
            .into_json()
    }

    /// Send one or more vCard contacts.
    pub async fn send_contact_vcard(
        &self,
        session: &str,
        chat_id: &str,
        contacts: Vec<Value>,
    ) -> Result<Value> {
        let body = json!({
            "session": session,
            "chatId": chat_id,
            "contacts": contacts,
        });
        self.http
            .post("/api/sendContactVcard", Some(&body))
            .await?
            .into_json()
    }

    pub async fn send_poll(&self, session: &str, chat_id: &str, poll: Poll) -> Result<Value> {
        let body = json!({
            "session": session,
            "chatId": chat_id,
            "poll": serde_json::to_value(poll)?,
        });
        self.http
            .post("/api/sendPoll", Some(&body))
            .await?
            .into_json()
    }

    pub async fn forward(&self, session: &str, chat_id: &str, message_id: &str) -> Result<Value> {
        let body = json!({
            "session": session,
            "chatId": chat_id,
            "messageId": message_id,
        });
        self.http
            .post("/api/forwardMessage", Some(&body))
            .await?
            .into_json()
    }

    /// React to a message; an empty string clears the reaction.
    pub async fn react(&self, session: &str, message_id: &str, reaction: &str) -> Result<Value> {
        let body = json!({
            "session": session,
            "messageId": message_id,
            "reaction": reaction,
        });
        self.http
            .put("/api/reaction", Some(&body))
            .await?
            .into_json()
    }

    pub async fn star(
        &self,
        session: &str,
        chat_id: &str,
        message_id: &str,
        star: bool,
    ) -> Result<Value> {
        let body = json!({
            "session": session,
            "chatId": chat_id,
            "messageId": message_id,
            "star": star,
        });
        self.http.put("/api/star", Some(&body)).await?.into_json()
    }

    pub async fn edit(
        &self,
        session: &str,
        chat_id: &str,
        message_id: &str,
        text: &str,
        link_preview: bool,
    ) -> Result<Value> {
        let mut body = Map::new();
        body.insert("text".to_string(), Value::String(text.to_string()));
        if !link_preview {
            body.insert("linkPreview".to_string(), Value::Bool(false));
        }
        self.http
            .put(
                &message_path(session, chat_id, message_id),
                Some(&Value::Object(body)),
            )
            .await?
            .into_json()
    }

    pub async fn delete(&self, session: &str, chat_id: &str, message_id: &str) -> Result<Value> {
        self.http
            .delete(&message_path(session, chat_id, message_id))
            .await?
            .into_json()
    }

    pub async fn pin(&self, session: &str, chat_id: &str, message_id: &str) -> Result<Value> {
        self.http
            .post(
                &format!("{}/pin", message_path(session, chat_id, message_id)),
                None,
            )
            .await?
            .into_json()
    }

    pub async fn unpin(&self, session: &str, chat_id: &str, message_id: &str) -> Result<Value> {
        self.http
            .post(
                &format!("{}/unpin", message_path(session, chat_id, message_id)),
                None,
            )
            .await?
            .into_json()
    }
}

fn message_path(session: &str, chat_id: &str, message_id: &str) -> String {
    format!(
        "/api/{}/chats/{}/messages/{}",
        session, chat_id, message_id
    )
}

fn media_body(session: &str, chat_id: &str, file: &MediaFile) -> Result<Value> {
    Ok(json!({
        "session": session,
        "chatId": chat_id,
        "file": serde_json::to_value(file)?,
    }))
}
