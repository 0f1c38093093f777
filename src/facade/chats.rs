//! Chat listing and chat-level actions.

use serde_json::{json, Map, Value};

use crate::transport::{HttpTransport, Payload};
use crate::Result;

/// Chat operations.
pub struct Chats<'a> {
    http: &'a HttpTransport,
}

impl<'a> Chats<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// List chats, optionally bounded by `limit`/`offset`.
    pub async fn list(
        &self,
        session: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value> {
        let mut params = Vec::new();
        if let Some(limit) = limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        let params = (!params.is_empty()).then_some(params);
        self.http
            .get(&format!("/api/{}/chats", session), params.as_deref())
            .await?
            .into_json()
    }

    pub async fn overview(&self, session: &str) -> Result<Value> {
        self.http
            .get(&format!("/api/{}/chats/overview", session), None)
            .await?
            .into_json()
    }

    /// Chat picture; bytes or a base64 JSON rendition depending on the
    /// server's content negotiation.
    pub async fn picture(&self, session: &str, chat_id: &str) -> Result<Payload> {
        self.http
            .get(&format!("/api/{}/chats/{}/picture", session, chat_id), None)
            .await
    }

    pub async fn mark_unread(&self, session: &str, chat_id: &str) -> Result<Value> {
        self.chat_action(session, chat_id, "unread").await
    }

    pub async fn archive(&self, session: &str, chat_id: &str) -> Result<Value> {
        self.chat_action(session, chat_id, "archive").await
    }

    pub async fn unarchive(&self, session: &str, chat_id: &str) -> Result<Value> {
        self.chat_action(session, chat_id, "unarchive").await
    }

    pub async fn delete(&self, session: &str, chat_id: &str) -> Result<Value> {
        self.http
            .delete(&format!("/api/{}/chats/{}", session, chat_id))
            .await?
            .into_json()
    }

    /// Mark messages in the chat as read; all of them when `message_ids`
    /// is omitted.
    pub async fn read_messages(
        &self,
        session: &str,
        chat_id: &str,
        message_ids: Option<Vec<String>>,
    ) -> Result<Value> {
        let mut body = Map::new();
        if let Some(ids) = message_ids {
            body.insert("messageIds".to_string(), json!(ids));
        }
        self.http
            .post(
                &format!("/api/{}/chats/{}/messages/read", session, chat_id),
                Some(&Value::Object(body)),
            )
            .await?
            .into_json()
    }

    pub async fn messages(
        &self,
        session: &str,
        chat_id: &str,
        limit: Option<u32>,
        download_media: bool,
    ) -> Result<Value> {
        let mut params = Vec::new();
        if let Some(limit) = limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if download_media {
            params.push(("downloadMedia".to_string(), "true".to_string()));
        }
        let params = (!params.is_empty()).then_some(params);
        self.http
            .get(
                &format!("/api/{}/chats/{}/messages", session, chat_id),
                params.as_deref(),
            )
            .await?
            .into_json()
    }

    pub async fn message(
        &self,
        session: &str,
        chat_id: &str,
        message_id: &str,
        download_media: bool,
    ) -> Result<Value> {
        let params = download_media
            .then(|| vec![("downloadMedia".to_string(), "true".to_string())]);
        self.http
            .get(
                &format!("/api/{}/chats/{}/messages/{}", session, chat_id, message_id),
                params.as_deref(),
            )
            .await?
            .into_json()
    }

    async fn chat_action(&self, session: &str, chat_id: &str, op: &str) -> Result<Value> {
        self.http
            .post(&format!("/api/{}/chats/{}/{}", session, chat_id, op), None)
            .await?
            .into_json()
    }
}
