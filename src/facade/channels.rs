//! Channel operations.

use serde_json::{Map, Value};

use crate::transport::HttpTransport;
use crate::Result;

/// Channel operations.
pub struct Channels<'a> {
    http: &'a HttpTransport,
}

impl<'a> Channels<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    pub async fn list(&self, session: &str) -> Result<Value> {
        self.http
            .get(&format!("/api/{}/channels", session), None)
            .await?
            .into_json()
    }

    pub async fn get(&self, session: &str, channel_id: &str) -> Result<Value> {
        self.http
            .get(&format!("/api/{}/channels/{}", session, channel_id), None)
            .await?
            .into_json()
    }

    pub async fn create(
        &self,
        session: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Value> {
        let mut body = Map::new();
        body.insert("name".to_string(), Value::String(name.to_string()));
        if let Some(description) = description {
            body.insert(
                "description".to_string(),
                Value::String(description.to_string()),
            );
        }
        self.http
            .post(
                &format!("/api/{}/channels", session),
                Some(&Value::Object(body)),
            )
            .await?
            .into_json()
    }

    pub async fn delete(&self, session: &str, channel_id: &str) -> Result<Value> {
        self.http
            .delete(&format!("/api/{}/channels/{}", session, channel_id))
            .await?
            .into_json()
    }

    /// Channel posts ride the chats endpoint on the server side.
    pub async fn messages(
        &self,
        session: &str,
        channel_id: &str,
        limit: Option<u32>,
    ) -> Result<Value> {
        let params = limit.map(|l| vec![("limit".to_string(), l.to_string())]);
        self.http
            .get(
                &format!("/api/{}/chats/{}/messages", session, channel_id),
                params.as_deref(),
            )
            .await?
            .into_json()
    }
}
