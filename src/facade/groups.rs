//! Group management.

use serde_json::{json, Map, Value};

use crate::transport::{HttpTransport, Payload};
use crate::Result;

/// Group operations.
pub struct Groups<'a> {
    http: &'a HttpTransport,
}

impl<'a> Groups<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    pub async fn list(&self, session: &str) -> Result<Value> {
        self.http
            .get(&format!("/api/{}/groups", session), None)
            .await?
            .into_json()
    }

    pub async fn count(&self, session: &str) -> Result<Value> {
        self.http
            .get(&format!("/api/{}/groups/count", session), None)
            .await?
            .into_json()
    }

    pub async fn get(&self, session: &str, group_id: &str) -> Result<Value> {
        self.http
            .get(&group_path(session, group_id, ""), None)
            .await?
            .into_json()
    }

    pub async fn create(
        &self,
        session: &str,
        subject: &str,
        participants: Option<Vec<String>>,
    ) -> Result<Value> {
        let mut body = Map::new();
        body.insert("subject".to_string(), Value::String(subject.to_string()));
        if let Some(participants) = participants {
            body.insert("participants".to_string(), json!(participants));
        }
        self.http
            .post(&format!("/api/{}/groups", session), Some(&Value::Object(body)))
            .await?
            .into_json()
    }

    pub async fn leave(&self, session: &str, group_id: &str) -> Result<Value> {
        self.http
            .post(&group_path(session, group_id, "/leave"), None)
            .await?
            .into_json()
    }

    pub async fn set_subject(&self, session: &str, group_id: &str, subject: &str) -> Result<Value> {
        let body = json!({ "subject": subject });
        self.http
            .put(&group_path(session, group_id, "/subject"), Some(&body))
            .await?
            .into_json()
    }

    pub async fn set_description(
        &self,
        session: &str,
        group_id: &str,
        description: &str,
    ) -> Result<Value> {
        let body = json!({ "description": description });
        self.http
            .put(&group_path(session, group_id, "/description"), Some(&body))
            .await?
            .into_json()
    }

    pub async fn invite_code(&self, session: &str, group_id: &str) -> Result<Value> {
        self.http
            .get(&group_path(session, group_id, "/invite-code"), None)
            .await?
            .into_json()
    }

    pub async fn revoke_invite_code(&self, session: &str, group_id: &str) -> Result<Value> {
        self.http
            .post(&group_path(session, group_id, "/invite-code/revoke"), None)
            .await?
            .into_json()
    }

    /// Group picture; bytes or a base64 JSON rendition depending on the
    /// server's content negotiation.
    pub async fn picture(&self, session: &str, group_id: &str) -> Result<Payload> {
        self.http
            .get(&group_path(session, group_id, "/picture"), None)
            .await
    }

    pub async fn participants(&self, session: &str, group_id: &str) -> Result<Value> {
        self.http
            .get(&group_path(session, group_id, "/participants"), None)
            .await?
            .into_json()
    }

    pub async fn add_participants(
        &self,
        session: &str,
        group_id: &str,
        participants: Vec<String>,
    ) -> Result<Value> {
        self.participant_action(session, group_id, "/participants/add", participants)
            .await
    }

    pub async fn remove_participants(
        &self,
        session: &str,
        group_id: &str,
        participants: Vec<String>,
    ) -> Result<Value> {
        self.participant_action(session, group_id, "/participants/remove", participants)
            .await
    }

    pub async fn promote_admins(
        &self,
        session: &str,
        group_id: &str,
        participants: Vec<String>,
    ) -> Result<Value> {
        self.participant_action(session, group_id, "/admin/promote", participants)
            .await
    }

    pub async fn demote_admins(
        &self,
        session: &str,
        group_id: &str,
        participants: Vec<String>,
    ) -> Result<Value> {
        self.participant_action(session, group_id, "/admin/demote", participants)
            .await
    }

    async fn participant_action(
        &self,
        session: &str,
        group_id: &str,
        suffix: &str,
        participants: Vec<String>,
    ) -> Result<Value> {
        let body = json!({ "participants": participants });
        self.http
            .post(&group_path(session, group_id, suffix), Some(&body))
            .await?
            .into_json()
    }
}

fn group_path(session: &str, group_id: &str, suffix: &str) -> String {
    format!("/api/{}/groups/{}{}", session, group_id, suffix)
}
