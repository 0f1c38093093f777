//! Contact lookup and management.
//!
//! Most contact endpoints take the session as a query parameter rather
//! than a path segment.

use serde_json::{json, Value};

use crate::transport::HttpTransport;
use crate::Result;

/// Listing options for [`Contacts::list_all`].
#[derive(Debug, Clone, Default)]
pub struct ListContactsRequest {
    limit: Option<u32>,
    offset: Option<u32>,
    sort_by: Option<String>,
    sort_order: Option<String>,
}

impl ListContactsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sort field: `id` or `name`.
    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }

    /// Sort direction: `asc` or `desc`.
    pub fn sort_order(mut self, order: impl Into<String>) -> Self {
        self.sort_order = Some(order.into());
        self
    }

    fn into_params(self, session: &str) -> Vec<(String, String)> {
        let mut params = vec![("session".to_string(), session.to_string())];
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            params.push(("sortBy".to_string(), sort_by));
        }
        if let Some(sort_order) = self.sort_order {
            params.push(("sortOrder".to_string(), sort_order));
        }
        params
    }
}

/// Contact operations.
pub struct Contacts<'a> {
    http: &'a HttpTransport,
}

impl<'a> Contacts<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    pub async fn list_all(&self, session: &str, request: ListContactsRequest) -> Result<Value> {
        let params = request.into_params(session);
        self.http
            .get("/api/contacts/all", Some(&params))
            .await?
            .into_json()
    }

    pub async fn get(&self, session: &str, contact_id: &str) -> Result<Value> {
        let params = contact_params(session, contact_id);
        self.http
            .get("/api/contacts", Some(&params))
            .await?
            .into_json()
    }

    pub async fn update(
        &self,
        session: &str,
        chat_id: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Value> {
        let body = json!({ "firstName": first_name, "lastName": last_name });
        self.http
            .put(&format!("/api/{}/contacts/{}", session, chat_id), Some(&body))
            .await?
            .into_json()
    }

    /// Whether a phone number is registered on the platform.
    pub async fn check_exists(&self, session: &str, phone: &str) -> Result<Value> {
        let params = vec![
            ("session".to_string(), session.to_string()),
            ("phone".to_string(), phone.to_string()),
        ];
        self.http
            .get("/api/contacts/check-exists", Some(&params))
            .await?
            .into_json()
    }

    pub async fn about(&self, session: &str, contact_id: &str) -> Result<Value> {
        let params = contact_params(session, contact_id);
        self.http
            .get("/api/contacts/about", Some(&params))
            .await?
            .into_json()
    }

    /// Profile picture URL; `refresh` bypasses the server cache.
    pub async fn profile_picture(
        &self,
        session: &str,
        contact_id: &str,
        refresh: bool,
    ) -> Result<Value> {
        let mut params = contact_params(session, contact_id);
        if refresh {
            params.push(("refresh".to_string(), "true".to_string()));
        }
        self.http
            .get("/api/contacts/profile-picture", Some(&params))
            .await?
            .into_json()
    }

    pub async fn block(&self, session: &str, chat_id: &str) -> Result<Value> {
        let body = json!({ "session": session, "chatId": chat_id });
        self.http
            .post("/api/contacts/block", Some(&body))
            .await?
            .into_json()
    }

    pub async fn unblock(&self, session: &str, chat_id: &str) -> Result<Value> {
        let body = json!({ "session": session, "chatId": chat_id });
        self.http
            .post("/api/contacts/unblock", Some(&body))
            .await?
            .into_json()
    }
}

fn contact_params(session: &str, contact_id: &str) -> Vec<(String, String)> {
    vec![
        ("session".to_string(), session.to_string()),
        ("contactId".to_string(), contact_id.to_string()),
    ]
}
