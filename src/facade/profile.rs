//! Own-profile helpers.

use crate::transport::HttpTransport;

/// Profile operations.
pub struct Profile<'a> {
    http: &'a HttpTransport,
}

impl<'a> Profile<'a> {
    pub(crate) fn new(http: &'a HttpTransport) -> Self {
        Self { http }
    }

    /// URL of the session's own profile picture. Built locally; no
    /// request is made.
    pub fn picture_url(&self, session: &str) -> String {
        format!("{}/api/{}/profile/picture", self.http.base_url(), session)
    }
}
