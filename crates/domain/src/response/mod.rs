//! Responses and their classification

mod classification;
mod status;

pub use classification::{
    EXPIRED_SESSION_DETAIL, ErrorClass, Outcome, PREMIUM_REQUIRED_ERROR, classify,
};
pub use status::StatusCode;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A decoded HTTP response.
///
/// Handed to callers of raw endpoints as-is; body endpoints only see `body`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, names lower-cased.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// JSON body, `Null` when empty or not JSON.
    pub body: Value,
}

impl ApiResponse {
    /// Creates a response.
    #[must_use]
    pub const fn new(status: u16, headers: HashMap<String, String>, body: Value) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns the typed status code.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        StatusCode::new(self.status)
    }

    /// Looks a header up, ignoring case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns `body[key]` as a string, if it is one.
    #[must_use]
    pub fn body_str(&self, key: &str) -> Option<&str> {
        self.body.get(key).and_then(Value::as_str)
    }
}
