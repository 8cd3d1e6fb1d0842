//! HTTP transport port

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use mealplan_domain::HttpMethod;
use serde_json::Value;
use thiserror::Error;

/// A fully resolved outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute URL, query string included.
    pub url: String,
    /// Extra headers, e.g. `Authorization`.
    pub headers: Vec<(String, String)>,
    /// JSON body; `None` sends no body.
    pub body: Option<Value>,
}

impl TransportRequest {
    /// Creates a request without headers or body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Looks a header up, ignoring case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// What came back from the server, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Raw body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Creates a response.
    #[must_use]
    pub const fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// A response with a JSON body and no headers.
    #[must_use]
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, HashMap::new(), body.to_string().into_bytes())
    }
}

/// Failures below HTTP: no response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// Host name resolution failed.
    #[error("could not resolve {host}: {message}")]
    DnsError {
        /// Host being resolved.
        host: String,
        /// Resolver message.
        message: String,
    },

    /// The server refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection failed or was reset.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The response body could not be read.
    #[error("failed to read body: {0}")]
    Body(String),

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

/// Future returned by [`HttpTransport::send`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send + 'a>>;

/// Port for sending HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP libraries.
/// Any status code is a successful send; only missing responses are errors.
pub trait HttpTransport: Send + Sync {
    /// Sends the request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received: network issues,
    /// timeout, or an unusable URL.
    fn send(&self, request: TransportRequest) -> TransportFuture<'_>;
}
