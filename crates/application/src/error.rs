//! Application error types

use mealplan_domain::{DomainError, ErrorClass, HttpMethod};
use serde_json::Value;
use thiserror::Error;

use crate::ports::{StorageError, TransportError};

/// A call that did not pass through the gateway.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The call was rejected and classified.
    #[error("{method} {url} rejected: {class}")]
    Rejected {
        /// What kind of failure this is.
        class: ErrorClass,
        /// HTTP method of the call.
        method: HttpMethod,
        /// Absolute URL of the call.
        url: String,
        /// HTTP status, absent when no response was received.
        status: Option<u16>,
        /// Decoded response body, `Null` when absent.
        body: Value,
        /// Transport failure behind an `Unreachable` class.
        #[source]
        cause: Option<TransportError>,
    },

    /// The caller cancelled the call.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// The classification, `None` for cancellations.
    #[must_use]
    pub const fn class(&self) -> Option<ErrorClass> {
        match self {
            Self::Rejected { class, .. } => Some(*class),
            Self::Cancelled => None,
        }
    }

    /// The HTTP status, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => *status,
            Self::Cancelled => None,
        }
    }

    /// The response body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        match self {
            Self::Rejected { body, .. } => Some(body),
            Self::Cancelled => None,
        }
    }

    /// Returns true if the caller cancelled the call.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Errors of the session flows.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A call made by the flow failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A server record could not be decoded.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The token pair could not be persisted or loaded.
    #[error("token storage error: {0}")]
    Storage(#[from] StorageError),

    /// A login answer did not carry both tokens.
    #[error("login response is missing the access or refresh token")]
    MissingTokens,
}

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
