//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// A payload could not be built from the given value.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// The current user record could not be decoded.
    #[error("invalid user record: {0}")]
    InvalidUser(String),

    /// A required configuration variable is missing.
    #[error("missing configuration variable: {0}")]
    MissingConfig(String),

    /// A configuration variable has an unusable value.
    #[error("invalid value for {name}: expected {expected}, got {value:?}")]
    InvalidConfig {
        /// Variable name.
        name: String,
        /// What was expected.
        expected: &'static str,
        /// The offending value.
        value: String,
    },

    /// The environment name is not recognized.
    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
