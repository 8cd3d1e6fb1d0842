//! Token storage port
//!
//! Defines the interface for persisting the token pair between runs.

use async_trait::async_trait;
use mealplan_domain::AuthTokens;

/// Errors that can occur during token storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Repository trait for the persisted token pair.
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// Loads the stored tokens.
    ///
    /// # Returns
    /// `None` if nothing was stored.
    async fn load(&self) -> Result<Option<AuthTokens>, StorageError>;

    /// Replaces the stored tokens.
    ///
    /// # Errors
    /// Returns an error if the tokens cannot be written.
    async fn save(&self, tokens: &AuthTokens) -> Result<(), StorageError>;

    /// Removes the stored tokens. Clearing an empty storage succeeds.
    ///
    /// # Errors
    /// Returns an error if the tokens cannot be removed.
    async fn clear(&self) -> Result<(), StorageError>;
}
