//! Token pair persistence.
//!
//! The pair is stored in the platform-specific config directory unless
//! configured otherwise:
//! - Linux: ~/.config/mealplan/tokens.json
//! - macOS: ~/Library/Application Support/mealplan/tokens.json
//! - Windows: %APPDATA%/mealplan/tokens.json

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use mealplan_application::ports::{StorageError, TokenStorage};
use mealplan_domain::AuthTokens;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

/// Token storage backed by a JSON file.
///
/// ```json
/// {
///   "access": "eyJhbGciOi...",
///   "refresh": "eyJhbGciOi..."
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    /// Creates a storage writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/mealplan/tokens.json`, if the platform has a config
    /// directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mealplan").join("tokens.json"))
    }

    /// The token file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStorage for FileTokenStorage {
    async fn load(&self) -> Result<Option<AuthTokens>, StorageError> {
        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let tokens =
            from_json_bytes(&content).map_err(|e| StorageError::Serialization(e.to_string()))?;
        Ok(Some(tokens))
    }

    async fn save(&self, tokens: &AuthTokens) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }

        let content =
            to_json_stable_bytes(tokens).map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&self.path, content).await?;
        debug!(path = %self.path.display(), "tokens saved");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Token storage that forgets everything when the process exits.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    tokens: Mutex<Option<AuthTokens>>,
}

impl MemoryTokenStorage {
    /// Creates an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStorage for MemoryTokenStorage {
    async fn load(&self) -> Result<Option<AuthTokens>, StorageError> {
        Ok(self.tokens.lock().await.clone())
    }

    async fn save(&self, tokens: &AuthTokens) -> Result<(), StorageError> {
        *self.tokens.lock().await = Some(tokens.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.tokens.lock().await.take();
        Ok(())
    }
}
