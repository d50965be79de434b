//! Access Token Storage
//!
//! The durable client storage holds exactly one key: the access token
//! string. The file-backed implementation is what the terminal shell
//! uses, and the in-memory one backs tests.

use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

// ============================================================================
// Access Token
// ============================================================================

/// Opaque bearer credential identifying the session.
///
/// Debug output is redacted; the raw value only leaves this type when
/// building the `Authorization` header or persisting it.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token value, for the Authorization header and storage
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

// ============================================================================
// Token Store
// ============================================================================

/// Token persistence errors
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("token storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable storage for the single access-token key
#[trait_variant::make(TokenStore: Send)]
pub trait LocalTokenStore {
    /// Read the persisted token, if any
    async fn load(&self) -> Result<Option<AccessToken>, TokenStoreError>;

    /// Persist the token, replacing any previous value
    async fn save(&self, token: &AccessToken) -> Result<(), TokenStoreError>;

    /// Remove the persisted token; idempotent
    async fn clear(&self) -> Result<(), TokenStoreError>;
}

// ============================================================================
// File-backed store
// ============================================================================

/// Token store persisting to a single file.
///
/// The parent directory is created on first save.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<AccessToken>, TokenStoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(AccessToken::new(token)))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, token: &AccessToken) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, token.expose()).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// Token store backed by process memory; used in tests and as a
/// fallback when no writable path exists
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<AccessToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a token (test setup)
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(AccessToken::new(token))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<AccessToken>, TokenStoreError> {
        Ok(self.token.lock().expect("token store lock poisoned").clone())
    }

    async fn save(&self, token: &AccessToken) -> Result<(), TokenStoreError> {
        *self.token.lock().expect("token store lock poisoned") = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        *self.token.lock().expect("token store lock poisoned") = None;
        Ok(())
    }
}
