//! Token Store
//!
//! Storage for the single bearer token the client sends with every request.
//!
//! The store is a pass-through: it never inspects or validates the token.
//! Setting `None` (or an empty token) removes whatever was stored. Reads are
//! synchronous and each read or write is atomic on its own.
//!
//! - [`FileTokenStore`] persists the token in a file so it survives restarts
//!   until an explicit logout.
//! - [`MemoryTokenStore`] keeps it in memory, for tests and embedders that
//!   manage persistence themselves.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::shared::error::TokenStoreError;

/// Read/write contract for the persisted bearer token
pub trait TokenStore: Send + Sync + fmt::Debug {
    /// Current token, if any
    fn get(&self) -> Option<String>;

    /// Replace the token; `None` or an empty string removes it
    fn set(&self, token: Option<&str>) -> Result<(), TokenStoreError>;

    /// Remove the token
    fn clear(&self) -> Result<(), TokenStoreError> {
        self.set(None)
    }
}

fn normalize(token: Option<&str>) -> Option<&str> {
    token.filter(|t| !t.is_empty())
}

/// In-memory token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: RwLock::new(normalize(Some(&token)).map(str::to_string)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: Option<&str>) -> Result<(), TokenStoreError> {
        let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = normalize(token).map(str::to_string);
        Ok(())
    }
}

/// Token store backed by a single file
///
/// The token is written to a sibling temp file and renamed into place, so a
/// reader never observes a half-written token.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| TokenStoreError::io(parent, e))?;
        }
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, token).map_err(|e| TokenStoreError::io(&tmp, e))?;
        restrict_permissions(&tmp)?;
        std::fs::rename(&tmp, &self.path).map_err(|e| TokenStoreError::io(&self.path, e))
    }

    fn remove(&self) -> Result<(), TokenStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TokenStoreError::io(&self.path, e)),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                (!token.is_empty()).then(|| token.to_string())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read token file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn set(&self, token: Option<&str>) -> Result<(), TokenStoreError> {
        match normalize(token) {
            Some(token) => self.write(token),
            None => self.remove(),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), TokenStoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| TokenStoreError::io(path, e))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), TokenStoreError> {
    Ok(())
}
