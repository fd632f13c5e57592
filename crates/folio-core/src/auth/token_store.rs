use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use keyring::Entry;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Session file name in the data directory
pub const SESSION_FILE: &str = "session.json";

/// Keychain service name for the keyring backend
const SERVICE_NAME: &str = "folio";

/// Keychain entry holding the bearer token
const TOKEN_KEY: &str = "token";

#[derive(Error, Debug)]
pub enum TokenStoreError {
    #[error("Failed to write session file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode session file: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Keychain error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("Token store lock poisoned")]
    Poisoned,
}

/// Persistent storage for the single active session token.
///
/// Readers always see the latest stored value; implementations must not hand
/// out a copy captured earlier. An empty string is never reported as a token.
pub trait TokenStore: Send + Sync {
    /// Current token, or `None` when logged out. Never fails.
    fn get_token(&self) -> Option<String>;

    /// Replace any existing token.
    fn set_token(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Remove the token. Succeeds when there is nothing to remove.
    fn clear_token(&self) -> Result<(), TokenStoreError>;

    fn has_token(&self) -> bool {
        self.get_token().is_some()
    }
}

fn non_empty(token: String) -> Option<String> {
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRecord {
    pub token: String,
    pub saved_at: DateTime<Utc>,
}

/// Token persisted as JSON in a session file, surviving restarts.
///
/// The file is read on every call so a login or logout from another process
/// is picked up on the next request. There is no change notification.
pub struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    /// Load the full record, including when it was saved
    pub fn load(&self) -> Option<TokenRecord> {
        let path = self.path();
        if !path.exists() {
            return None;
        }
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Failed to read session file");
                return None;
            }
        };
        match serde_json::from_str::<TokenRecord>(&contents) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Failed to parse session file");
                None
            }
        }
    }

    fn write(path: &Path, record: &TokenRecord) -> Result<(), TokenStoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(record)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get_token(&self) -> Option<String> {
        self.load().and_then(|record| non_empty(record.token))
    }

    fn set_token(&self, token: &str) -> Result<(), TokenStoreError> {
        let record = TokenRecord {
            token: token.to_string(),
            saved_at: Utc::now(),
        };
        Self::write(&self.path(), &record)?;
        debug!(path = %self.path().display(), "Session token saved");
        Ok(())
    }

    fn clear_token(&self) -> Result<(), TokenStoreError> {
        let path = self.path();
        match std::fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "Session token removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process token store. Each instance is an isolated session.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get_token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone().and_then(non_empty),
            Err(_) => None,
        }
    }

    fn set_token(&self, token: &str) -> Result<(), TokenStoreError> {
        let mut guard = self.token.write().map_err(|_| TokenStoreError::Poisoned)?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), TokenStoreError> {
        let mut guard = self.token.write().map_err(|_| TokenStoreError::Poisoned)?;
        *guard = None;
        Ok(())
    }
}

/// Token kept in the OS keychain instead of a plain file
pub struct KeyringTokenStore {
    service: String,
}

impl KeyringTokenStore {
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
        }
    }

    fn entry(&self) -> Result<Entry, TokenStoreError> {
        Ok(Entry::new(&self.service, TOKEN_KEY)?)
    }
}

impl Default for KeyringTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for KeyringTokenStore {
    fn get_token(&self) -> Option<String> {
        let entry = match self.entry() {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Failed to open keychain entry");
                return None;
            }
        };
        match entry.get_password() {
            Ok(token) => non_empty(token),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read token from keychain");
                None
            }
        }
    }

    fn set_token(&self, token: &str) -> Result<(), TokenStoreError> {
        self.entry()?.set_password(token)?;
        Ok(())
    }

    fn clear_token(&self) -> Result<(), TokenStoreError> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_set_then_get() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get_token(), None);

        store.set_token("abc").unwrap();
        assert_eq!(store.get_token().as_deref(), Some("abc"));

        // A new token supersedes the old one
        store.set_token("def").unwrap();
        assert_eq!(store.get_token().as_deref(), Some("def"));
    }

    #[test]
    fn test_memory_clear_is_idempotent() {
        let store = MemoryTokenStore::with_token("abc");
        store.clear_token().unwrap();
        assert_eq!(store.get_token(), None);
        store.clear_token().unwrap();
        assert_eq!(store.get_token(), None);
    }

    #[test]
    fn test_empty_token_reads_as_absent() {
        let store = MemoryTokenStore::with_token("");
        assert!(!store.has_token());

        let store = MemoryTokenStore::new();
        store.set_token("").unwrap();
        assert_eq!(store.get_token(), None);
    }

    #[test]
    fn test_whitespace_token_is_returned_verbatim() {
        let store = MemoryTokenStore::new();
        store.set_token("   ").unwrap();
        assert_eq!(store.get_token().as_deref(), Some("   "));

        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path());
        store.set_token(" tok ").unwrap();
        assert_eq!(store.get_token().as_deref(), Some(" tok "));
    }

    #[test]
    fn test_file_store_survives_new_instance() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path());
        store.set_token("persisted").unwrap();

        let reopened = FileTokenStore::new(dir.path());
        assert_eq!(reopened.get_token().as_deref(), Some("persisted"));
        assert!(reopened.load().is_some());
    }

    #[test]
    fn test_file_store_observes_external_changes() {
        let dir = TempDir::new().unwrap();
        let reader = FileTokenStore::new(dir.path());
        let writer = FileTokenStore::new(dir.path());

        writer.set_token("first").unwrap();
        assert_eq!(reader.get_token().as_deref(), Some("first"));

        writer.set_token("second").unwrap();
        assert_eq!(reader.get_token().as_deref(), Some("second"));

        writer.clear_token().unwrap();
        assert_eq!(reader.get_token(), None);
    }

    #[test]
    fn test_file_store_clear_without_file() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().join("missing"));
        store.clear_token().unwrap();
        store.clear_token().unwrap();
        assert_eq!(store.get_token(), None);
    }

    #[test]
    fn test_file_store_corrupt_file_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), "not json").unwrap();
        let store = FileTokenStore::new(dir.path());
        assert_eq!(store.get_token(), None);
    }

    #[test]
    fn test_file_store_creates_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileTokenStore::new(&nested);
        store.set_token("abc").unwrap();
        assert!(nested.join(SESSION_FILE).exists());
    }
}
