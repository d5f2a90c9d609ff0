use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use parking_lot::RwLock;
use tracing::warn;

use crate::error::ClientError;

/// Key/value persistence backend for session state.
///
/// Reads degrade to absent on any fault; only writes surface errors.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: &str) -> Result<(), ClientError>;
    fn remove(&self, key: &str);
    /// Remove every stored key.
    fn clear(&self);
}

/// File-backed storage: one file per key under a session directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(key, error = %e, "failed to read session file");
                None
            }
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), ClientError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            ClientError::storage(format!(
                "failed to create session directory {}: {e}",
                self.dir.display()
            ))
        })?;
        fs::write(self.path_for(key), value)
            .map_err(|e| ClientError::storage(format!("failed to write session key '{key}': {e}")))
    }

    fn remove(&self, key: &str) {
        if let Err(e) = fs::remove_file(self.path_for(key)) {
            if e.kind() != ErrorKind::NotFound {
                warn!(key, error = %e, "failed to remove session file");
            }
        }
    }

    fn clear(&self) {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return,
            Err(e) => {
                warn!(error = %e, "failed to list session directory");
                return;
            }
        };
        for entry in entries.flatten() {
            if let Err(e) = fs::remove_file(entry.path()) {
                warn!(path = %entry.path().display(), error = %e, "failed to clear session file");
            }
        }
    }
}

/// In-memory storage for tests and sessions without a configured directory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.values.write().remove(key);
    }

    fn clear(&self) {
        self.values.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{FileStorage, MemoryStorage, Storage};

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();

        assert_eq!(storage.get("token"), None);
        storage.put("token", "abc").unwrap();
        assert_eq!(storage.get("token").as_deref(), Some("abc"));

        storage.remove("token");
        assert_eq!(storage.get("token"), None);
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session"));

        assert_eq!(storage.get("token"), None);
        storage.put("token", "abc").unwrap();
        storage.put("role", "ROLE_USUARIO").unwrap();
        assert_eq!(storage.get("token").as_deref(), Some("abc"));
        assert_eq!(storage.get("role").as_deref(), Some("ROLE_USUARIO"));

        storage.remove("token");
        assert_eq!(storage.get("token"), None);
        assert_eq!(storage.get("role").as_deref(), Some("ROLE_USUARIO"));
    }

    #[test]
    fn test_file_storage_clear_removes_every_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session"));

        storage.put("token", "abc").unwrap();
        storage.put("role", "ROLE_ADMIN").unwrap();
        storage.clear();

        assert_eq!(storage.get("token"), None);
        assert_eq!(storage.get("role"), None);
    }

    #[test]
    fn test_file_storage_clear_on_missing_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("never-created"));
        storage.clear();
        storage.remove("token");
    }

    #[test]
    fn test_put_overwrites_prior_value() {
        let storage = MemoryStorage::new();
        storage.put("token", "first").unwrap();
        storage.put("token", "second").unwrap();
        assert_eq!(storage.get("token").as_deref(), Some("second"));
    }
}
