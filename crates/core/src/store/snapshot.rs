//! Snapshot persistence backends for the cart and wishlist stores.
//!
//! A [`SnapshotStore`] is the localStorage-equivalent seam: a flat key to
//! string map with load/save/remove. Hydration treats a missing or corrupt
//! snapshot as "no snapshot"; the stores fall back to empty state rather
//! than surfacing an error to the shopper.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

/// Failure writing or removing a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid snapshot key: {0}")]
    InvalidKey(String),
}

/// Key-value persistence for store snapshots.
///
/// Implementations must tolerate concurrent stores sharing a backend; keys
/// are namespaced by the calling store (`"cart"`, `"wishlist"`).
pub trait SnapshotStore: Send {
    /// Load the snapshot for `key`, or `None` if absent or unreadable.
    fn load(&self, key: &str) -> Option<String>;

    /// Persist the snapshot for `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError` if the backend cannot durably store the value.
    fn save(&self, key: &str, value: &str) -> Result<(), SnapshotError>;

    /// Remove the snapshot for `key` entirely. Removing an absent key is ok.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError` if the backend cannot remove the value.
    fn remove(&self, key: &str) -> Result<(), SnapshotError>;
}

/// In-memory snapshot backend for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemorySnapshots {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySnapshots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshots {
    fn load(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .map(|entries| entries.get(key).cloned())
            .unwrap_or_default()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SnapshotError> {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SnapshotError> {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
        Ok(())
    }
}

/// Durable snapshot backend: one JSON file per key under a directory.
#[derive(Debug)]
pub struct DirSnapshots {
    dir: PathBuf,
}

impl DirSnapshots {
    /// Create a backend rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError` if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, SnapshotError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, SnapshotError> {
        // Keys become file names; reject anything that could escape the dir.
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(SnapshotError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SnapshotStore for DirSnapshots {
    fn load(&self, key: &str) -> Option<String> {
        let path = self.path_for(key).ok()?;
        std::fs::read_to_string(path).ok()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SnapshotError> {
        let path = self.path_for(key)?;
        write_atomically(&path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SnapshotError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Write via a sibling temp file and rename so readers never see a torn file.
fn write_atomically(path: &Path, value: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, value)?;
    std::fs::rename(&tmp, path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let store = MemorySnapshots::new();
        assert!(store.load("cart").is_none());

        store.save("cart", "[1,2]").unwrap();
        assert_eq!(store.load("cart").as_deref(), Some("[1,2]"));

        store.remove("cart").unwrap();
        assert!(store.load("cart").is_none());
    }

    #[test]
    fn test_memory_remove_absent_is_ok() {
        let store = MemorySnapshots::new();
        store.remove("missing").unwrap();
    }

    #[test]
    fn test_dir_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirSnapshots::new(dir.path().join("session")).unwrap();

        store.save("wishlist", "[]").unwrap();
        assert_eq!(store.load("wishlist").as_deref(), Some("[]"));

        store.remove("wishlist").unwrap();
        assert!(store.load("wishlist").is_none());
        store.remove("wishlist").unwrap();
    }

    #[test]
    fn test_dir_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = DirSnapshots::new(dir.path()).unwrap();
            store.save("cart", "snapshot").unwrap();
        }
        let store = DirSnapshots::new(dir.path()).unwrap();
        assert_eq!(store.load("cart").as_deref(), Some("snapshot"));
    }

    #[test]
    fn test_dir_rejects_traversal_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirSnapshots::new(dir.path()).unwrap();
        assert!(store.save("../escape", "x").is_err());
        assert!(store.load("../escape").is_none());
    }
}
