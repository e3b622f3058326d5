//! Flat key-value storage for save blobs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::core::PersistenceError;

/// Durable byte storage addressed by string keys.
///
/// Writes are last-writer-wins. `get` on a missing key is `Ok(None)`, not an
/// error; `remove` on a missing key succeeds.
pub trait KeyValueStore {
    fn put(&mut self, key: &str, blob: &[u8]) -> Result<(), PersistenceError>;

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError>;

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}

/// In-process store. Contents vanish with the value.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn put(&mut self, key: &str, blob: &[u8]) -> Result<(), PersistenceError> {
        self.entries.insert(key.to_string(), blob.to_vec());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One file per key under a directory.
///
/// A write goes to a sibling temp file first and is renamed into place, so
/// a crash leaves either the old blob or the new one.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.save"))
    }
}

fn unavailable(path: &Path, err: &io::Error) -> PersistenceError {
    PersistenceError::Unavailable(format!("{}: {err}", path.display()))
}

impl KeyValueStore for FileStore {
    fn put(&mut self, key: &str, blob: &[u8]) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.root).map_err(|e| unavailable(&self.root, &e))?;

        let path = self.path_for(key);
        let tmp = path.with_extension("save.tmp");
        fs::write(&tmp, blob).map_err(|e| unavailable(&tmp, &e))?;
        fs::rename(&tmp, &path).map_err(|e| unavailable(&path, &e))
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable(&path, &e)),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(unavailable(&path, &e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dungeon-deck-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::new();
        store.put("k", b"one").unwrap();
        store.put("k", b"two").unwrap();

        assert_eq!(store.get("k").unwrap(), Some(b"two".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_remove_missing_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.remove("nothing").is_ok());
        assert_eq!(store.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = scratch_dir("roundtrip");
        let mut store = FileStore::new(&dir);

        assert_eq!(store.get("dungeonSave").unwrap(), None);

        store.put("dungeonSave", b"{}").unwrap();
        assert_eq!(store.get("dungeonSave").unwrap(), Some(b"{}".to_vec()));
        assert!(store.path_for("dungeonSave").exists());

        store.remove("dungeonSave").unwrap();
        assert_eq!(store.get("dungeonSave").unwrap(), None);
        assert!(store.remove("dungeonSave").is_ok());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_unwritable_root() {
        let dir = scratch_dir("blocked");
        fs::write(&dir, b"not a directory").unwrap();
        let mut store = FileStore::new(dir.join("inner"));

        let err = store.put("k", b"x").unwrap_err();
        assert!(matches!(err, PersistenceError::Unavailable(_)));

        let _ = fs::remove_file(&dir);
    }
}
