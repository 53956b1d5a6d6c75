//! Named-blob storage the host provides.
//!
//! The engine only needs "read blob by name" and "write blob by name". Files on
//! disk are the default; [`MemoryStore`] covers tests and hosts that persist
//! elsewhere.

use crate::core::error::StoreError;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Blocking key-value blob storage.
pub trait BlobStore {
    /// `Ok(None)` when nothing has been stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn write(&mut self, key: &str, blob: &str) -> Result<(), StoreError>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, for exercising save-failure paths.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn with_blob(mut self, key: &str, blob: &str) -> Self {
        self.blobs.insert(key.to_string(), blob.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, blob: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "memory store is read-only",
            )));
        }
        self.blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per blob inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Platform data directory, e.g. `~/.local/share/catfish` on Linux.
    pub fn default_location() -> Result<Self, StoreError> {
        let project_dirs =
            ProjectDirs::from("", "", "catfish").ok_or(StoreError::NoSaveDirectory)?;
        Self::at(project_dirs.data_dir())
    }

    /// Store rooted at `dir`, created if missing.
    pub fn at(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    #[cfg(test)]
    pub(crate) fn new_for_test() -> io::Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "catfish-test-{}-{}",
            std::process::id(),
            test_id
        ));
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes to a sibling temp file and renames it over the target, so a crash
    /// mid-write leaves the previous save intact.
    fn write(&mut self, key: &str, blob: &str) -> Result<(), StoreError> {
        let target = self.path_for(key);
        let temp = self.dir.join(format!("{}.json.tmp", key));
        fs::write(&temp, blob)?;
        fs::rename(&temp, &target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.read("slot").expect("read").is_none());
        store.write("slot", "{}").expect("write");
        assert_eq!(store.read("slot").expect("read").as_deref(), Some("{}"));
    }

    #[test]
    fn test_failing_store_rejects_writes() {
        let mut store = MemoryStore::failing();
        assert!(matches!(store.write("slot", "{}"), Err(StoreError::Io(_))));
        assert!(store.get("slot").is_none());
    }

    #[test]
    fn test_file_store_missing_blob_is_none() {
        let store = FileStore::new_for_test().expect("temp dir");
        assert!(store.read("nothing-here").expect("read").is_none());
        let _ = fs::remove_dir_all(store.dir());
    }

    #[test]
    fn test_file_store_write_then_read() {
        let mut store = FileStore::new_for_test().expect("temp dir");
        store.write("save", "{\"version\":2}").expect("write");
        store.write("save", "{\"version\":3}").expect("overwrite");

        assert_eq!(
            store.read("save").expect("read").as_deref(),
            Some("{\"version\":3}")
        );
        assert!(store.path_for("save").exists());
        assert!(!store.dir().join("save.json.tmp").exists());
        let _ = fs::remove_dir_all(store.dir());
    }
}
