use crate::core::KeyValueStore;
use crate::utils::error::{Result, SortError};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores each key as `<base_path>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: String,
}

impl FileStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        Path::new(&self.base_path).join(format!("{}.json", key))
    }
}

fn storage_error(action: &str, path: &Path, e: std::io::Error) -> SortError {
    SortError::StorageError {
        message: format!("failed to {} {}: {}", action, path.display(), e),
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let full_path = self.path_for(key);
        match fs::read_to_string(&full_path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error("read", &full_path, e)),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let full_path = self.path_for(key);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| storage_error("create", parent, e))?;
        }

        fs::write(&full_path, value).map_err(|e| storage_error("write", &full_path, e))?;
        tracing::debug!("Saved {} bytes to {}", value.len(), full_path.display());
        Ok(())
    }

    fn erase(&mut self, key: &str) -> Result<()> {
        let full_path = self.path_for(key);
        match fs::remove_file(&full_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error("remove", &full_path, e)),
        }
    }
}

/// In-process store, handy for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn erase(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
