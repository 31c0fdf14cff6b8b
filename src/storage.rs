//! Durable key/value storage.
//!
//! Values are whole strings read and written in one piece, the same contract
//! a browser's `localStorage` offers. [`FileStore`] keeps each key in its own
//! file; [`MemoryStore`] keeps everything in a map.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PlannerError, Result};

pub trait KeyValueStore {
    /// Returns `None` when the key has never been written.
    fn get_string(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the whole value stored under `key`.
    fn set_string(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Stores key `k` at `<root>/<k>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

fn storage_error(path: &Path) -> impl FnOnce(std::io::Error) -> PlannerError + '_ {
    move |source| PlannerError::Storage {
        path: path.to_path_buf(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error(&path)(e)),
        }
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(storage_error(&self.root))?;

        // Write to a sibling temp file, then rename over the real one.
        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value).map_err(storage_error(&temp_path))?;
        fs::rename(&temp_path, &path).map_err(storage_error(&path))?;

        debug!(path = %path.display(), bytes = value.len(), "wrote key");
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.into());
        Self { values }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
