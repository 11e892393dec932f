//! Key/value persistence for small pieces of client state.
//!
//! Mirrors the browser's local storage: string keys, string values, read at
//! startup and written synchronously on change.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{EventsError, EventsResult};

pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> EventsResult<()>;
}

/// In-memory storage, for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> EventsResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a single JSON object file (`{"key": "value", ...}`).
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
    /// Set when the file exists but couldn't be read; writes are refused
    /// so its contents are never replaced by an empty map.
    read_error: Option<String>,
}

impl FileStorage {
    /// Open the storage file. A missing or malformed file starts empty.
    /// An unreadable file also starts empty, but stays read-only.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (items, read_error) = match Self::read_items(&path) {
            Ok(items) => (items, None),
            Err(e) => {
                log::warn!("Could not read storage file {}: {}", path.display(), e);
                (BTreeMap::new(), Some(e.to_string()))
            }
        };
        FileStorage {
            path,
            items,
            read_error,
        }
    }

    fn read_items(path: &Path) -> io::Result<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e),
        };

        Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed storage file {}: {}", path.display(), e);
            BTreeMap::new()
        }))
    }

    /// Write all items via a temp file, so a crash never leaves a torn file.
    fn flush(&self) -> EventsResult<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(&self.items)?;
        let temp = self.path.with_extension("json.tmp");

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path).map_err(|e| {
            EventsError::Storage(format!("Could not replace {}: {}", self.path.display(), e))
        })?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> EventsResult<()> {
        if let Some(reason) = &self.read_error {
            return Err(EventsError::Storage(format!(
                "Not overwriting unreadable {}: {}",
                self.path.display(),
                reason
            )));
        }

        let previous = self.items.insert(key.to_string(), value.to_string());

        if let Err(e) = self.flush() {
            // Keep memory in step with what is on disk
            match previous {
                Some(old) => self.items.insert(key.to_string(), old),
                None => self.items.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}
