//! In-Memory Conference Storage Adapter
//!
//! Keeps rendered conference text in memory, keyed by path.
//! Useful for testing and development.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::domain::conference::Conference;
use crate::ports::{ConferenceStorage, StorageError};

use super::text_format::{parse_conference, render_conference};

/// In-memory storage for conferences
#[derive(Debug, Clone, Default)]
pub struct InMemoryConferenceStorage {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl InMemoryConferenceStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw text at `location`, as if a file had been written by hand.
    pub fn put_raw(&self, location: impl Into<PathBuf>, text: impl Into<String>) {
        if let Ok(mut files) = self.files.write() {
            files.insert(location.into(), text.into());
        }
    }

    /// Get the raw text stored at `location`.
    pub fn raw(&self, location: &Path) -> Option<String> {
        self.files.read().ok()?.get(location).cloned()
    }

    /// Get the number of stored files
    pub fn file_count(&self) -> usize {
        self.files.read().map(|files| files.len()).unwrap_or(0)
    }

    /// Clear all stored data (useful for tests)
    pub fn clear(&self) {
        if let Ok(mut files) = self.files.write() {
            files.clear();
        }
    }
}

impl ConferenceStorage for InMemoryConferenceStorage {
    fn load(&self, location: &Path) -> Result<Conference, StorageError> {
        let files = self
            .files
            .read()
            .map_err(|e| StorageError::load_failed(e.to_string()))?;
        let text = files
            .get(location)
            .ok_or_else(|| StorageError::load_failed(format!("{} not found", location.display())))?;
        parse_conference(text)
    }

    fn save(&self, conference: &Conference, location: &Path) -> Result<(), StorageError> {
        let mut files = self
            .files
            .write()
            .map_err(|e| StorageError::save_failed(e.to_string()))?;
        files.insert(location.to_path_buf(), render_conference(conference));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::Session;

    #[test]
    fn save_stores_rendered_text() {
        let storage = InMemoryConferenceStorage::new();
        let mut conf = Conference::new("Mem").unwrap();
        conf.add_session(Session::new("Morning", 30).unwrap()).unwrap();

        storage.save(&conf, Path::new("a.txt")).unwrap();

        assert_eq!(
            storage.raw(Path::new("a.txt")).as_deref(),
            Some("Mem\n# Morning,30\n# +++\n")
        );
        assert_eq!(storage.file_count(), 1);
    }

    #[test]
    fn load_parses_raw_text() {
        let storage = InMemoryConferenceStorage::new();
        storage.put_raw("b.txt", "Mem\n# +++\n* Panel|Bob|Talk\n");

        let conf = storage.load(Path::new("b.txt")).unwrap();
        assert_eq!(conf.item_count(), 1);
    }

    #[test]
    fn load_unknown_location_fails() {
        let storage = InMemoryConferenceStorage::new();
        let err = storage.load(Path::new("nowhere.txt")).unwrap_err();
        assert!(matches!(err, StorageError::LoadFailed { .. }));
    }

    #[test]
    fn clear_removes_everything() {
        let storage = InMemoryConferenceStorage::new();
        storage.put_raw("b.txt", "Mem\n");
        storage.clear();
        assert_eq!(storage.file_count(), 0);
    }
}
