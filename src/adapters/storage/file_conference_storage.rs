//! File-based Conference Storage Adapter
//!
//! Reads and writes conferences as flat text files on disk.
//!
//! # Atomic Writes
//!
//! Saving writes to `<destination>.tmp`, flushes and syncs it, then renames
//! it over the destination, so a failed save never leaves a half-written file.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::conference::Conference;
use crate::ports::{ConferenceStorage, StorageError};

use super::text_format::{parse_conference, render_conference};

/// File-based storage for conferences.
#[derive(Debug, Clone, Default)]
pub struct FileConferenceStorage;

impl FileConferenceStorage {
    /// Create a new file storage.
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileConferenceStorage::new();
    /// let conference = storage.load(Path::new("conference.txt"))?;
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Get the temporary path used while saving to `location`.
    fn temp_path(location: &Path) -> PathBuf {
        let mut raw: OsString = location.as_os_str().to_owned();
        raw.push(".tmp");
        PathBuf::from(raw)
    }

    fn write_file(path: &Path, text: &str) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        writer.get_ref().sync_all()
    }
}

impl ConferenceStorage for FileConferenceStorage {
    fn load(&self, location: &Path) -> Result<Conference, StorageError> {
        let file = File::open(location)
            .map_err(|e| StorageError::load_failed(format!("{}: {}", location.display(), e)))?;

        let mut text = String::new();
        BufReader::new(file)
            .read_to_string(&mut text)
            .map_err(|e| StorageError::load_failed(format!("{}: {}", location.display(), e)))?;

        let conference = parse_conference(&text)?;
        info!(
            path = %location.display(),
            sessions = conference.session_count(),
            items = conference.item_count(),
            "Loaded conference"
        );
        Ok(conference)
    }

    fn save(&self, conference: &Conference, location: &Path) -> Result<(), StorageError> {
        let temp = Self::temp_path(location);
        let text = render_conference(conference);

        if let Err(e) = Self::write_file(&temp, &text) {
            // Best effort; the temp file may never have been created.
            let _ = fs::remove_file(&temp);
            return Err(StorageError::save_failed(format!("{}: {}", temp.display(), e)));
        }

        if let Err(e) = fs::rename(&temp, location) {
            if let Err(cleanup) = fs::remove_file(&temp) {
                warn!(path = %temp.display(), error = %cleanup, "Failed to remove temp file");
            }
            return Err(StorageError::save_failed(format!("{}: {}", location.display(), e)));
        }

        info!(
            path = %location.display(),
            sessions = conference.session_count(),
            items = conference.item_count(),
            "Saved conference"
        );
        Ok(())
    }
}
