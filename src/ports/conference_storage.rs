//! Conference Storage Port - Interface for persisting a conference.
//!
//! The domain depends on this trait; adapters decide where the text goes
//! (a file on disk, or memory for tests).

use std::path::Path;

use crate::domain::conference::Conference;

/// Errors that can occur during conference storage operations.
///
/// The display text is what a caller shows to the user; `reason` carries
/// the underlying cause for logs.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Unable to load file.")]
    LoadFailed { reason: String },

    #[error("Unable to save file.")]
    SaveFailed { reason: String },

    #[error("Invalid file format.")]
    InvalidFormat { reason: String },

    #[error("A file location is required.")]
    MissingLocation,
}

impl StorageError {
    pub fn load_failed(reason: impl Into<String>) -> Self {
        StorageError::LoadFailed {
            reason: reason.into(),
        }
    }

    pub fn save_failed(reason: impl Into<String>) -> Self {
        StorageError::SaveFailed {
            reason: reason.into(),
        }
    }

    pub fn invalid_format(reason: impl Into<String>) -> Self {
        StorageError::InvalidFormat {
            reason: reason.into(),
        }
    }

    /// Returns the underlying cause, if one was recorded.
    pub fn reason(&self) -> Option<&str> {
        match self {
            StorageError::LoadFailed { reason }
            | StorageError::SaveFailed { reason }
            | StorageError::InvalidFormat { reason } => Some(reason),
            StorageError::MissingLocation => None,
        }
    }
}

/// Port for loading and saving conferences.
pub trait ConferenceStorage {
    /// Read the conference stored at `location`.
    ///
    /// Malformed lines are skipped; only an unreadable or empty source fails.
    /// The returned conference is clean.
    ///
    /// # Errors
    ///
    /// - `LoadFailed` if the source is absent or unreadable
    /// - `InvalidFormat` if the source is empty or has no usable name line
    fn load(&self, location: &Path) -> Result<Conference, StorageError>;

    /// Write `conference` to `location`, replacing what was there.
    ///
    /// # Errors
    ///
    /// - `SaveFailed` if the destination cannot be written
    fn save(&self, conference: &Conference, location: &Path) -> Result<(), StorageError>;
}
