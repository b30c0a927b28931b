//! Storage Adapters
//!
//! Implementations of the ConferenceStorage port.
//!
//! ## Available Adapters
//!
//! - **FileConferenceStorage** - Stores conferences as flat text files on disk
//! - **InMemoryConferenceStorage** - Stores conference text in memory (testing/development)
//!
//! Both use the line format in `text_format`.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileConferenceStorage, InMemoryConferenceStorage};
//!
//! // Production: file-based storage
//! let storage = FileConferenceStorage::new();
//!
//! // Testing: in-memory storage
//! let storage = InMemoryConferenceStorage::new();
//! ```

mod file_conference_storage;
mod in_memory_conference_storage;
pub mod text_format;

pub use file_conference_storage::FileConferenceStorage;
pub use in_memory_conference_storage::InMemoryConferenceStorage;
pub use text_format::{parse_conference, render_conference, UNASSIGNED_MARKER};
