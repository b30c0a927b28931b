//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Conference persistence (flat text file, in-memory)

pub mod storage;

pub use storage::{FileConferenceStorage, InMemoryConferenceStorage};
