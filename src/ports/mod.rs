//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ConferenceStorage` - Load and save a conference

mod conference_storage;

pub use conference_storage::{ConferenceStorage, StorageError};
