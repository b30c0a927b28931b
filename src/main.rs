//! Conference Manager CLI
//!
//! Loads a conference file and prints its sessions and accepted items as JSON.
//!
//! ```text
//! conference-manager [FILE]
//! ```
//!
//! Without `FILE`, `CONFERENCE_MANAGER__STORAGE__DEFAULT_FILE` is used.

use std::error::Error;
use std::path::PathBuf;

use serde_json::json;
use tracing::info;

use conference_manager::adapters::FileConferenceStorage;
use conference_manager::config::AppConfig;
use conference_manager::ports::{ConferenceStorage, StorageError};
use conference_manager::telemetry::init_telemetry;

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_telemetry(&config.logging);

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.storage.default_file.clone())
        .ok_or(StorageError::MissingLocation)?;

    let conference = FileConferenceStorage::new().load(&path)?;
    info!(
        conference = conference.name(),
        sessions = conference.session_count(),
        items = conference.item_count(),
        "Conference ready"
    );

    let report = json!({
        "name": conference.name(),
        "sessions": conference.session_rows(),
        "items": conference.item_rows(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
