//! Integration tests for conference persistence.
//!
//! These tests drive the Conference aggregate through real files:
//! 1. Load a hand-written conference file
//! 2. Edit the schedule
//! 3. Save through the file adapter and read it back
//!
//! Files live in a temporary directory that is removed after each test.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use conference_manager::adapters::{FileConferenceStorage, InMemoryConferenceStorage};
use conference_manager::domain::collections::ItemMove;
use conference_manager::domain::conference::Conference;
use conference_manager::domain::foundation::ErrorCode;
use conference_manager::domain::proceedings::AcceptedItem;
use conference_manager::domain::session::Session;
use conference_manager::ports::{ConferenceStorage, StorageError};

// =============================================================================
// Test Infrastructure
// =============================================================================

const SIGCSE: &str = "\
SIGCSE 2020
# Morning,100
*Paper|Alice|Talk|15
*Panel|Bob|Panel
# +++
*LightningTalk|Carol|Flash
";

fn write_file(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn load_builds_sessions_and_pool() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "sigcse.txt", SIGCSE);

    let conf = FileConferenceStorage::new().load(&path).unwrap();

    assert_eq!(conf.name(), "SIGCSE 2020");
    assert_eq!(conf.session_count(), 1);
    let morning = conf.session(0).unwrap();
    assert_eq!(morning.name(), "Morning");
    assert_eq!(morning.remaining_capacity(), 10);

    let rows = conf.item_rows();
    assert_eq!(rows.len(), 3);
    let scheduled: Vec<_> = rows.iter().filter(|r| r.session == "Morning").collect();
    assert_eq!(scheduled.len(), 2);
    assert_eq!(conf.unassigned_items().count(), 1);
    assert!(!conf.is_dirty());
}

#[test]
fn load_skips_bad_lines_but_keeps_the_rest() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "messy.txt",
        "Messy\n# Morning,60\n# morning,90\n* Paper|A|Dropped\n\
         # Evening,abc\n* Paper|B|Lost\n# +++\n* Keynote|C|Lost\n",
    );

    let conf = FileConferenceStorage::new().load(&path).unwrap();

    assert_eq!(conf.session_count(), 1);
    assert_eq!(conf.session(0).unwrap().duration().value(), 60);
    assert_eq!(conf.item_count(), 0);
}

// =============================================================================
// Saving
// =============================================================================

#[test]
fn edited_conference_round_trips_through_a_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "sigcse.txt", SIGCSE);
    let storage = FileConferenceStorage::new();

    let mut conf = storage.load(&path).unwrap();
    conf.add_session(Session::new("Afternoon", 45).unwrap()).unwrap();
    let item = conf
        .add_accepted_item(AcceptedItem::paper_with_duration("Dave", "Late", 40).unwrap())
        .unwrap();
    let afternoon = conf.session_index_of_name("afternoon").unwrap();
    conf.assign_item_to_session(afternoon, item).unwrap();
    let morning = conf.session_index_of_name("Morning").unwrap();
    conf.move_item_in_session(morning, 1, ItemMove::Front).unwrap();
    assert!(conf.is_dirty());

    conf.save(&storage, &path).unwrap();
    assert!(!conf.is_dirty());

    let reloaded = storage.load(&path).unwrap();
    assert_eq!(reloaded.session_rows(), conf.session_rows());
    assert_eq!(reloaded.item_rows(), conf.item_rows());

    let morning = reloaded.session_index_of_name("Morning").unwrap();
    let running: Vec<_> = reloaded
        .session_item_rows(morning)
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(running, vec!["Panel", "Talk"]);
}

#[test]
fn failed_save_keeps_conference_dirty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("conf.txt");
    let mut conf = Conference::new("Unsaved").unwrap();

    let err = conf.save(&FileConferenceStorage::new(), &path).unwrap_err();

    assert!(matches!(err, StorageError::SaveFailed { .. }));
    assert!(conf.is_dirty());
}

#[test]
fn empty_destination_is_rejected_before_storage() {
    let storage = InMemoryConferenceStorage::new();
    let mut conf = Conference::new("Nowhere").unwrap();

    let err = conf.save(&storage, Path::new("")).unwrap_err();

    assert_eq!(err.to_string(), "A file location is required.");
    assert_eq!(storage.file_count(), 0);
    assert!(conf.is_dirty());
}

#[test]
fn file_and_memory_adapters_write_the_same_text() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "sigcse.txt", SIGCSE);
    let mut conf = FileConferenceStorage::new().load(&path).unwrap();

    let memory = InMemoryConferenceStorage::new();
    conf.save(&memory, Path::new("copy.txt")).unwrap();
    conf.save(&FileConferenceStorage::new(), &path).unwrap();

    assert_eq!(
        memory.raw(Path::new("copy.txt")).unwrap(),
        fs::read_to_string(&path).unwrap()
    );
}

// =============================================================================
// Scheduling after load
// =============================================================================

#[test]
fn removing_a_loaded_session_frees_its_items() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "sigcse.txt", SIGCSE);
    let mut conf = FileConferenceStorage::new().load(&path).unwrap();

    conf.remove_session_at(0).unwrap();

    assert_eq!(conf.unassigned_items().count(), 3);
    assert!(conf.item_rows().iter().all(|r| r.session.is_empty()));
}

#[test]
fn loaded_session_rejects_item_that_overflows() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "sigcse.txt", SIGCSE);
    let mut conf = FileConferenceStorage::new().load(&path).unwrap();

    let item = conf
        .add_accepted_item(AcceptedItem::paper("Eve", "Too Long").unwrap())
        .unwrap();
    let err = conf.assign_item_to_session(0, item).unwrap_err();

    assert!(err.is(ErrorCode::InvalidState));
    assert_eq!(conf.session(0).unwrap().remaining_capacity(), 10);
}
