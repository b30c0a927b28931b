//! Conference aggregate.
//!
//! The conference owns every session and every accepted item, and is the
//! only place cross-entity rules are enforced: unique session names, unique
//! authors + title pairs, and consistent item/session links.
//!
//! # Dirty tracking
//!
//! A new conference starts dirty. Every successful mutation marks it dirty,
//! a successful save marks it clean, and a conference read from storage
//! starts clean.

use std::path::Path;

use crate::domain::collections::{ItemMove, OrderedEntry, OrderedUniqueSet};
use crate::domain::foundation::{DomainError, ItemId, SessionId};
use crate::domain::proceedings::{AcceptedItem, CANNOT_ADD_ITEM};
use crate::domain::session::Session;
use crate::ports::{ConferenceStorage, StorageError};

use super::projections::{ItemRow, ScheduledItemRow, SessionRow};

/// Message for a rejected session add or edit.
pub const CANNOT_ADD_SESSION: &str = "Cannot add session.";

/// Conference aggregate - sessions, the item pool, and unsaved-changes state.
///
/// # Invariants
///
/// - `name` is not blank and never changes
/// - session names are unique ignoring case
/// - item authors + title pairs are unique (exact match)
/// - an item's session link names the one session that lists it, or is empty
/// - every item a session lists is in `items`
#[derive(Debug, Clone)]
pub struct Conference {
    name: String,
    sessions: OrderedUniqueSet<Session>,
    items: OrderedUniqueSet<AcceptedItem>,
    dirty: bool,
}

impl Conference {
    /// Create an empty conference.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name is blank or spans more than one line
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() || name.contains(&['\n', '\r'][..]) {
            return Err(DomainError::validation("name", "Invalid name."));
        }
        Ok(Self {
            name,
            sessions: OrderedUniqueSet::new(),
            items: OrderedUniqueSet::new(),
            dirty: true,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the conference name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if there are changes since the last load or save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Records that the current state matches what is stored.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Sessions in ascending name order.
    pub fn sessions(&self) -> &OrderedUniqueSet<Session> {
        &self.sessions
    }

    /// The item pool in ascending authors/title order.
    pub fn accepted_items(&self) -> &OrderedUniqueSet<AcceptedItem> {
        &self.items
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the session at `index`.
    pub fn session(&self, index: usize) -> Result<&Session, DomainError> {
        self.sessions.get(index)
    }

    /// Returns the pool item at `index`.
    pub fn accepted_item(&self, index: usize) -> Result<&AcceptedItem, DomainError> {
        self.items.get(index)
    }

    /// Finds a session by name, ignoring case.
    pub fn session_index_of_name(&self, name: &str) -> Option<usize> {
        let wanted = name.to_lowercase();
        self.sessions.position(|s| s.name().to_lowercase() == wanted)
    }

    /// Items scheduled in the session at `index`, in running order.
    pub fn items_in_session(&self, index: usize) -> Result<Vec<&AcceptedItem>, DomainError> {
        let session = self.sessions.get(index)?;
        Ok(session
            .items()
            .iter()
            .filter_map(|scheduled| self.item_by_id(scheduled.item_id()))
            .collect())
    }

    /// Pool items not scheduled in any session, in pool order.
    pub fn unassigned_items(&self) -> impl Iterator<Item = &AcceptedItem> {
        self.items.iter().filter(|item| !item.is_assigned())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Session mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add an empty session; returns the index it landed at.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the session already lists items
    /// - `DuplicateEntry` if a session with the same name exists
    pub fn add_session(&mut self, session: Session) -> Result<usize, DomainError> {
        Self::ensure_empty(&session)?;
        let index = self
            .sessions
            .add(session)
            .map_err(|e| {
                DomainError::duplicate(CANNOT_ADD_SESSION).with_detail("cause", e.message)
            })?;
        self.dirty = true;
        Ok(index)
    }

    /// Replace the session at `index`; returns the replacement's index.
    ///
    /// Items scheduled in the replaced session become unscheduled. On error
    /// the conference is unchanged.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` if `index` is invalid
    /// - `InvalidState` if the replacement already lists items
    /// - `DuplicateEntry` if another session has the replacement's name
    pub fn edit_session(
        &mut self,
        index: usize,
        replacement: Session,
    ) -> Result<usize, DomainError> {
        self.sessions.get(index)?;
        Self::ensure_empty(&replacement)?;
        let collides = self
            .sessions
            .iter()
            .enumerate()
            .any(|(i, s)| i != index && s.same_entry(&replacement));
        if collides {
            return Err(DomainError::duplicate(CANNOT_ADD_SESSION));
        }

        let original = self.sessions.remove_at(index)?;
        match self.sessions.add(replacement) {
            Ok(new_index) => {
                self.release_items_of(original.id());
                self.dirty = true;
                Ok(new_index)
            }
            Err(err) => {
                self.sessions.add(original)?;
                Err(DomainError::duplicate(CANNOT_ADD_SESSION).with_detail("cause", err.message))
            }
        }
    }

    /// Remove the session at `index`, unscheduling its items.
    ///
    /// The items stay in the pool.
    pub fn remove_session_at(&mut self, index: usize) -> Result<Session, DomainError> {
        let removed = self.sessions.remove_at(index)?;
        self.release_items_of(removed.id());
        self.dirty = true;
        Ok(removed)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Item pool mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add an unscheduled item to the pool; returns the index it landed at.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the item is linked to a session
    /// - `DuplicateEntry` if an item with the same authors and title exists
    pub fn add_accepted_item(&mut self, item: AcceptedItem) -> Result<usize, DomainError> {
        Self::ensure_unassigned(&item)?;
        let index = self
            .items
            .add(item)
            .map_err(|e| {
                DomainError::duplicate(CANNOT_ADD_ITEM).with_detail("cause", e.message)
            })?;
        self.dirty = true;
        Ok(index)
    }

    /// Replace the pool item at `index`; returns the replacement's index.
    ///
    /// The replaced item is dropped from its session, and the replacement
    /// starts unscheduled. On error the conference is unchanged.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` if `index` is invalid
    /// - `InvalidState` if the replacement is linked to a session
    /// - `DuplicateEntry` if another item has the same authors and title
    pub fn edit_accepted_item(
        &mut self,
        index: usize,
        replacement: AcceptedItem,
    ) -> Result<usize, DomainError> {
        self.items.get(index)?;
        Self::ensure_unassigned(&replacement)?;
        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(i, item)| i != index && item.same_entry(&replacement));
        if collides {
            return Err(DomainError::duplicate(CANNOT_ADD_ITEM));
        }

        let original = self.items.remove_at(index)?;
        match self.items.add(replacement) {
            Ok(new_index) => {
                self.detach_from_session(&original);
                self.dirty = true;
                Ok(new_index)
            }
            Err(err) => {
                self.items.add(original)?;
                Err(DomainError::duplicate(CANNOT_ADD_ITEM).with_detail("cause", err.message))
            }
        }
    }

    /// Remove the pool item at `index`, dropping it from its session.
    ///
    /// The returned item is unscheduled.
    pub fn remove_accepted_item_at(&mut self, index: usize) -> Result<AcceptedItem, DomainError> {
        let mut removed = self.items.remove_at(index)?;
        self.detach_from_session(&removed);
        removed.unassign();
        self.dirty = true;
        Ok(removed)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scheduling
    // ─────────────────────────────────────────────────────────────────────────

    /// Schedule pool item `item_index` at the end of session `session_index`.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` if either index is invalid
    /// - `InvalidState` ("Cannot add item.") if the item is already
    ///   scheduled or does not fit
    pub fn assign_item_to_session(
        &mut self,
        session_index: usize,
        item_index: usize,
    ) -> Result<(), DomainError> {
        let session = self.sessions.get_mut(session_index)?;
        let item = self.items.get_mut(item_index)?;
        session.add_item(item).map_err(|e| {
            DomainError::invalid_state(CANNOT_ADD_ITEM).with_detail("cause", e.to_string())
        })?;
        self.dirty = true;
        Ok(())
    }

    /// Unschedule the item at position `item_in_session` of session `session_index`.
    ///
    /// `item_in_session` is a position in the session's running order, not
    /// in the pool.
    pub fn unassign_item_from_session(
        &mut self,
        session_index: usize,
        item_in_session: usize,
    ) -> Result<(), DomainError> {
        let session = self.sessions.get_mut(session_index)?;
        session.remove_item_at(item_in_session, &mut self.items)?;
        self.dirty = true;
        Ok(())
    }

    /// Reorder an item within a session; returns its new position.
    pub fn move_item_in_session(
        &mut self,
        session_index: usize,
        item_in_session: usize,
        movement: ItemMove,
    ) -> Result<usize, DomainError> {
        let session = self.sessions.get_mut(session_index)?;
        let position = session.move_item(item_in_session, movement)?;
        self.dirty = true;
        Ok(position)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Projections
    // ─────────────────────────────────────────────────────────────────────────

    /// Name, duration and remaining capacity of every session.
    pub fn session_rows(&self) -> Vec<SessionRow> {
        self.sessions.iter().map(SessionRow::from_session).collect()
    }

    /// Every pool item with the name of its session.
    pub fn item_rows(&self) -> Vec<ItemRow> {
        self.items
            .iter()
            .map(|item| ItemRow::from_item(item, self.session_name_of(item)))
            .collect()
    }

    /// The running order of the session at `index`.
    pub fn session_item_rows(&self, index: usize) -> Result<Vec<ScheduledItemRow>, DomainError> {
        Ok(self
            .items_in_session(index)?
            .into_iter()
            .map(ScheduledItemRow::from_item)
            .collect())
    }

    /// Name of the session `item` is scheduled in.
    pub fn session_name_of(&self, item: &AcceptedItem) -> Option<&str> {
        let id = item.session_id()?;
        self.sessions
            .iter()
            .find(|s| s.id() == id)
            .map(|s| s.name())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────────────────────

    /// Write this conference to `destination` and mark it clean.
    ///
    /// # Errors
    ///
    /// - `MissingLocation` if `destination` is empty
    /// - whatever `storage` reports; the conference stays dirty
    pub fn save(
        &mut self,
        storage: &dyn ConferenceStorage,
        destination: &Path,
    ) -> Result<(), StorageError> {
        if destination.as_os_str().is_empty() {
            return Err(StorageError::MissingLocation);
        }
        storage.save(self, destination)?;
        self.dirty = false;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn item_by_id(&self, id: ItemId) -> Option<&AcceptedItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Clears the link on every pool item scheduled in `session_id`.
    fn release_items_of(&mut self, session_id: SessionId) {
        for item in self.items.iter_mut() {
            if item.session_id() == Some(session_id) {
                item.unassign();
            }
        }
    }

    /// Drops `item` from the running order of the session it is linked to.
    fn detach_from_session(&mut self, item: &AcceptedItem) {
        if let Some(session_id) = item.session_id() {
            if let Some(session) = self.sessions.iter_mut().find(|s| s.id() == session_id) {
                session.detach_item(item.id());
            }
        }
    }

    fn ensure_empty(session: &Session) -> Result<(), DomainError> {
        if session.item_count() > 0 {
            return Err(DomainError::invalid_state(CANNOT_ADD_SESSION)
                .with_detail("reason", "session already lists items"));
        }
        Ok(())
    }

    fn ensure_unassigned(item: &AcceptedItem) -> Result<(), DomainError> {
        if item.is_assigned() {
            return Err(DomainError::invalid_state(CANNOT_ADD_ITEM)
                .with_detail("reason", "item is linked to a session"));
        }
        Ok(())
    }
}
