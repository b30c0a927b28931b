//! Session aggregate entity.
//!
//! Sessions are named, time-boxed slots that hold accepted items up to their
//! total duration.
//!
//! # Ownership
//!
//! Sessions reference items by ID but do NOT own them.
//! Items are owned by the conference's item pool.

use std::cmp::Ordering;

use crate::domain::collections::{ItemMove, OrderedEntry, OrderedUniqueSet, ReorderableList};
use crate::domain::foundation::{DomainError, ItemId, Minutes, SessionId};
use crate::domain::proceedings::{AcceptedItem, CANNOT_ADD_ITEM};

/// Message attached to every session validation failure.
pub const INVALID_SESSION: &str = "Invalid session.";

/// Characters that would split a session header when the conference is written out.
const RESERVED_CHARS: &[char] = &[',', '\n', '\r'];

/// An item listed in a session, with the length it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledItem {
    item_id: ItemId,
    duration: Minutes,
}

impl ScheduledItem {
    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn duration(&self) -> Minutes {
        self.duration
    }
}

/// Session aggregate - a named slot with a fixed capacity in minutes.
///
/// # Invariants
///
/// - `name` is not blank
/// - `duration` is within `Minutes` bounds
/// - the durations in `items` never sum past `duration`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    name: String,
    duration: Minutes,
    items: ReorderableList<ScheduledItem>,
}

impl Session {
    /// Create a new empty session.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name is blank or duration is out of range
    pub fn new(name: impl Into<String>, duration: i32) -> Result<Self, DomainError> {
        let name = name.into();
        Self::validate_name(&name)?;
        Ok(Self {
            id: SessionId::new(),
            name,
            duration: Self::checked_duration(duration)?,
            items: ReorderableList::new(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the session name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the total capacity.
    pub fn duration(&self) -> Minutes {
        self.duration
    }

    /// Returns the scheduled items in running order.
    pub fn items(&self) -> &ReorderableList<ScheduledItem> {
        &self.items
    }

    /// Returns the number of scheduled items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if `item_id` is listed in this session.
    pub fn holds(&self, item_id: ItemId) -> bool {
        self.items.position(|s| s.item_id == item_id).is_some()
    }

    /// Minutes taken by the scheduled items, summed on every call.
    pub fn scheduled_minutes(&self) -> i32 {
        self.items.iter().map(|s| s.duration.value()).sum()
    }

    /// Minutes still free.
    pub fn remaining_capacity(&self) -> i32 {
        self.duration.value() - self.scheduled_minutes()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Rename the session.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        Self::validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Change the total capacity.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if out of range
    /// - `InvalidState` if the scheduled items would no longer fit
    pub fn set_duration(&mut self, duration: i32) -> Result<(), DomainError> {
        let duration = Self::checked_duration(duration)?;
        if duration.value() < self.scheduled_minutes() {
            return Err(DomainError::invalid_state(INVALID_SESSION)
                .with_detail("reason", "scheduled items exceed the new duration"));
        }
        self.duration = duration;
        Ok(())
    }

    /// Schedule `item` at the end of this session.
    ///
    /// Links the item and lists it; on error neither happens.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the item is already scheduled or does not fit
    pub fn add_item(&mut self, item: &mut AcceptedItem) -> Result<usize, DomainError> {
        if item.duration().value() > self.remaining_capacity() {
            return Err(DomainError::invalid_state(CANNOT_ADD_ITEM)
                .with_detail("reason", "session lacks capacity"));
        }
        item.assign(self)?;
        self.items.add(ScheduledItem {
            item_id: item.id(),
            duration: item.duration(),
        });
        Ok(self.items.len() - 1)
    }

    /// Unschedule the item at `index` and clear its link in `pool`.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` if `index` is not a position in this session
    pub fn remove_item_at(
        &mut self,
        index: usize,
        pool: &mut OrderedUniqueSet<AcceptedItem>,
    ) -> Result<ItemId, DomainError> {
        let removed = self.items.remove_at(index)?;
        if let Some(item) = pool.iter_mut().find(|i| i.id() == removed.item_id) {
            item.unassign();
        }
        Ok(removed.item_id)
    }

    /// Reorder the item at `index`; returns its new position.
    pub fn move_item(&mut self, index: usize, movement: ItemMove) -> Result<usize, DomainError> {
        self.items.apply(index, movement)
    }

    /// Drop `item_id` from the running order without touching the item.
    ///
    /// Used when the item itself is leaving the pool.
    pub(crate) fn detach_item(&mut self, item_id: ItemId) -> bool {
        match self.items.position(|s| s.item_id == item_id) {
            Some(index) => self.items.remove_at(index).is_ok(),
            None => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name", INVALID_SESSION));
        }
        if name.contains(RESERVED_CHARS) {
            return Err(DomainError::validation("name", INVALID_SESSION)
                .with_detail("reason", "must not contain ',' or line breaks"));
        }
        Ok(())
    }

    fn checked_duration(duration: i32) -> Result<Minutes, DomainError> {
        Minutes::try_new(duration).map_err(|e| {
            DomainError::validation(e.field(), INVALID_SESSION).with_detail("reason", e.to_string())
        })
    }
}

impl OrderedEntry for Session {
    fn order(&self, other: &Self) -> Ordering {
        self.name.to_lowercase().cmp(&other.name.to_lowercase())
    }

    fn same_entry(&self, other: &Self) -> bool {
        self.order(other) == Ordering::Equal
    }
}
