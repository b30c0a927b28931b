//! AcceptedItem entity.
//!
//! An accepted item is a paper, panel or lightning talk that may be scheduled
//! into at most one session.
//!
//! # Ownership
//!
//! Items are owned by the conference's item pool. The link to a session is a
//! [`SessionId`] handle and never keeps the session alive.

use std::cmp::Ordering;
use std::fmt;

use crate::domain::collections::OrderedEntry;
use crate::domain::foundation::{DomainError, ItemId, Minutes, SessionId};
use crate::domain::session::Session;

use super::ItemKind;

/// Message attached to every item validation failure.
pub const INVALID_ITEM: &str = "Invalid accepted item.";

/// Message attached to every failed assignment.
pub const CANNOT_ADD_ITEM: &str = "Cannot add item.";

/// Characters that would split an item line when the conference is written out.
const RESERVED_CHARS: &[char] = &['|', '\n', '\r'];

/// A paper, panel or lightning talk.
///
/// # Invariants
///
/// - `authors` and `title` are not blank
/// - `duration` is within `Minutes` bounds, and fixed for panels and lightning talks
/// - `session` is set only while the item is listed in that session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedItem {
    id: ItemId,
    kind: ItemKind,
    authors: String,
    title: String,
    duration: Minutes,
    /// True if the duration was supplied rather than defaulted.
    explicit_duration: bool,
    session: Option<SessionId>,
}

impl AcceptedItem {
    /// Creates a paper with the default length.
    pub fn paper(
        authors: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::build(ItemKind::Paper, authors.into(), title.into(), None)
    }

    /// Creates a paper with an explicit length.
    pub fn paper_with_duration(
        authors: impl Into<String>,
        title: impl Into<String>,
        duration: i32,
    ) -> Result<Self, DomainError> {
        Self::build(ItemKind::Paper, authors.into(), title.into(), Some(duration))
    }

    /// Creates a panel.
    pub fn panel(
        authors: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::build(ItemKind::Panel, authors.into(), title.into(), None)
    }

    /// Creates a lightning talk.
    pub fn lightning_talk(
        authors: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::build(ItemKind::LightningTalk, authors.into(), title.into(), None)
    }

    /// Creates an item of any kind.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if authors or title is blank, the duration is out
    ///   of range, or a duration is supplied for a fixed-length kind
    pub fn build(
        kind: ItemKind,
        authors: String,
        title: String,
        duration: Option<i32>,
    ) -> Result<Self, DomainError> {
        let mut item = Self {
            id: ItemId::new(),
            kind,
            authors: String::new(),
            title: String::new(),
            duration: Self::checked_duration(kind.default_duration())?,
            explicit_duration: false,
            session: None,
        };
        item.set_authors(authors)?;
        item.set_title(title)?;
        if let Some(minutes) = duration {
            item.set_duration(minutes)?;
        }
        Ok(item)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Returns the type label ("Paper", "Panel", "LightningTalk").
    pub fn type_label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration(&self) -> Minutes {
        self.duration
    }

    /// Returns true if the duration is written out when serialized.
    pub fn has_explicit_duration(&self) -> bool {
        self.explicit_duration
    }

    /// Returns the session this item is scheduled in, if any.
    pub fn session_id(&self) -> Option<SessionId> {
        self.session
    }

    pub fn is_assigned(&self) -> bool {
        self.session.is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the authors.
    pub fn set_authors(&mut self, authors: impl Into<String>) -> Result<(), DomainError> {
        self.authors = Self::checked_text("authors", authors.into())?;
        Ok(())
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), DomainError> {
        self.title = Self::checked_text("title", title.into())?;
        Ok(())
    }

    /// Overrides the length of a paper.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if out of range or the kind has a fixed length
    /// - `InvalidState` while the item is scheduled in a session
    pub fn set_duration(&mut self, minutes: i32) -> Result<(), DomainError> {
        if self.session.is_some() {
            return Err(DomainError::invalid_state(INVALID_ITEM)
                .with_detail("reason", "unschedule the item before changing its length"));
        }
        if !self.kind.allows_custom_duration() {
            return Err(DomainError::validation("duration", INVALID_ITEM)
                .with_detail("kind", self.kind.label()));
        }
        self.duration = Self::checked_duration(minutes)?;
        self.explicit_duration = true;
        Ok(())
    }

    /// Links this item to `session`.
    ///
    /// Only records the link; [`Session::add_item`] is what lists the item.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if already assigned or the session lacks capacity
    pub fn assign(&mut self, session: &Session) -> Result<(), DomainError> {
        if self.session.is_some() {
            return Err(DomainError::invalid_state(CANNOT_ADD_ITEM)
                .with_detail("reason", "item is already scheduled"));
        }
        if self.duration.value() > session.remaining_capacity() {
            return Err(DomainError::invalid_state(CANNOT_ADD_ITEM)
                .with_detail("reason", "session lacks capacity"));
        }
        self.session = Some(session.id());
        Ok(())
    }

    /// Clears the session link. Safe to call when not assigned.
    pub fn unassign(&mut self) {
        self.session = None;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn checked_text(field: &str, value: String) -> Result<String, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::validation(field, INVALID_ITEM));
        }
        if value.contains(RESERVED_CHARS) {
            return Err(DomainError::validation(field, INVALID_ITEM)
                .with_detail("reason", "must not contain '|' or line breaks"));
        }
        Ok(value)
    }

    fn checked_duration(minutes: i32) -> Result<Minutes, DomainError> {
        Minutes::try_new(minutes).map_err(|e| {
            DomainError::validation(e.field(), INVALID_ITEM).with_detail("reason", e.to_string())
        })
    }
}

impl OrderedEntry for AcceptedItem {
    /// Authors, then title, ignoring case.
    fn order(&self, other: &Self) -> Ordering {
        self.authors
            .to_lowercase()
            .cmp(&other.authors.to_lowercase())
            .then_with(|| self.title.to_lowercase().cmp(&other.title.to_lowercase()))
    }

    /// Exact authors and title.
    fn same_entry(&self, other: &Self) -> bool {
        self.authors == other.authors && self.title == other.title
    }
}

impl fmt::Display for AcceptedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.kind.label(), self.authors, self.title)?;
        if self.explicit_duration {
            write!(f, "|{}", self.duration)?;
        }
        Ok(())
    }
}
