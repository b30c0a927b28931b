//! OrderedUniqueSet - sorted, duplicate-rejecting container.
//!
//! Entries are kept in ascending order under [`OrderedEntry::order`]. The
//! duplicate check uses [`OrderedEntry::same_entry`], which may be stricter
//! than order equality: two accepted items whose authors differ only in case
//! sort together but are still distinct entries.

use std::cmp::Ordering;

use crate::domain::foundation::DomainError;

/// Ordering and identity contract for entries of an [`OrderedUniqueSet`].
pub trait OrderedEntry {
    /// Total order used to position entries.
    fn order(&self, other: &Self) -> Ordering;

    /// True if `other` must not coexist with `self` in the same set.
    fn same_entry(&self, other: &Self) -> bool;
}

/// Ascending, duplicate-free sequence of entries.
///
/// # Invariants
///
/// - `entries` is sorted ascending by `OrderedEntry::order`
/// - no two entries satisfy `same_entry`
#[derive(Debug, Clone)]
pub struct OrderedUniqueSet<T> {
    entries: Vec<T>,
}

impl<T> OrderedUniqueSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` if `index >= len`
    pub fn get(&self, index: usize) -> Result<&T, DomainError> {
        self.entries
            .get(index)
            .ok_or_else(|| DomainError::index_out_of_bounds(index, self.entries.len()))
    }

    /// Mutable access for fields that do not take part in ordering.
    ///
    /// Callers must not change anything `order` or `same_entry` reads.
    pub(crate) fn get_mut(&mut self, index: usize) -> Result<&mut T, DomainError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or_else(|| DomainError::index_out_of_bounds(index, len))
    }

    /// Mutable iteration, under the same restriction as [`Self::get_mut`].
    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.entries.iter_mut()
    }

    /// Removes and returns the entry at `index`.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` if `index >= len`
    pub fn remove_at(&mut self, index: usize) -> Result<T, DomainError> {
        if index >= self.entries.len() {
            return Err(DomainError::index_out_of_bounds(index, self.entries.len()));
        }
        Ok(self.entries.remove(index))
    }

    /// Returns the index of the first entry matching `predicate`.
    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.entries.iter().position(predicate)
    }

    /// Iterates entries in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T: OrderedEntry> OrderedUniqueSet<T> {
    /// Inserts `value` in order and returns the index it landed at.
    ///
    /// The value goes before the first entry that orders above it, so it
    /// lands after any entries it ties with.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntry` if an entry with `same_entry` already exists
    pub fn add(&mut self, value: T) -> Result<usize, DomainError> {
        if self.contains(&value) {
            return Err(DomainError::duplicate("Cannot add duplicate element."));
        }
        let index = self
            .entries
            .partition_point(|existing| existing.order(&value) != Ordering::Greater);
        self.entries.insert(index, value);
        Ok(index)
    }

    /// Returns the index of the entry that is the same as `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.entries.iter().position(|e| e.same_entry(value))
    }

    /// Returns true if an entry that is the same as `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T> Default for OrderedUniqueSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a OrderedUniqueSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
