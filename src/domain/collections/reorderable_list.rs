//! ReorderableList - insertion-ordered list with positional moves.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::DomainError;

/// A positional move within a [`ReorderableList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemMove {
    /// Swap with the previous element.
    Up,
    /// Swap with the next element.
    Down,
    /// Rotate to position 0.
    Front,
    /// Rotate to the last position.
    Back,
}

impl fmt::Display for ItemMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemMove::Up => "up",
            ItemMove::Down => "down",
            ItemMove::Front => "front",
            ItemMove::Back => "back",
        };
        write!(f, "{}", s)
    }
}

/// Insertion-ordered list; duplicates are allowed.
///
/// Moves at a boundary are no-ops. Every positional operation checks the
/// index first, so an out-of-range index fails even when the move itself
/// would have been a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderableList<T> {
    entries: Vec<T>,
}

impl<T> ReorderableList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends `value` at the back.
    pub fn add(&mut self, value: T) {
        self.entries.push(value);
    }

    /// Removes the element at `index`, shifting later elements down.
    pub fn remove_at(&mut self, index: usize) -> Result<T, DomainError> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Swaps the element at `index` with its predecessor.
    pub fn move_up(&mut self, index: usize) -> Result<(), DomainError> {
        self.check_index(index)?;
        if index > 0 {
            self.entries.swap(index - 1, index);
        }
        Ok(())
    }

    /// Swaps the element at `index` with its successor.
    pub fn move_down(&mut self, index: usize) -> Result<(), DomainError> {
        self.check_index(index)?;
        if index + 1 < self.entries.len() {
            self.entries.swap(index, index + 1);
        }
        Ok(())
    }

    /// Moves the element at `index` to position 0, keeping the others in order.
    pub fn move_to_front(&mut self, index: usize) -> Result<(), DomainError> {
        self.check_index(index)?;
        self.entries[..=index].rotate_right(1);
        Ok(())
    }

    /// Moves the element at `index` to the last position, keeping the others in order.
    pub fn move_to_back(&mut self, index: usize) -> Result<(), DomainError> {
        self.check_index(index)?;
        self.entries[index..].rotate_left(1);
        Ok(())
    }

    /// Applies `movement` to the element at `index` and returns where it ended up.
    pub fn apply(&mut self, index: usize, movement: ItemMove) -> Result<usize, DomainError> {
        let last = self.entries.len().saturating_sub(1);
        match movement {
            ItemMove::Up => self.move_up(index).map(|_| index.saturating_sub(1)),
            ItemMove::Down => self.move_down(index).map(|_| (index + 1).min(last)),
            ItemMove::Front => self.move_to_front(index).map(|_| 0),
            ItemMove::Back => self.move_to_back(index).map(|_| last),
        }
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, DomainError> {
        self.check_index(index)?;
        Ok(&self.entries[index])
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the index of the first element matching `predicate`.
    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.entries.iter().position(predicate)
    }

    /// Read-only forward iteration; call again to restart.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), DomainError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(DomainError::index_out_of_bounds(index, self.entries.len()))
        }
    }
}

impl<T> Default for ReorderableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over a [`ReorderableList`].
///
/// Yields shared references only; the list cannot be modified while one
/// of these is alive.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ReorderableList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
