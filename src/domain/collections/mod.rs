//! Ordered containers used by the conference aggregate.
//!
//! - `OrderedUniqueSet` - sorted, duplicate-rejecting (sessions, the item pool)
//! - `ReorderableList` - insertion-ordered, user-reorderable (items within a session)

mod ordered_unique_set;
mod reorderable_list;

pub use ordered_unique_set::{OrderedEntry, OrderedUniqueSet};
pub use reorderable_list::{ItemMove, Iter, ReorderableList};
