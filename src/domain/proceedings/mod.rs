//! Proceedings module - accepted items and their kinds.

mod accepted_item;
mod item_kind;

pub use accepted_item::{AcceptedItem, CANNOT_ADD_ITEM, INVALID_ITEM};
pub use item_kind::ItemKind;
