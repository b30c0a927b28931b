//! Conference domain module.
//!
//! The conference aggregate ties sessions and the accepted item pool
//! together and exposes tabular projections for display.

mod aggregate;
mod projections;

pub use aggregate::{Conference, CANNOT_ADD_SESSION};
pub use projections::{ItemRow, ScheduledItemRow, SessionRow};
