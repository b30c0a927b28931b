//! Session domain module.
//!
//! A session is a named, duration-bounded slot in the conference schedule.
//! It lists the items scheduled into it in a user-controlled running order.

mod aggregate;

pub use aggregate::{ScheduledItem, Session, INVALID_SESSION};
