//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, durations, errors)
//! - `collections` - Sorted unique set and reorderable list
//! - `proceedings` - Accepted items and their kinds
//! - `session` - Timed sessions and their running order
//! - `conference` - Conference aggregate and read projections

pub mod collections;
pub mod conference;
pub mod foundation;
pub mod proceedings;
pub mod session;
