//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the conference domain.

mod errors;
mod ids;
mod minutes;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ItemId, SessionId};
pub use minutes::Minutes;
