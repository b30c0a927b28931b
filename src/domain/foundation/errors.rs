//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Uniqueness violations (session name, authors + title)
    DuplicateEntry,

    // Position outside the current bounds
    IndexOutOfBounds,

    // Assignment and capacity violations
    InvalidState,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::DuplicateEntry => "DUPLICATE_ENTRY",
            ErrorCode::IndexOutOfBounds => "INDEX_OUT_OF_BOUNDS",
            ErrorCode::InvalidState => "INVALID_STATE",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// The message is what a caller shows to the user; the code is what a
/// caller matches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Creates a uniqueness violation error.
    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DuplicateEntry, message)
    }

    /// Creates an index error for a position outside `[0, len)`.
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::new(ErrorCode::IndexOutOfBounds, "Invalid index.")
            .with_detail("index", index.to_string())
            .with_detail("len", len.to_string())
    }

    /// Creates an assignment or capacity violation error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidState, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns the user-facing message without the code prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this error carries the given code.
    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("authors");
        assert_eq!(format!("{}", err), "Field 'authors' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("duration", 5, 120, 150);
        assert_eq!(
            format!("{}", err),
            "Field 'duration' must be between 5 and 120, got 150"
        );
    }

    #[test]
    fn validation_error_reports_its_field() {
        let err = ValidationError::invalid_format("duration", "not a number");
        assert_eq!(err.field(), "duration");
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::invalid_state("Cannot add item.");
        assert_eq!(format!("{}", err), "[INVALID_STATE] Cannot add item.");
        assert_eq!(err.message(), "Cannot add item.");
    }

    #[test]
    fn index_error_records_position_and_length() {
        let err = DomainError::index_out_of_bounds(4, 2);

        assert!(err.is(ErrorCode::IndexOutOfBounds));
        assert_eq!(err.details.get("index"), Some(&"4".to_string()));
        assert_eq!(err.details.get("len"), Some(&"2".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::DuplicateEntry), "DUPLICATE_ENTRY");
        assert_eq!(format!("{}", ErrorCode::IndexOutOfBounds), "INDEX_OUT_OF_BOUNDS");
    }
}
