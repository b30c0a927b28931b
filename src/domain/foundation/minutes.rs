//! Minutes value object (5-120 scale) shared by sessions and accepted items.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A duration in whole minutes between [`Minutes::MIN`] and [`Minutes::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Minutes(i32);

impl Minutes {
    /// Shortest allowed duration.
    pub const MIN: i32 = 5;

    /// Longest allowed duration.
    pub const MAX: i32 = 120;

    /// Creates a Minutes value, returning error if out of range.
    pub fn try_new(value: i32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "duration",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Parses a trimmed decimal string into Minutes.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let value = raw
            .trim()
            .parse::<i32>()
            .map_err(|e| ValidationError::invalid_format("duration", e.to_string()))?;
        Self::try_new(value)
    }

    /// Returns the value as i32.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Minutes {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Minutes> for i32 {
    fn from(minutes: Minutes) -> Self {
        minutes.0
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
