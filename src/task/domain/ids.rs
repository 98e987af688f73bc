//! Identifier types for the task domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a task record.
///
/// Identifiers are sequential integers assigned by the repository on creation
/// and immutable thereafter. The first task created receives id 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a task identifier from a raw value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the wrapped numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
