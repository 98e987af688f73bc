//! Error types for task domain parsing.

use thiserror::Error;

/// Error returned while parsing task states from persistence or filters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task state: {0}")]
pub struct ParseTaskStateError(pub String);
