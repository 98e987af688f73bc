//! Input payloads for task creation, update, and search.
//!
//! Forms deserialize straight from request bodies and query strings. Text
//! fields default to empty when omitted so that the validator can report
//! them as blank field errors instead of the framework rejecting the body
//! outright.

use serde::{Deserialize, Serialize};

/// Payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCreateForm {
    /// Task title; required, non-blank.
    #[serde(default)]
    pub title: String,
    /// Task description; required, non-blank.
    #[serde(default)]
    pub description: String,
}

/// Payload for updating a task's descriptive fields.
///
/// The completion state is never part of this form; it is changed only
/// through the dedicated state-transition endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdateForm {
    /// Target task identifier.
    #[serde(default)]
    pub id: i64,
    /// Replacement title; required, non-blank.
    #[serde(default)]
    pub title: String,
    /// Replacement description; required, non-blank.
    #[serde(default)]
    pub description: String,
}

/// Query parameters for the task listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSearchForm {
    /// Zero-based page number; defaults to the first page.
    pub page: Option<u32>,
    /// Page size; defaults to the configured size when omitted.
    pub size: Option<u32>,
    /// Completion-state filter (`NEW` or `DONE`, case-insensitive).
    pub state: Option<String>,
    /// Case-insensitive substring filter over title and description.
    pub text: Option<String>,
}
