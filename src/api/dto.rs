//! Read-projection shapes for the task resource.
//!
//! DTOs are explicit, statically-typed transforms of the domain aggregate;
//! they carry no business logic.

use crate::task::domain::{Page, Task, TaskState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lightweight task projection for list views and state-change responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummaryDto {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Completion state.
    pub state: TaskState,
}

impl From<&Task> for TaskSummaryDto {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().to_owned(),
            state: task.state(),
        }
    }
}

/// Full task projection for single-resource views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetailedDto {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Completion state.
    pub state: TaskState,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskDetailedDto {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            state: task.state(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Wire shape for a page of projected items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDto<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Zero-based page number.
    pub page: u32,
    /// Requested page size.
    pub size: u32,
    /// Total number of matching records.
    pub total_elements: u64,
    /// Total number of pages at the requested size.
    pub total_pages: u64,
}

impl<T> From<Page<T>> for PageDto<T> {
    fn from(page: Page<T>) -> Self {
        let total_pages = page.total_pages();
        let total_elements = page.total_elements();
        let number = page.page();
        let size = page.size();
        Self {
            items: page.into_items(),
            page: number,
            size,
            total_elements,
            total_pages,
        }
    }
}
