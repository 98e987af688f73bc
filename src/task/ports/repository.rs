//! Repository port for task persistence, lookup, and search.

use crate::task::domain::{Page, Task, TaskDraft, TaskId, TaskSearchCriteria};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persists a draft, allocating the next sequential identifier, and
    /// returns the stored task.
    async fn insert(&self, draft: TaskDraft) -> TaskRepositoryResult<Task>;

    /// Persists changes to an existing task (descriptive fields, state,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the page of tasks matching the criteria, ordered by ascending
    /// identifier, together with the total match count.
    async fn search(&self, criteria: &TaskSearchCriteria) -> TaskRepositoryResult<Page<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
