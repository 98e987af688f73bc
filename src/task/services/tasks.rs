//! Service layer for task creation, mutation, and search.

use crate::task::{
    domain::{Page, Task, TaskDraft, TaskId, TaskSearchCriteria, TaskState},
    forms::{TaskCreateForm, TaskUpdateForm},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Applies the business rules on top of a repository: forms reaching this
/// layer have already passed validation.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has that id, or
    /// [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_by_id(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Creates a task in the [`TaskState::New`] state and returns it with
    /// its freshly assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create(&self, form: TaskCreateForm) -> TaskServiceResult<Task> {
        let draft = TaskDraft::new(form.title, form.description, &*self.clock);
        Ok(self.repository.insert(draft).await?)
    }

    /// Updates a task's descriptive fields, leaving its state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the form's id does not
    /// exist, or [`TaskServiceError::Repository`] when persistence fails.
    pub async fn update(&self, form: TaskUpdateForm) -> TaskServiceResult<Task> {
        let id = TaskId::new(form.id);
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;
        task.update_details(form.title, form.description, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Sets a task's completion state unconditionally.
    ///
    /// Re-marking a task with its current state succeeds; the operation is
    /// idempotent apart from the `updated_at` touch.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the id does not exist, or
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn update_state(&self, id: TaskId, state: TaskState) -> TaskServiceResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;
        task.set_state(state, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Returns the page of tasks matching the validated search criteria.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the query fails.
    pub async fn search(&self, criteria: &TaskSearchCriteria) -> TaskServiceResult<Page<Task>> {
        Ok(self.repository.search(criteria).await?)
    }
}
