//! In-memory repository for tests and database-free deployments.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Page, PersistedTaskData, Task, TaskDraft, TaskId, TaskSearchCriteria},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Tasks are kept in an id-ordered map so search results come back in
/// creation order without an explicit sort.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_criteria(task: &Task, criteria: &TaskSearchCriteria) -> bool {
    if let Some(state) = criteria.state()
        && task.state() != state
    {
        return false;
    }
    if let Some(text) = criteria.text() {
        let needle = text.to_lowercase();
        let in_title = task.title().to_lowercase().contains(&needle);
        let in_description = task.description().to_lowercase().contains(&needle);
        if !in_title && !in_description {
            return false;
        }
    }
    true
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, draft: TaskDraft) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.last_id += 1;
        let task = Task::from_persisted(PersistedTaskData {
            id: TaskId::new(state.last_id),
            title: draft.title,
            description: draft.description,
            state: draft.state,
            created_at: draft.created_at,
            updated_at: draft.updated_at,
        });
        state.tasks.insert(task.id(), task.clone());
        Ok(task)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn search(&self, criteria: &TaskSearchCriteria) -> TaskRepositoryResult<Page<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let matching: Vec<&Task> = state
            .tasks
            .values()
            .filter(|task| matches_criteria(task, criteria))
            .collect();
        let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);
        let offset = usize::try_from(criteria.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(criteria.size()).unwrap_or(usize::MAX);
        let items: Vec<Task> = matching
            .into_iter()
            .skip(offset)
            .take(size)
            .cloned()
            .collect();
        Ok(Page::new(items, criteria.page(), criteria.size(), total))
    }
}
