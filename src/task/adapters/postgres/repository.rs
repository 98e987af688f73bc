//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{Page, PersistedTaskData, Task, TaskDraft, TaskId, TaskSearchCriteria, TaskState},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::expression::BoxableExpression;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_types::Bool;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Boxed WHERE predicate over the tasks table.
type TaskPredicate = Box<dyn BoxableExpression<tasks::table, Pg, SqlType = Bool>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, draft: TaskDraft) -> TaskRepositoryResult<Task> {
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(to_new_row(&draft))
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let id = task.id();
        let changeset = to_changeset(task);
        self.run_blocking(move |connection| {
            let updated = diesel::update(tasks::table.filter(tasks::id.eq(id.value())))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.value()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn search(&self, criteria: &TaskSearchCriteria) -> TaskRepositoryResult<Page<Task>> {
        let owned = criteria.clone();
        self.run_blocking(move |connection| {
            let total = match search_predicate(&owned) {
                Some(predicate) => tasks::table
                    .filter(predicate)
                    .count()
                    .get_result::<i64>(connection),
                None => tasks::table.count().get_result::<i64>(connection),
            }
            .map_err(TaskRepositoryError::persistence)?;

            let offset = i64::try_from(owned.offset()).unwrap_or(i64::MAX);
            let limit = i64::from(owned.size());
            let rows = match search_predicate(&owned) {
                Some(predicate) => tasks::table
                    .filter(predicate)
                    .order(tasks::id.asc())
                    .offset(offset)
                    .limit(limit)
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection),
                None => tasks::table
                    .order(tasks::id.asc())
                    .offset(offset)
                    .limit(limit)
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection),
            }
            .map_err(TaskRepositoryError::persistence)?;

            let items = rows
                .into_iter()
                .map(row_to_task)
                .collect::<TaskRepositoryResult<Vec<Task>>>()?;
            Ok(Page::new(
                items,
                owned.page(),
                owned.size(),
                u64::try_from(total).unwrap_or(0),
            ))
        })
        .await
    }
}

/// Builds the WHERE predicate for the criteria, or `None` when unfiltered.
fn search_predicate(criteria: &TaskSearchCriteria) -> Option<TaskPredicate> {
    let mut predicate: Option<TaskPredicate> = None;
    if let Some(state) = criteria.state() {
        predicate = Some(and_predicate(
            predicate,
            Box::new(tasks::state.eq(state.as_str())),
        ));
    }
    if let Some(text) = criteria.text() {
        let pattern = like_pattern(text);
        predicate = Some(and_predicate(
            predicate,
            Box::new(
                tasks::title
                    .ilike(pattern.clone())
                    .or(tasks::description.ilike(pattern)),
            ),
        ));
    }
    predicate
}

fn and_predicate(current: Option<TaskPredicate>, next: TaskPredicate) -> TaskPredicate {
    if let Some(existing) = current {
        return Box::new(existing.and(next));
    }
    next
}

/// Wraps text in `%` wildcards, escaping the characters `LIKE` treats
/// specially.
fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for ch in text.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn to_new_row(draft: &TaskDraft) -> NewTaskRow {
    NewTaskRow {
        title: draft.title.clone(),
        description: draft.description.clone(),
        state: draft.state.as_str().to_owned(),
        created_at: draft.created_at,
        updated_at: draft.updated_at,
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        state: task.state().as_str().to_owned(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        state: persisted_state,
        created_at,
        updated_at,
    } = row;

    let state =
        TaskState::try_from(persisted_state.as_str()).map_err(TaskRepositoryError::persistence)?;
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title,
        description,
        state,
        created_at,
        updated_at,
    }))
}
