//! Request handlers for the task resource.
//!
//! Each handler follows the same shape: validate the form, delegate to the
//! service, project the result through a DTO transform. Handlers are generic
//! over the repository so the memory and `PostgreSQL` backends share one code
//! path.

use super::{
    dto::{PageDto, TaskDetailedDto, TaskSummaryDto},
    error::ApiError,
};
use crate::task::{
    domain::{TaskId, TaskState},
    forms::{TaskCreateForm, TaskSearchForm, TaskUpdateForm},
    ports::TaskRepository,
    services::TaskService,
    validation::TaskFormValidator,
};
use actix_web::{HttpResponse, web};
use mockable::Clock;

/// Shared per-application state handed to every handler.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Task orchestration service.
    pub service: TaskService<R, C>,
    /// Form validator.
    pub validator: TaskFormValidator,
}

/// `GET /api/task/get-by-id/{id}` — detailed projection of one task.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when the id does not exist.
pub async fn get_by_id<R, C>(
    state: web::Data<AppState<R, C>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = TaskId::new(path.into_inner());
    let task = state.into_inner().service.get_by_id(id).await?;
    Ok(HttpResponse::Ok().json(TaskDetailedDto::from(&task)))
}

/// `POST /api/task/create` — create a task from a validated form.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the form has field errors; nothing
/// is persisted in that case.
pub async fn create<R, C>(
    state: web::Data<AppState<R, C>>,
    body: web::Json<TaskCreateForm>,
) -> Result<HttpResponse, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let form = body.into_inner();
    let shared = state.into_inner();
    shared.validator.validate_create(&form)?;
    let task = shared.service.create(form).await?;
    Ok(HttpResponse::Ok().json(TaskDetailedDto::from(&task)))
}

/// `POST /api/task/update` — update a task's descriptive fields.
///
/// The completion state is never touched by this route.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for field errors and
/// [`ApiError::NotFound`] when the form's id does not exist.
pub async fn update<R, C>(
    state: web::Data<AppState<R, C>>,
    body: web::Json<TaskUpdateForm>,
) -> Result<HttpResponse, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let form = body.into_inner();
    let shared = state.into_inner();
    shared.validator.validate_update(&form)?;
    let task = shared.service.update(form).await?;
    Ok(HttpResponse::Ok().json(TaskDetailedDto::from(&task)))
}

/// `POST /api/task/mark-as-completed/{id}` — set state to DONE.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when the id does not exist.
pub async fn mark_as_completed<R, C>(
    state: web::Data<AppState<R, C>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    transition::<R, C>(state, path.into_inner(), TaskState::Done).await
}

/// `POST /api/task/mark-as-new/{id}` — set state back to NEW.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when the id does not exist.
pub async fn mark_as_new<R, C>(
    state: web::Data<AppState<R, C>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    transition::<R, C>(state, path.into_inner(), TaskState::New).await
}

/// `GET /api/task/get-all` — paged summary projections matching the search
/// form.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the search form has field errors.
pub async fn get_all<R, C>(
    state: web::Data<AppState<R, C>>,
    query: web::Query<TaskSearchForm>,
) -> Result<HttpResponse, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let form = query.into_inner();
    let shared = state.into_inner();
    let criteria = shared.validator.validate_search(&form)?;
    let page = shared.service.search(&criteria).await?;
    let dto = PageDto::from(page.map(|task| TaskSummaryDto::from(&task)));
    Ok(HttpResponse::Ok().json(dto))
}

async fn transition<R, C>(
    state: web::Data<AppState<R, C>>,
    raw_id: i64,
    target: TaskState,
) -> Result<HttpResponse, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = state
        .into_inner()
        .service
        .update_state(TaskId::new(raw_id), target)
        .await?;
    Ok(HttpResponse::Ok().json(TaskSummaryDto::from(&task)))
}
