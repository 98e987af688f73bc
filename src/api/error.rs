//! HTTP error mapping for the task API.
//!
//! The service and validator error types are translated here into the
//! response contract: 422 with the full field-error list for invalid forms,
//! 404 for missing tasks, and a generic 500 for persistence failures whose
//! cause is logged rather than leaked to the client.

use crate::task::{
    domain::TaskId,
    services::TaskServiceError,
    validation::{FieldError, ValidationErrors},
};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

/// Errors a task API handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Form validation produced field errors.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// The referenced task does not exist.
    #[error("task {0} not found")]
    NotFound(TaskId),
    /// The operation failed for reasons outside the caller's control.
    #[error("internal server error")]
    Internal(#[source] TaskServiceError),
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::NotFound(id) => Self::NotFound(id),
            other => Self::Internal(other),
        }
    }
}

/// Body of a 422 response: the full set of field errors.
#[derive(Debug, Serialize)]
struct ValidationErrorBody<'a> {
    errors: &'a [FieldError],
}

/// Body of a 404 or 500 response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Validation(errors) => HttpResponse::UnprocessableEntity().json(ValidationErrorBody {
                errors: errors.errors(),
            }),
            Self::NotFound(id) => HttpResponse::NotFound().json(ErrorBody {
                error: format!("task {id} not found"),
            }),
            Self::Internal(source) => {
                log::error!("task request failed: {source}");
                HttpResponse::InternalServerError().json(ErrorBody {
                    error: "internal server error".to_owned(),
                })
            }
        }
    }
}
