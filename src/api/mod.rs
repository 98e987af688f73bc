//! HTTP boundary for the task resource.
//!
//! Routes live under `/api/task` and all produce JSON. Handlers validate
//! first, then invoke the service, then project results through the DTO
//! transforms in [`dto`]; error-to-status mapping is centralized in
//! [`error`].

pub mod dto;
pub mod error;
pub mod handlers;

pub use error::ApiError;
pub use handlers::AppState;

use crate::task::ports::TaskRepository;
use actix_web::web;
use mockable::Clock;

/// Registers the task routes on an actix application.
///
/// The handlers are generic over the repository backend, so routes are
/// registered manually rather than through the route macros.
pub fn configure<R, C>(cfg: &mut web::ServiceConfig)
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    cfg.service(
        web::scope("/api/task")
            .route("/get-by-id/{id}", web::get().to(handlers::get_by_id::<R, C>))
            .route("/create", web::post().to(handlers::create::<R, C>))
            .route("/update", web::post().to(handlers::update::<R, C>))
            .route(
                "/mark-as-completed/{id}",
                web::post().to(handlers::mark_as_completed::<R, C>),
            )
            .route(
                "/mark-as-new/{id}",
                web::post().to(handlers::mark_as_new::<R, C>),
            )
            .route("/get-all", web::get().to(handlers::get_all::<R, C>)),
    );
}
