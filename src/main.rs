//! Taskboard server binary.
//!
//! Parses configuration from the command line and environment, picks the
//! storage backend, and serves the task API over HTTP.

use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use clap::Parser;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;

use taskboard::api::{self, AppState};
use taskboard::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::TaskRepository,
    services::TaskService,
    validation::TaskFormValidator,
};

/// Command-line options for the server binary.
#[derive(Debug, Parser)]
#[command(name = "taskboard", about = "Task management REST API", version)]
struct ServerOptions {
    /// Socket address to bind the HTTP server to.
    #[arg(long, env = "TASKBOARD_BIND", default_value = "127.0.0.1:8080")]
    bind: String,

    /// PostgreSQL connection URL; tasks are kept in memory when omitted.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let options = ServerOptions::parse();

    match options.database_url.as_deref() {
        Some(url) => {
            let manager = ConnectionManager::<PgConnection>::new(url);
            let pool = Pool::builder()
                .build(manager)
                .map_err(std::io::Error::other)?;
            log::info!("using PostgreSQL task storage");
            run_server(PostgresTaskRepository::new(pool), &options.bind).await
        }
        None => {
            log::info!("no DATABASE_URL configured, using in-memory task storage");
            run_server(InMemoryTaskRepository::new(), &options.bind).await
        }
    }
}

async fn run_server<R>(repository: R, bind: &str) -> std::io::Result<()>
where
    R: TaskRepository + 'static,
{
    let service = TaskService::new(Arc::new(repository), Arc::new(DefaultClock));
    let state = web::Data::new(AppState {
        service,
        validator: TaskFormValidator::new(),
    });
    log::info!("listening on {bind}");
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(api::configure::<R, DefaultClock>)
    })
    .bind(bind)?
    .run()
    .await
}
