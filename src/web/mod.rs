//! HTTP surface: router construction and the serve loop.
//!
//! Routes (method, path → behaviour):
//!
//! - `GET /` → home page
//! - `GET /tasks` → list fragment
//! - `GET /getnewtaskform` → empty add-form fragment
//! - `POST /tasks` → create, then list fragment
//! - `GET /gettaskupdateform/{id}` → pre-filled edit form
//! - `PUT|POST /tasks/{id}` → update, then list fragment
//! - `DELETE /tasks/{id}` → delete, then list fragment

pub mod error;
pub mod handlers;
pub mod templates;

#[cfg(test)]
mod tests;

use axum::Router;
use axum::routing::{get, put};
use std::net::SocketAddr;
use tracing::{error, info};

use self::error::ServeError;
use self::handlers::AppState;
use crate::task::ports::TaskRepository;

/// Builds the router over explicitly injected dependencies.
///
/// Dispatch and path-variable extraction are delegated entirely to axum;
/// no custom routing logic exists beyond this table.
pub fn build_router<R>(state: AppState<R>) -> Router
where
    R: TaskRepository + 'static,
{
    Router::new()
        .route("/", get(handlers::home::<R>))
        .route(
            "/tasks",
            get(handlers::list_tasks::<R>).post(handlers::create_task::<R>),
        )
        .route("/getnewtaskform", get(handlers::new_task_form::<R>))
        .route(
            "/gettaskupdateform/{id}",
            get(handlers::edit_task_form::<R>),
        )
        .route(
            "/tasks/{id}",
            put(handlers::update_task::<R>)
                .post(handlers::update_task::<R>)
                .delete(handlers::delete_task::<R>),
        )
        .with_state(state)
}

/// Binds `addr` and serves the task board until shutdown is requested.
///
/// The lifecycle is init → serve-many-requests → graceful shutdown; when
/// the serve loop returns, dropping the injected state releases the
/// connection pool.
///
/// # Errors
///
/// Returns [`ServeError`] when binding the listener or serving fails.
pub async fn serve<R>(addr: SocketAddr, state: AppState<R>) -> Result<(), ServeError>
where
    R: TaskRepository + 'static,
{
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "task board listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to install shutdown handler");
    }
}
