//! Server binary for the task board.
//!
//! Parses startup configuration from flags or environment variables, builds
//! the connection pool and the compiled template set, wires them into the
//! router, and serves until a shutdown signal arrives. All dependencies are
//! constructed here and injected; nothing else in the crate reaches for
//! process-wide state.

use clap::Parser;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use std::net::SocketAddr;
use std::sync::Arc;
use taskboard::config::ServerConfig;
use taskboard::task::adapters::postgres::{PostgresTaskRepository, TaskPgPool};
use taskboard::task::services::TaskBoardService;
use taskboard::web::error::ServeError;
use taskboard::web::handlers::AppState;
use taskboard::web::serve;
use taskboard::web::templates::{RenderError, TemplateEngine};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "taskboard-server", about = "Server-rendered task-list manager", version)]
struct Args {
    /// PostgreSQL connection URL for the tasks table
    #[arg(long, env = "TASKBOARD_DATABASE_URL")]
    database_url: String,

    /// Address the HTTP server binds
    #[arg(long, env = "TASKBOARD_BIND", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Log filter directive (trace, debug, info, warn, error)
    #[arg(long, env = "TASKBOARD_LOG", default_value = "info")]
    log: String,
}

/// Errors that can occur during server startup and serving.
#[derive(Debug, Error)]
enum ServerError {
    #[error("invalid log filter '{filter}': {source}")]
    LogFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("failed to build database pool: {0}")]
    Pool(#[source] diesel::r2d2::PoolError),
    #[error("failed to compile templates: {0}")]
    Templates(#[from] RenderError),
    #[error(transparent)]
    Serve(#[from] ServeError),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let args = Args::parse();
    init_tracing(&args.log)?;

    let config = ServerConfig::new(args.database_url, args.bind);
    let pool = build_pool(&config.database_url)?;
    let repository = PostgresTaskRepository::new(pool);
    let state = AppState {
        board: TaskBoardService::new(Arc::new(repository)),
        templates: Arc::new(TemplateEngine::new()?),
    };

    serve(config.bind_addr, state).await?;
    Ok(())
}

fn init_tracing(directive: &str) -> Result<(), ServerError> {
    let filter = EnvFilter::try_new(directive).map_err(|source| ServerError::LogFilter {
        filter: directive.to_owned(),
        source,
    })?;
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();
    Ok(())
}

fn build_pool(database_url: &str) -> Result<TaskPgPool, ServerError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder().build(manager).map_err(ServerError::Pool)
}
