//! Error types surfaced at the HTTP boundary.

use super::templates::RenderError;
use crate::task::services::TaskBoardError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Errors raised while handling a single request.
///
/// Every variant maps to a server-error response carrying the underlying
/// message; a missing task row travels the same path and is reported with
/// a server-error status rather than a 404.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Board operation failed.
    #[error(transparent)]
    Board(#[from] TaskBoardError),

    /// Template rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Errors raised while binding or serving the HTTP listener.
#[derive(Debug, Error)]
#[error("http server error: {0}")]
pub struct ServeError(#[from] std::io::Error);
