//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every operation issues exactly one statement against the underlying
/// store. Absent rows are reported through `Option` values and affected-row
/// counts rather than errors; the service layer decides which of those are
/// user-visible conditions.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns all task rows, in whatever order the storage yields them.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by row identifier.
    ///
    /// Returns `None` when no row matches.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Creates a new task with the given description and `done = false`.
    ///
    /// The store assigns the identifier.
    async fn insert(&self, description: &str) -> TaskRepositoryResult<()>;

    /// Overwrites description and completion on the row matching `id`.
    ///
    /// Returns the number of rows affected; `0` means the identifier did
    /// not exist.
    async fn update(
        &self,
        id: TaskId,
        description: &str,
        done: bool,
    ) -> TaskRepositoryResult<usize>;

    /// Removes the row matching `id`.
    ///
    /// Deleting an absent identifier is not an error.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure: connection checkout, statement execution,
    /// or row decoding.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
