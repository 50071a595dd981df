//! Board service mediating between request handlers and the task store.

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// No task row matches the requested identifier.
    #[error("no task was found with id {0}")]
    TaskNotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task-board orchestration service.
///
/// Each operation performs exactly one repository call. Failures propagate
/// as errors rather than terminating the process, so a failed statement
/// fails only the request that issued it.
pub struct TaskBoardService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskBoardService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskBoardService<R>
where
    R: TaskRepository,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns all tasks in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the listing query fails.
    pub async fn list_tasks(&self) -> TaskBoardResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }

    /// Retrieves the task to pre-fill an edit form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::TaskNotFound`] when no row matches `id`,
    /// distinguishable from [`TaskBoardError::Repository`] failures.
    pub async fn task_for_edit(&self, id: TaskId) -> TaskBoardResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskBoardError::TaskNotFound(id))
    }

    /// Creates a new task with the given description and `done = false`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the insert fails.
    pub async fn create_task(&self, description: &str) -> TaskBoardResult<()> {
        Ok(self.repository.insert(description).await?)
    }

    /// Overwrites description and completion on the task matching `id`.
    ///
    /// An identifier with no matching row is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the update statement
    /// fails.
    pub async fn update_task(
        &self,
        id: TaskId,
        description: &str,
        done: bool,
    ) -> TaskBoardResult<()> {
        let affected = self.repository.update(id, description, done).await?;
        if affected == 0 {
            warn!(%id, "update affected no rows");
        }
        Ok(())
    }

    /// Removes the task matching `id`; deleting an absent row succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the delete statement
    /// fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskBoardResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
