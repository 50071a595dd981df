//! In-memory repository for task tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are assigned from an atomic counter, mirroring the serial
/// column's guarantee that concurrent inserts never collide. Listing yields
/// rows in identifier order.
#[derive(Debug)]
pub struct InMemoryTaskRepository {
    next_id: AtomicI32,
    tasks: Arc<RwLock<BTreeMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicI32::new(1),
            tasks: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(lock_poisoned)?;
        Ok(tasks.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(lock_poisoned)?;
        Ok(tasks.get(&id).cloned())
    }

    async fn insert(&self, description: &str) -> TaskRepositoryResult<()> {
        let id = TaskId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut tasks = self.tasks.write().map_err(lock_poisoned)?;
        tasks.insert(id, Task::new(id, description, false));
        Ok(())
    }

    async fn update(
        &self,
        id: TaskId,
        description: &str,
        done: bool,
    ) -> TaskRepositoryResult<usize> {
        let mut tasks = self.tasks.write().map_err(lock_poisoned)?;
        if tasks.contains_key(&id) {
            tasks.insert(id, Task::new(id, description, done));
            Ok(1)
        } else {
            Ok(0)
        }
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(lock_poisoned)?;
        tasks.remove(&id);
        Ok(())
    }
}
