//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the board
//! service.

pub mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

#[cfg(test)]
pub use repository::MockTaskRepository;
