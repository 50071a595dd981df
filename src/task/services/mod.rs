//! Application services for task-board orchestration.

mod board;

pub use board::{TaskBoardError, TaskBoardResult, TaskBoardService};
