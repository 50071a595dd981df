//! Diesel row models for task persistence.

use super::schema::tasks;
use crate::task::domain::{Task, TaskId};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Row identifier.
    pub id: i32,
    /// User-supplied description.
    pub task: String,
    /// Completion flag.
    pub done: bool,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self::new(TaskId::new(row.id), row.task, row.done)
    }
}

/// Insert model for task records.
///
/// The identifier column is omitted so the database assigns it.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// User-supplied description.
    pub task: String,
    /// Completion flag, always `false` for new rows.
    pub done: bool,
}
