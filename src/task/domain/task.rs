//! Task aggregate for the to-do list.

use super::TaskId;
use serde::{Deserialize, Serialize};

/// One to-do item: identifier, description, completion flag.
///
/// The description is user-supplied and carried verbatim; no length or
/// content validation is applied. Completion defaults to `false` on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: String,
    done: bool,
}

impl Task {
    /// Reconstructs a task from stored row values.
    #[must_use]
    pub fn new(id: TaskId, description: impl Into<String>, done: bool) -> Self {
        Self {
            id,
            description: description.into(),
            done,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the user-supplied description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the task is marked complete.
    #[must_use]
    pub const fn done(&self) -> bool {
        self.done
    }
}
