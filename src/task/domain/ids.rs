//! Identifier types for the task domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a task row.
///
/// Identifiers are assigned by the store on insert (a `PostgreSQL` serial
/// column) and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i32);

impl TaskId {
    /// Wraps a raw row identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the wrapped row identifier.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl From<i32> for TaskId {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
