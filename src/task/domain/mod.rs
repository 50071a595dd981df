//! Domain model for the task list.
//!
//! The task domain models to-do rows and the lenient form-level completion
//! flag while keeping all infrastructure concerns outside of the domain
//! boundary.

mod flag;
mod ids;
mod task;

pub use flag::DoneFlag;
pub use ids::TaskId;
pub use task::Task;
