//! In-memory state for the dashboard's interactive widgets.
//!
//! - [`todo::TodoList`]: the dashboard to-do list
//! - [`board::TaskBoard`]: assignments and tests on the Tasks view

pub mod board;
pub mod todo;

use core_types::WorkKind;
use thiserror::Error;

pub use board::TaskBoard;
pub use todo::TodoList;

/// Errors from planner operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error("Task title is empty")]
    EmptyTitle,

    #[error("Invalid due date: {0}")]
    InvalidDueDate(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("{kind:?} not found: {id}")]
    WorkNotFound { kind: WorkKind, id: String },
}

/// Result type for planner operations.
pub type Result<T> = std::result::Result<T, PlannerError>;
