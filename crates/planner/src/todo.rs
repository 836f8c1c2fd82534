//! The dashboard to-do list.

use chrono::NaiveDate;
use core_types::{Task, parse_input_date};

use crate::{PlannerError, Result};

/// An ordered, in-memory list of to-do items.
///
/// Items keep insertion order. Ids come from a counter local to the list,
/// so they stay unique even after deletions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TodoList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new item.
    ///
    /// A blank title is rejected. A missing or empty `due_date` falls back
    /// to `today`; anything else must be `YYYY-MM-DD`.
    pub fn add(&mut self, title: &str, due_date: Option<&str>, today: NaiveDate) -> Result<&Task> {
        if title.trim().is_empty() {
            log::debug!("Ignoring to-do with blank title");
            return Err(PlannerError::EmptyTitle);
        }

        let due_date = match due_date.map(str::trim).filter(|d| !d.is_empty()) {
            Some(raw) => parse_input_date(raw).ok_or_else(|| {
                log::warn!("Rejecting to-do with unparseable due date {raw:?}");
                PlannerError::InvalidDueDate(raw.to_string())
            })?,
            None => today,
        };

        self.next_id += 1;
        let task = Task::new(self.next_id.to_string(), title.to_string(), due_date);
        log::debug!("Added to-do {} due {}", task.id, task.due_date);

        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Flip the completed flag of one item. Returns the new flag.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| PlannerError::TaskNotFound(id.to_string()))?;
        task.toggle();
        Ok(task.completed)
    }

    /// Remove one item, keeping the order of the rest.
    pub fn delete(&mut self, id: &str) -> Result<Task> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| PlannerError::TaskNotFound(id.to_string()))?;
        Ok(self.tasks.remove(idx))
    }
}
