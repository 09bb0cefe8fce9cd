//! Explicit status-transition table, consulted on every move.
//!
//! A task's status is derived from the column holding it, so a move is a
//! status transition. The table makes the allowed transitions an explicit,
//! inspectable map instead of an implicit consequence of column identity.

use std::collections::HashSet;

use crate::task::TaskStatus;

#[derive(Debug, Clone)]
pub struct TransitionTable {
    denied: HashSet<(TaskStatus, TaskStatus)>,
}

impl Default for TransitionTable {
    /// Board semantics: tasks move freely between any pair of columns,
    /// including reinsertion into the same column.
    fn default() -> Self {
        Self {
            denied: HashSet::new(),
        }
    }
}

impl TransitionTable {
    pub fn permissive() -> Self {
        Self::default()
    }

    pub fn deny(mut self, from: TaskStatus, to: TaskStatus) -> Self {
        self.denied.insert((from, to));
        self
    }

    pub fn permits(&self, from: TaskStatus, to: TaskStatus) -> bool {
        !self.denied.contains(&(from, to))
    }

    /// Statuses a task in `from` may move to, in board order.
    pub fn allowed_from(&self, from: TaskStatus) -> Vec<TaskStatus> {
        TaskStatus::ALL
            .into_iter()
            .filter(|to| self.permits(from, *to))
            .collect()
    }
}
