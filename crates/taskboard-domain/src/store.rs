//! Single-owner, in-memory store for one board's column/task graph.
//!
//! The store is the only mutable state in the subsystem. All operations are
//! synchronous and total: either the structural invariants hold before and
//! after, or the operation is a no-op. Network reconciliation is layered on
//! top via the begin/confirm/revert move lifecycle.
//!
//! Invariants:
//! - every task lives in exactly one column, with no duplicate ids;
//! - a task's `status` always equals its column's semantic status.

use std::collections::HashMap;

use taskboard_core::{TaskboardError, TaskboardResult};

use crate::column::{Column, ColumnId};
use crate::task::{Task, TaskId};
use crate::transition::TransitionTable;

/// Undo information for one optimistic move, captured at `begin_move` time.
#[derive(Debug, Clone)]
pub struct MoveReceipt {
    pub task_id: TaskId,
    pub from_column_id: ColumnId,
    pub from_index: usize,
    pub from_status: crate::task::TaskStatus,
    pub to_column_id: ColumnId,
}

#[derive(Debug, Default)]
pub struct TaskStore {
    columns: Vec<Column>,
    pending: HashMap<TaskId, MoveReceipt>,
    transitions: TransitionTable,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transitions(transitions: TransitionTable) -> Self {
        Self {
            transitions,
            ..Self::default()
        }
    }

    /// Replace the entire column/task graph, e.g. after a board load.
    ///
    /// Columns are ordered by their `position`; task statuses are coerced to
    /// their column's status so the invariant holds even if the service
    /// response disagrees with itself.
    pub fn load(&mut self, mut columns: Vec<Column>) {
        columns.sort_by_key(|c| c.position);
        for column in &mut columns {
            for task in &mut column.tasks {
                if task.status != column.status {
                    tracing::debug!(
                        "Coercing task {} status to column {} on load",
                        task.id,
                        column.name
                    );
                    task.status = column.status;
                }
            }
        }
        self.columns = columns;
        self.pending.clear();
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == column_id)
    }

    /// Locate a task by scanning all columns.
    pub fn find_task(&self, task_id: &TaskId) -> Option<(&Column, usize)> {
        self.columns.iter().find_map(|column| {
            column.task_index(task_id).map(|index| (column, index))
        })
    }

    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.find_task(task_id)
            .map(|(column, index)| &column.tasks[index])
    }

    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Move a task between columns, updating its status atomically with the
    /// move. Inserts at `target_index` (clamped) or appends.
    ///
    /// Silently no-ops (returns `Ok(None)`) when the task is not found in
    /// `from_column_id` or the destination column does not exist; both
    /// indicate a stale reference rather than a user-facing condition.
    /// A transition the table forbids is a `Validation` error.
    pub fn move_task(
        &mut self,
        task_id: &TaskId,
        from_column_id: &ColumnId,
        to_column_id: &ColumnId,
        target_index: Option<usize>,
    ) -> TaskboardResult<Option<MoveReceipt>> {
        let Some(from_idx) = self.columns.iter().position(|c| &c.id == from_column_id) else {
            tracing::debug!("Move dropped: unknown source column {}", from_column_id);
            return Ok(None);
        };
        let Some(to_idx) = self.columns.iter().position(|c| &c.id == to_column_id) else {
            tracing::debug!("Move dropped: unknown destination column {}", to_column_id);
            return Ok(None);
        };
        let Some(task_idx) = self.columns[from_idx].task_index(task_id) else {
            tracing::debug!(
                "Move dropped: task {} not in column {}",
                task_id,
                from_column_id
            );
            return Ok(None);
        };

        let from_status = self.columns[from_idx].tasks[task_idx].status;
        let to_status = self.columns[to_idx].status;
        if !self.transitions.permits(from_status, to_status) {
            return Err(TaskboardError::Validation(format!(
                "transition {:?} -> {:?} is not allowed",
                from_status, to_status
            )));
        }

        let mut task = self.columns[from_idx].tasks.remove(task_idx);
        task.update_status(to_status);

        let receipt = MoveReceipt {
            task_id: task_id.clone(),
            from_column_id: from_column_id.clone(),
            from_index: task_idx,
            from_status,
            to_column_id: to_column_id.clone(),
        };

        let dest = &mut self.columns[to_idx];
        match target_index {
            Some(index) => {
                let index = index.min(dest.tasks.len());
                dest.tasks.insert(index, task);
            }
            None => dest.tasks.push(task),
        }

        Ok(Some(receipt))
    }

    /// Apply an optimistic move and tag the task pending until the task
    /// service confirms it.
    ///
    /// If the task already has a pending move, the original receipt is kept
    /// so a later revert lands on the last *confirmed* position.
    pub fn begin_move(
        &mut self,
        task_id: &TaskId,
        from_column_id: &ColumnId,
        to_column_id: &ColumnId,
        target_index: Option<usize>,
    ) -> TaskboardResult<Option<MoveReceipt>> {
        let receipt = self.move_task(task_id, from_column_id, to_column_id, target_index)?;
        if let Some(ref receipt) = receipt {
            self.pending
                .entry(task_id.clone())
                .or_insert_with(|| receipt.clone());
        }
        Ok(receipt)
    }

    /// The task service accepted the move; the optimistic state is truth.
    pub fn confirm_move(&mut self, task_id: &TaskId) -> bool {
        self.pending.remove(task_id).is_some()
    }

    /// The task service rejected the move; restore the task to its last
    /// confirmed column, position, and status.
    pub fn revert_move(&mut self, task_id: &TaskId) -> Option<MoveReceipt> {
        let receipt = self.pending.remove(task_id)?;

        let (current_col_idx, task_idx) = self.columns.iter().enumerate().find_map(|(i, c)| {
            c.task_index(task_id).map(|idx| (i, idx))
        })?;
        let home_idx = self
            .columns
            .iter()
            .position(|c| c.id == receipt.from_column_id)?;

        let mut task = self.columns[current_col_idx].tasks.remove(task_idx);
        task.update_status(receipt.from_status);

        let home = &mut self.columns[home_idx];
        let index = receipt.from_index.min(home.tasks.len());
        home.tasks.insert(index, task);

        Some(receipt)
    }

    pub fn is_pending(&self, task_id: &TaskId) -> bool {
        self.pending.contains_key(task_id)
    }

    /// Append a task to a column, coercing its status to the column's.
    pub fn add_task(&mut self, column_id: &ColumnId, mut task: Task) -> TaskboardResult<()> {
        let Some(column) = self.columns.iter_mut().find(|c| &c.id == column_id) else {
            return Err(TaskboardError::NotFound(format!("column {}", column_id)));
        };
        if task.status != column.status {
            task.status = column.status;
        }
        column.tasks.push(task);
        Ok(())
    }
}
