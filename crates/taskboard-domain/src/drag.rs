//! Ephemeral drag-gesture state.
//!
//! Two states, two transitions: `Idle -> Dragging` on pickup and
//! `Dragging -> Idle` on drop. The controller never mutates the store; a
//! completed drop resolves to a `MoveIntent` for the caller to execute.
//! Any input layer able to report (active task, hovered target) pairs can
//! drive it: keyboard in the TUI, a pointer elsewhere.

use crate::column::ColumnId;
use crate::store::TaskStore;
use crate::task::TaskId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        task_id: TaskId,
    },
}

/// Where a drop landed: a column body, or a task inside a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Column(ColumnId),
    Task(TaskId),
}

/// A resolved drop, ready to be applied to the store and confirmed with the
/// task service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveIntent {
    pub task_id: TaskId,
    pub from_column_id: ColumnId,
    pub to_column_id: ColumnId,
    /// Insertion position inside the destination column; `None` appends.
    pub target_index: Option<usize>,
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn active_task(&self) -> Option<&TaskId> {
        match &self.state {
            DragState::Dragging { task_id } => Some(task_id),
            DragState::Idle => None,
        }
    }

    pub fn drag_start(&mut self, task_id: TaskId) {
        self.state = DragState::Dragging { task_id };
    }

    /// Complete the gesture. Always resolves to `Idle`.
    ///
    /// Returns the move to perform, or `None` when there is nothing to do:
    /// no active task, no drop target, or a stale reference the store can no
    /// longer resolve.
    pub fn drag_end(&mut self, over: Option<DropTarget>, store: &TaskStore) -> Option<MoveIntent> {
        let state = std::mem::take(&mut self.state);
        let DragState::Dragging { task_id } = state else {
            return None;
        };
        let over = over?;

        let Some((source_column, _)) = store.find_task(&task_id) else {
            tracing::debug!("Drop ignored: active task {} not on the board", task_id);
            return None;
        };
        let from_column_id = source_column.id.clone();

        let (to_column_id, target_index) = match over {
            DropTarget::Column(column_id) => {
                store.column(&column_id)?;
                (column_id, None)
            }
            DropTarget::Task(over_task_id) => {
                let (column, index) = store.find_task(&over_task_id)?;
                (column.id.clone(), Some(index))
            }
        };

        Some(MoveIntent {
            task_id,
            from_column_id,
            to_column_id,
            target_index,
        })
    }
}
