use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskId, TaskStatus};

pub type ColumnId = String;

/// One workflow bucket of the board. The nested task list is the visual
/// top-to-bottom order, authoritative for the current client session only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    pub position: i32,
    #[serde(default)]
    pub color: Option<String>,
    /// Semantic status of every task residing in this column.
    pub status: TaskStatus,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, name: impl Into<String>, position: i32, status: TaskStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            color: None,
            status,
            tasks: Vec::new(),
        }
    }

    pub fn task_index(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == task_id)
    }

    pub fn contains_task(&self, task_id: &TaskId) -> bool {
        self.task_index(task_id).is_some()
    }
}
