use std::collections::BTreeMap;

use async_trait::async_trait;
use taskboard_core::TaskboardResult;
use taskboard_domain::{Column, Task, TaskDraft};

/// The external task service: the durable owner of record for boards,
/// columns, and tasks. Any backend honoring this contract is substitutable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Columns for one board, with nested task lists in visual order.
    async fn fetch_columns(&self, board_id: &str) -> TaskboardResult<Vec<Column>>;

    /// Tasks the service aged out of To Do, keyed by `YYYY-MM-DD` day.
    async fn fetch_archive(&self) -> TaskboardResult<BTreeMap<String, Vec<Task>>>;

    /// Create a task in a column; the service assigns the id.
    async fn create_task(&self, column_id: &str, draft: &TaskDraft) -> TaskboardResult<Task>;

    /// Persist a task's new column; returns the updated task.
    async fn move_task(&self, task_id: &str, column_id: &str) -> TaskboardResult<Task>;
}

/// External text-generation collaborator used to pre-fill task
/// descriptions. Output is advisory text, inserted verbatim.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    async fn generate<'a>(&self, title: &str, context: Option<&'a str>)
        -> TaskboardResult<String>;
}
