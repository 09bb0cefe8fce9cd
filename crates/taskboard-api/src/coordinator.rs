//! Bridges confirmed local moves to the task service.
//!
//! The store is updated optimistically before `dispatch` is called; the
//! coordinator only owns the background confirmation. Each drop fires an
//! independent request; moves of different tasks are not serialized, and
//! repeated moves of the same task are not debounced. Outcomes are
//! delivered over a channel so the composition root can confirm or revert
//! the optimistic state on its own event loop.

use std::sync::Arc;

use taskboard_core::TaskboardResult;
use taskboard_domain::{ColumnId, Task, TaskId};
use tokio::sync::mpsc;

use crate::traits::TaskService;

/// Result of one move confirmation request.
#[derive(Debug)]
pub struct MoveOutcome {
    pub task_id: TaskId,
    pub to_column_id: ColumnId,
    pub result: TaskboardResult<Task>,
}

pub struct MoveCoordinator {
    service: Arc<dyn TaskService>,
    outcome_tx: mpsc::UnboundedSender<MoveOutcome>,
}

impl MoveCoordinator {
    pub fn new(service: Arc<dyn TaskService>) -> (Self, mpsc::UnboundedReceiver<MoveOutcome>) {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        (
            Self {
                service,
                outcome_tx,
            },
            outcome_rx,
        )
    }

    /// Fire the background confirmation for an already-applied local move.
    ///
    /// Never blocks. If the receiver is gone (session ending) the outcome
    /// is dropped; the request itself is not cancelled.
    pub fn dispatch(&self, task_id: TaskId, to_column_id: ColumnId) {
        tracing::debug!("Confirming move of {} to {}", task_id, to_column_id);
        let service = Arc::clone(&self.service);
        let outcome_tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = service.move_task(&task_id, &to_column_id).await;
            if let Err(ref e) = result {
                tracing::warn!("Move confirmation for {} failed: {}", task_id, e);
            }
            let _ = outcome_tx.send(MoveOutcome {
                task_id,
                to_column_id,
                result,
            });
        });
    }
}
