pub mod archive;
pub mod board;
pub mod column;
pub mod drag;
pub mod store;
pub mod task;
pub mod transition;

pub use archive::ArchivedTaskGroup;
pub use board::{Board, BoardId};
pub use column::{Column, ColumnId};
pub use drag::{DragController, DragState, DropTarget, MoveIntent};
pub use store::{MoveReceipt, TaskStore};
pub use task::{Task, TaskDraft, TaskId, TaskPriority, TaskStatus};
pub use transition::TransitionTable;
