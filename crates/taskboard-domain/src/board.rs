use serde::{Deserialize, Serialize};

pub type BoardId = String;

/// Session-scoped board identity. The column/task graph itself lives in the
/// `TaskStore` and is discarded when the session ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub name: String,
}

impl Board {
    pub fn new(id: impl Into<BoardId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
