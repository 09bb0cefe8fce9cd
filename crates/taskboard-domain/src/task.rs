use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskboard_core::{TaskboardError, TaskboardResult};

/// Opaque server-assigned identifier, stable for the task's lifetime.
pub type TaskId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    InReview,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::InReview,
        TaskStatus::Done,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::InReview => "In Review",
            Self::Done => "Done",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub todo_added_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn update_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.due_date {
            Some(due) => due < now && self.status != TaskStatus::Done,
            None => false,
        }
    }
}

/// Validated intake for task creation. The server assigns the id and
/// timestamps; new tasks always enter the To Do column.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: TaskPriority,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> TaskboardResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TaskboardError::Validation(
                "task title must not be empty".to_string(),
            ));
        }
        Ok(Self {
            title,
            description: None,
            priority: TaskPriority::Medium,
        })
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// Test fixture shared across the crate's unit tests.
#[cfg(test)]
pub(crate) fn sample_task(id: &str, title: &str, status: TaskStatus) -> Task {
    let now = Utc::now();
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        priority: TaskPriority::Medium,
        status,
        tags: Vec::new(),
        due_date: None,
        assignees: Vec::new(),
        archived_at: None,
        todo_added_at: None,
        created_at: now,
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_draft_rejects_blank_title() {
        assert!(TaskDraft::new("").is_err());
        assert!(TaskDraft::new("   ").is_err());
        assert!(TaskDraft::new("Write spec").is_ok());
    }

    #[test]
    fn test_draft_defaults_to_medium_priority() {
        let draft = TaskDraft::new("Write spec").unwrap();
        assert_eq!(draft.priority, TaskPriority::Medium);
        assert!(draft.description.is_none());
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        let back: TaskStatus = serde_json::from_str("\"IN_REVIEW\"").unwrap();
        assert_eq!(back, TaskStatus::InReview);
    }

    #[test]
    fn test_priority_wire_format() {
        let json = serde_json::to_string(&TaskPriority::Urgent).unwrap();
        assert_eq!(json, "\"URGENT\"");
    }

    #[test]
    fn test_task_deserializes_with_missing_optional_fields() {
        let json = r#"{
            "id": "t-1",
            "title": "Write spec",
            "priority": "HIGH",
            "status": "TODO",
            "createdAt": "2026-08-01T10:00:00Z",
            "updatedAt": "2026-08-01T10:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "t-1");
        assert!(task.tags.is_empty());
        assert!(task.due_date.is_none());
        assert!(task.todo_added_at.is_none());
    }

    #[test]
    fn test_is_overdue() {
        let now = Utc::now();
        let mut task = sample_task("t-1", "Write spec", TaskStatus::InProgress);
        assert!(!task.is_overdue(now));

        task.due_date = Some(now - Duration::hours(1));
        assert!(task.is_overdue(now));

        task.update_status(TaskStatus::Done);
        assert!(!task.is_overdue(now));
    }
}
