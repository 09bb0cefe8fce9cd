use std::sync::Arc;

use serde::Serialize;
use taskboard_api::{describe_or_fallback, DescriptionGenerator, HttpTaskService, TaskService};
use taskboard_domain::{ArchivedTaskGroup, Task, TaskDraft};

use crate::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ColumnSummary {
    id: String,
    name: String,
    status: taskboard_domain::TaskStatus,
    tasks: Vec<Task>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArchiveDay {
    date: String,
    tasks: Vec<Task>,
}

pub async fn handle_columns(service: &HttpTaskService, board_id: &str) {
    match service.fetch_columns(board_id).await {
        Ok(columns) => {
            let summaries: Vec<ColumnSummary> = columns
                .into_iter()
                .map(|c| ColumnSummary {
                    id: c.id,
                    name: c.name,
                    status: c.status,
                    tasks: c.tasks,
                })
                .collect();
            output::output_list(summaries);
        }
        Err(e) => output::output_error(&e.to_string()),
    }
}

pub async fn handle_add(service: &HttpTaskService, board_id: &str, title: &str, describe: bool) {
    let draft = match TaskDraft::new(title) {
        Ok(draft) => draft,
        Err(e) => output::output_error(&e.to_string()),
    };
    let draft = if describe {
        let generator: Arc<dyn DescriptionGenerator> = Arc::new(service.clone());
        let description = describe_or_fallback(&generator, &draft.title, None).await;
        draft.with_description(Some(description))
    } else {
        draft
    };

    // New tasks always enter To Do; resolve the column from the board.
    let columns = match service.fetch_columns(board_id).await {
        Ok(columns) => columns,
        Err(e) => output::output_error(&e.to_string()),
    };
    let Some(todo) = columns
        .iter()
        .find(|c| c.status == taskboard_domain::TaskStatus::Todo)
        .or_else(|| columns.first())
    else {
        output::output_error("board has no columns");
    };

    match service.create_task(&todo.id, &draft).await {
        Ok(task) => output::output_success(task),
        Err(e) => output::output_error(&e.to_string()),
    }
}

pub async fn handle_move(service: &HttpTaskService, task_id: &str, column_id: &str) {
    match service.move_task(task_id, column_id).await {
        Ok(task) => output::output_success(task),
        Err(e) => output::output_error(&e.to_string()),
    }
}

pub async fn handle_archive(service: &HttpTaskService) {
    match service.fetch_archive().await {
        Ok(raw) => {
            let days: Vec<ArchiveDay> = ArchivedTaskGroup::from_response(raw)
                .into_iter()
                .map(|g| ArchiveDay {
                    date: g.date.to_string(),
                    tasks: g.tasks,
                })
                .collect();
            output::output_list(days);
        }
        Err(e) => output::output_error(&e.to_string()),
    }
}
