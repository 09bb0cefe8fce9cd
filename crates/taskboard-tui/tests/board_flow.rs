//! End-to-end board flows driven through key events, with a scripted task
//! service standing in for the backend.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskboard_api::{fallback_description, DescriptionGenerator, TaskService};
use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::{Board, Column, Task, TaskDraft, TaskPriority, TaskStatus};
use taskboard_tui::{App, AppEvent, NotificationLevel};

fn make_task(id: &str, title: &str, status: TaskStatus) -> Task {
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

fn board_columns() -> Vec<Column> {
    vec![
        Column::new("col-todo", "To Do", 0, TaskStatus::Todo),
        Column::new("col-wip", "In Progress", 1, TaskStatus::InProgress),
        Column::new("col-review", "In Review", 2, TaskStatus::InReview),
        Column::new("col-done", "Done", 3, TaskStatus::Done),
    ]
}

#[derive(Default)]
struct ScriptedTaskService {
    move_calls: Mutex<Vec<(String, String)>>,
    create_calls: Mutex<Vec<(String, TaskDraft)>>,
    fail_moves: AtomicBool,
    next_id: AtomicU32,
}

#[async_trait]
impl TaskService for ScriptedTaskService {
    async fn fetch_columns(&self, _board_id: &str) -> TaskboardResult<Vec<Column>> {
        Ok(board_columns())
    }

    async fn fetch_archive(&self) -> TaskboardResult<BTreeMap<String, Vec<Task>>> {
        Ok(BTreeMap::new())
    }

    async fn create_task(&self, column_id: &str, draft: &TaskDraft) -> TaskboardResult<Task> {
        self.create_calls
            .lock()
            .unwrap()
            .push((column_id.to_string(), draft.clone()));
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut task = make_task(&format!("srv-{id}"), &draft.title, TaskStatus::Todo);
        task.description = draft.description.clone();
        Ok(task)
    }

    async fn move_task(&self, task_id: &str, column_id: &str) -> TaskboardResult<Task> {
        self.move_calls
            .lock()
            .unwrap()
            .push((task_id.to_string(), column_id.to_string()));
        if self.fail_moves.load(Ordering::SeqCst) {
            return Err(TaskboardError::Connection("connection reset".to_string()));
        }
        Ok(make_task(task_id, "moved", TaskStatus::InProgress))
    }
}

struct FailingGenerator;

#[async_trait]
impl DescriptionGenerator for FailingGenerator {
    async fn generate<'a>(
        &self,
        _title: &str,
        _context: Option<&'a str>,
    ) -> TaskboardResult<String> {
        Err(TaskboardError::Connection("refused".to_string()))
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app_with_board(
    service: Arc<ScriptedTaskService>,
) -> (
    App,
    tokio::sync::mpsc::UnboundedReceiver<AppEvent>,
    tokio::sync::mpsc::UnboundedReceiver<taskboard_api::MoveOutcome>,
) {
    let board = Board::new("board-1", "Engineering");
    let (mut app, event_rx, outcome_rx) = App::new(board, service, Arc::new(FailingGenerator), false);
    app.apply_event(AppEvent::ColumnsLoaded(Ok(board_columns())));
    (app, event_rx, outcome_rx)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

#[tokio::test]
async fn drag_to_next_column_moves_and_confirms() {
    let service = Arc::new(ScriptedTaskService::default());
    let (mut app, _event_rx, mut outcome_rx) = app_with_board(Arc::clone(&service));
    app.apply_event(AppEvent::TaskCreated {
        column_id: "col-todo".to_string(),
        result: Ok(make_task("t-1", "Write spec", TaskStatus::Todo)),
    });

    app.handle_key(key(KeyCode::Char(' '))); // pick up
    assert!(app.drag.is_dragging());
    app.handle_key(key(KeyCode::Char('l'))); // hover In Progress
    app.handle_key(key(KeyCode::Char(' '))); // drop

    let todo = &app.store.columns()[0];
    let wip = &app.store.columns()[1];
    assert!(todo.tasks.is_empty());
    assert_eq!(wip.tasks.len(), 1);
    assert_eq!(wip.tasks[0].status, TaskStatus::InProgress);
    assert!(app.store.is_pending(&"t-1".to_string()));

    let outcome = outcome_rx.recv().await.expect("outcome");
    app.apply_move_outcome(outcome);
    assert!(!app.store.is_pending(&"t-1".to_string()));

    let calls = service.move_calls.lock().unwrap();
    assert_eq!(*calls, vec![("t-1".to_string(), "col-wip".to_string())]);
}

#[tokio::test]
async fn failed_confirmation_reverts_and_retries() {
    let service = Arc::new(ScriptedTaskService::default());
    service.fail_moves.store(true, Ordering::SeqCst);
    let (mut app, _event_rx, mut outcome_rx) = app_with_board(Arc::clone(&service));
    app.apply_event(AppEvent::TaskCreated {
        column_id: "col-todo".to_string(),
        result: Ok(make_task("t-1", "Write spec", TaskStatus::Todo)),
    });

    app.handle_key(key(KeyCode::Char(' ')));
    app.handle_key(key(KeyCode::Char('l')));
    app.handle_key(key(KeyCode::Char(' ')));

    let outcome = outcome_rx.recv().await.expect("outcome");
    app.apply_move_outcome(outcome);

    // Reverted to the last confirmed position and status.
    let todo = &app.store.columns()[0];
    assert_eq!(todo.tasks.len(), 1);
    assert_eq!(todo.tasks[0].status, TaskStatus::Todo);
    assert!(!app.store.is_pending(&"t-1".to_string()));
    let latest = app.notifications.latest().expect("notification");
    assert_eq!(latest.level, NotificationLevel::Error);
    assert!(app.failed_move.is_some());

    // Retry succeeds once the service recovers.
    service.fail_moves.store(false, Ordering::SeqCst);
    app.handle_key(key(KeyCode::Char('r')));
    let outcome = outcome_rx.recv().await.expect("outcome");
    app.apply_move_outcome(outcome);

    assert_eq!(app.store.columns()[1].tasks.len(), 1);
    assert!(!app.store.is_pending(&"t-1".to_string()));
    assert_eq!(service.move_calls.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn drop_with_no_target_changes_nothing() {
    let service = Arc::new(ScriptedTaskService::default());
    let (mut app, _event_rx, mut outcome_rx) = app_with_board(Arc::clone(&service));
    app.apply_event(AppEvent::TaskCreated {
        column_id: "col-todo".to_string(),
        result: Ok(make_task("t-1", "Write spec", TaskStatus::Todo)),
    });

    app.handle_key(key(KeyCode::Char(' ')));
    app.handle_key(key(KeyCode::Esc));

    assert!(!app.drag.is_dragging());
    assert_eq!(app.store.columns()[0].tasks.len(), 1);
    assert!(
        tokio::time::timeout(Duration::from_millis(50), outcome_rx.recv())
            .await
            .is_err(),
        "no confirmation request should be issued"
    );
    assert!(service.move_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn create_task_with_failed_generation_uses_fallback() {
    let service = Arc::new(ScriptedTaskService::default());
    let (mut app, mut event_rx, _outcome_rx) = app_with_board(Arc::clone(&service));

    app.handle_key(key(KeyCode::Char('n')));
    type_text(&mut app, "Refactor billing");
    app.handle_key(key(KeyCode::Tab)); // turn description generation on
    app.handle_key(key(KeyCode::Enter));

    let event = event_rx.recv().await.expect("created event");
    app.apply_event(event);

    let todo = &app.store.columns()[0];
    assert_eq!(todo.tasks.len(), 1);
    assert_eq!(todo.tasks[0].title, "Refactor billing");
    assert_eq!(
        todo.tasks[0].description.as_deref(),
        Some(fallback_description("Refactor billing").as_str())
    );

    let creates = service.create_calls.lock().unwrap();
    assert_eq!(creates.len(), 1);
    assert_eq!(creates[0].0, "col-todo");
}

#[tokio::test]
async fn empty_title_is_blocked_before_any_request() {
    let service = Arc::new(ScriptedTaskService::default());
    let (mut app, mut event_rx, _outcome_rx) = app_with_board(Arc::clone(&service));

    app.handle_key(key(KeyCode::Char('n')));
    app.handle_key(key(KeyCode::Enter));

    let latest = app.notifications.latest().expect("validation notice");
    assert_eq!(latest.level, NotificationLevel::Error);
    assert!(
        tokio::time::timeout(Duration::from_millis(50), event_rx.recv())
            .await
            .is_err(),
        "no create request should be issued"
    );
    assert!(service.create_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn move_to_menu_drives_the_same_path() {
    let service = Arc::new(ScriptedTaskService::default());
    let (mut app, _event_rx, mut outcome_rx) = app_with_board(Arc::clone(&service));
    app.apply_event(AppEvent::TaskCreated {
        column_id: "col-todo".to_string(),
        result: Ok(make_task("t-1", "Write spec", TaskStatus::Todo)),
    });

    app.handle_key(key(KeyCode::Char('m')));
    app.handle_key(key(KeyCode::Char('4'))); // Done

    assert_eq!(app.store.columns()[3].tasks.len(), 1);
    assert_eq!(app.store.columns()[3].tasks[0].status, TaskStatus::Done);

    let outcome = outcome_rx.recv().await.expect("outcome");
    app.apply_move_outcome(outcome);
    let calls = service.move_calls.lock().unwrap();
    assert_eq!(*calls, vec![("t-1".to_string(), "col-done".to_string())]);
}
