use std::collections::BTreeMap;
use std::io;
use std::sync::Arc;

use chrono::Utc;
use crossterm::{
    event::{KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use taskboard_api::{
    describe_or_fallback, DescriptionGenerator, MoveCoordinator, MoveOutcome, TaskService,
};
use taskboard_core::{InputState, SelectionState, TaskboardResult};
use taskboard_domain::{
    ArchivedTaskGroup, Board, Column, ColumnId, DragController, DropTarget, MoveIntent, Task,
    TaskDraft, TaskId, TaskStatus, TaskStore,
};
use tokio::sync::mpsc;

use crate::events::{Event, EventHandler};
use crate::notifications::Notifications;
use crate::ui;

/// Background results delivered to the main loop.
#[derive(Debug)]
pub enum AppEvent {
    ColumnsLoaded(TaskboardResult<Vec<Column>>),
    ArchiveLoaded(TaskboardResult<BTreeMap<String, Vec<Task>>>),
    TaskCreated {
        column_id: ColumnId,
        result: TaskboardResult<Task>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    CreateTask,
    MoveTo,
    Archive,
}

/// Composition root: owns the store, the drag controller, the coordinator,
/// and the ephemeral view state; applies background outcomes on the main
/// loop.
pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub input: InputState,
    pub generate_description: bool,
    pub board: Board,
    pub store: TaskStore,
    pub drag: DragController,
    pub active_column: usize,
    pub task_selection: SelectionState,
    pub archive: Vec<ArchivedTaskGroup>,
    pub archive_scroll: usize,
    pub notifications: Notifications,
    /// Last reverted move, kept for the retry affordance.
    pub failed_move: Option<(TaskId, ColumnId)>,
    service: Arc<dyn TaskService>,
    generator: Arc<dyn DescriptionGenerator>,
    coordinator: MoveCoordinator,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(
        board: Board,
        service: Arc<dyn TaskService>,
        generator: Arc<dyn DescriptionGenerator>,
        generate_descriptions: bool,
    ) -> (
        Self,
        mpsc::UnboundedReceiver<AppEvent>,
        mpsc::UnboundedReceiver<MoveOutcome>,
    ) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (coordinator, outcome_rx) = MoveCoordinator::new(Arc::clone(&service));

        let app = Self {
            should_quit: false,
            mode: AppMode::Normal,
            input: InputState::new(),
            generate_description: generate_descriptions,
            board,
            store: TaskStore::new(),
            drag: DragController::new(),
            active_column: 0,
            task_selection: SelectionState::new(),
            archive: Vec::new(),
            archive_scroll: 0,
            notifications: Notifications::new(),
            failed_move: None,
            service,
            generator,
            coordinator,
            event_tx,
        };

        (app, event_rx, outcome_rx)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Kick off the initial board and archive fetches.
    pub fn load(&self) {
        let service = Arc::clone(&self.service);
        let event_tx = self.event_tx.clone();
        let board_id = self.board.id.clone();
        tokio::spawn(async move {
            let result = service.fetch_columns(&board_id).await;
            let _ = event_tx.send(AppEvent::ColumnsLoaded(result));
        });

        let service = Arc::clone(&self.service);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = service.fetch_archive().await;
            let _ = event_tx.send(AppEvent::ArchiveLoaded(result));
        });
    }

    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ColumnsLoaded(Ok(columns)) => {
                self.store.load(columns);
                self.active_column = 0;
                self.task_selection.clear();
                self.auto_select();
            }
            AppEvent::ColumnsLoaded(Err(e)) => {
                // The board stays empty; the user can restart to retry.
                self.notifications
                    .push_error(format!("Failed to load board: {e}"));
            }
            AppEvent::ArchiveLoaded(Ok(raw)) => {
                self.archive = ArchivedTaskGroup::from_response(raw);
            }
            AppEvent::ArchiveLoaded(Err(e)) => {
                // Secondary view: degrade to an empty archive, log only.
                tracing::warn!("Failed to load archive: {}", e);
                self.archive = Vec::new();
            }
            AppEvent::TaskCreated { column_id, result } => match result {
                Ok(task) => {
                    let title = task.title.clone();
                    if let Err(e) = self.store.add_task(&column_id, task) {
                        self.notifications.push_error(e.to_string());
                    } else {
                        self.notifications.push_info(format!("Added {:?}", title));
                        self.auto_select();
                    }
                }
                Err(e) => {
                    self.notifications
                        .push_error(format!("Failed to create task: {e}"));
                }
            },
        }
    }

    /// Reconcile an optimistic move with the task service's verdict.
    pub fn apply_move_outcome(&mut self, outcome: MoveOutcome) {
        match outcome.result {
            Ok(_) => {
                self.store.confirm_move(&outcome.task_id);
            }
            Err(e) => {
                self.store.revert_move(&outcome.task_id);
                self.failed_move = Some((outcome.task_id, outcome.to_column_id));
                self.notifications
                    .push_error(format!("Move failed: {e} (press r to retry)"));
                self.clamp_selection();
            }
        }
    }

    /// Apply a resolved drop optimistically and fire the confirmation.
    pub fn execute_move(&mut self, intent: MoveIntent) {
        match self.store.begin_move(
            &intent.task_id,
            &intent.from_column_id,
            &intent.to_column_id,
            intent.target_index,
        ) {
            Ok(Some(_)) => {
                self.coordinator
                    .dispatch(intent.task_id, intent.to_column_id);
            }
            Ok(None) => {}
            Err(e) => {
                self.notifications.push_error(e.to_string());
            }
        }
        self.clamp_selection();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::CreateTask => self.handle_create_key(key),
            AppMode::MoveTo => self.handle_move_to_key(key),
            AppMode::Archive => self.handle_archive_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Left | KeyCode::Char('h') => self.focus_column_prev(),
            KeyCode::Right | KeyCode::Char('l') => self.focus_column_next(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.task_selection.next(self.active_column_len());
            }
            KeyCode::Up | KeyCode::Char('k') => self.task_selection.prev(),
            KeyCode::Char('g') => self.task_selection.jump_to_first(),
            KeyCode::Char('G') => self.task_selection.jump_to_last(self.active_column_len()),
            KeyCode::Char(' ') | KeyCode::Enter => self.pick_up_or_drop(),
            KeyCode::Esc => {
                // Drop with no target: gesture ends, nothing moves.
                if self.drag.is_dragging() {
                    self.drag.drag_end(None, &self.store);
                }
            }
            KeyCode::Char('n') => {
                self.mode = AppMode::CreateTask;
                self.input.clear();
            }
            KeyCode::Char('m') => {
                if self.selected_task_id().is_some() && !self.drag.is_dragging() {
                    self.mode = AppMode::MoveTo;
                }
            }
            KeyCode::Char('a') => {
                self.mode = AppMode::Archive;
                self.archive_scroll = 0;
            }
            KeyCode::Char('r') => self.retry_failed_move(),
            _ => {}
        }
    }

    fn handle_create_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = AppMode::Normal;
                self.input.clear();
            }
            KeyCode::Enter => self.submit_create(),
            KeyCode::Tab => self.generate_description = !self.generate_description,
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Char(c) => self.input.insert_char(c),
            _ => {}
        }
    }

    fn handle_move_to_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = AppMode::Normal,
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.mode = AppMode::Normal;
                let Some(index) = (c as usize).checked_sub('1' as usize) else {
                    return;
                };
                let Some(column) = self.store.columns().get(index) else {
                    return;
                };
                let to_column_id = column.id.clone();
                if let Some(intent) = self.selected_move_intent(to_column_id) {
                    self.execute_move(intent);
                }
            }
            _ => {}
        }
    }

    fn handle_archive_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('a') | KeyCode::Char('q') => {
                self.mode = AppMode::Normal;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.archive_scroll = self.archive_scroll.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.archive_scroll = self.archive_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    /// Space toggles the drag gesture: pick up the selected task, or drop
    /// the active one onto the current hover position.
    fn pick_up_or_drop(&mut self) {
        if self.drag.is_dragging() {
            let over = self.hover_target();
            if let Some(intent) = self.drag.drag_end(over, &self.store) {
                self.execute_move(intent);
            }
        } else if let Some(task_id) = self.selected_task_id() {
            self.drag.drag_start(task_id);
        }
    }

    /// Where a drop would land right now: the selected task's slot in the
    /// focused column, or the column body when it has no selection.
    fn hover_target(&self) -> Option<DropTarget> {
        let column = self.store.columns().get(self.active_column)?;
        match self
            .task_selection
            .get()
            .and_then(|idx| column.tasks.get(idx))
        {
            Some(task) => Some(DropTarget::Task(task.id.clone())),
            None => Some(DropTarget::Column(column.id.clone())),
        }
    }

    fn selected_task_id(&self) -> Option<TaskId> {
        let column = self.store.columns().get(self.active_column)?;
        let index = self.task_selection.get()?;
        column.tasks.get(index).map(|t| t.id.clone())
    }

    fn selected_move_intent(&self, to_column_id: ColumnId) -> Option<MoveIntent> {
        let task_id = self.selected_task_id()?;
        let (from_column, _) = self.store.find_task(&task_id)?;
        Some(MoveIntent {
            task_id,
            from_column_id: from_column.id.clone(),
            to_column_id,
            target_index: None,
        })
    }

    fn retry_failed_move(&mut self) {
        let Some((task_id, to_column_id)) = self.failed_move.take() else {
            return;
        };
        let Some((from_column, _)) = self.store.find_task(&task_id) else {
            return;
        };
        self.execute_move(MoveIntent {
            task_id,
            from_column_id: from_column.id.clone(),
            to_column_id,
            target_index: None,
        });
    }

    fn submit_create(&mut self) {
        // Validation happens before any request is issued.
        let draft = match TaskDraft::new(self.input.as_str().trim()) {
            Ok(draft) => draft,
            Err(e) => {
                self.notifications.push_error(e.to_string());
                return;
            }
        };
        let Some(column_id) = self.intake_column_id() else {
            self.notifications.push_error("Board has no To Do column");
            return;
        };

        self.mode = AppMode::Normal;
        self.input.clear();

        let service = Arc::clone(&self.service);
        let generator = Arc::clone(&self.generator);
        let event_tx = self.event_tx.clone();
        let generate = self.generate_description;
        tokio::spawn(async move {
            let draft = if generate {
                let description = describe_or_fallback(&generator, &draft.title, None).await;
                draft.with_description(Some(description))
            } else {
                draft
            };
            let result = service.create_task(&column_id, &draft).await;
            let _ = event_tx.send(AppEvent::TaskCreated { column_id, result });
        });
    }

    /// New tasks always enter the To Do column.
    fn intake_column_id(&self) -> Option<ColumnId> {
        self.store
            .columns()
            .iter()
            .find(|c| c.status == TaskStatus::Todo)
            .or_else(|| self.store.columns().first())
            .map(|c| c.id.clone())
    }

    fn focus_column_prev(&mut self) {
        self.active_column = self.active_column.saturating_sub(1);
        self.clamp_selection();
    }

    fn focus_column_next(&mut self) {
        let count = self.store.columns().len();
        if count > 0 && self.active_column + 1 < count {
            self.active_column += 1;
        }
        self.clamp_selection();
    }

    fn active_column_len(&self) -> usize {
        self.store
            .columns()
            .get(self.active_column)
            .map_or(0, |c| c.tasks.len())
    }

    fn clamp_selection(&mut self) {
        let count = self.store.columns().len();
        if count == 0 {
            self.active_column = 0;
        } else if self.active_column >= count {
            self.active_column = count - 1;
        }
        self.task_selection.clamp(self.active_column_len());
    }

    fn auto_select(&mut self) {
        if self.task_selection.get().is_none() && self.active_column_len() > 0 {
            self.task_selection.jump_to_first();
        }
    }

    pub async fn run(
        &mut self,
        mut event_rx: mpsc::UnboundedReceiver<AppEvent>,
        mut outcome_rx: mpsc::UnboundedReceiver<MoveOutcome>,
    ) -> TaskboardResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();
        self.load();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            tokio::select! {
                input = events.next() => {
                    match input {
                        Some(Event::Key(key)) => self.handle_key(key),
                        Some(Event::Tick) => self.notifications.expire(Utc::now()),
                        None => break,
                    }
                }
                Some(event) = event_rx.recv() => self.apply_event(event),
                Some(outcome) = outcome_rx.recv() => self.apply_move_outcome(outcome),
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
