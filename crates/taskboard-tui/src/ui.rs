use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use taskboard_domain::{Column, Task};

use crate::app::{App, AppMode};
use crate::theme;

pub fn render(app: &mut App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    render_board(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);

    match app.mode {
        AppMode::CreateTask => render_create_task_popup(app, frame),
        AppMode::MoveTo => render_move_to_popup(app, frame),
        AppMode::Archive => render_archive_popup(app, frame),
        AppMode::Normal => {}
    }
}

fn render_board(app: &App, frame: &mut Frame, area: Rect) {
    let columns = app.store.columns();
    if columns.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", app.board.name));
        let placeholder = Paragraph::new("No columns yet, waiting for the task service")
            .style(theme::label_text())
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let constraints: Vec<Constraint> = columns
        .iter()
        .map(|_| Constraint::Ratio(1, columns.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, column) in columns.iter().enumerate() {
        render_column(app, frame, chunks[index], column, index);
    }
}

fn render_column(app: &App, frame: &mut Frame, area: Rect, column: &Column, index: usize) {
    let focused = index == app.active_column;
    let border = if focused {
        theme::focused_border()
    } else {
        theme::unfocused_border()
    };

    let items: Vec<ListItem> = column
        .tasks
        .iter()
        .enumerate()
        .map(|(task_index, task)| {
            let selected = focused && app.task_selection.is_selected(task_index);
            task_list_item(app, task, selected)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ({}) ", column.name, column.tasks.len())),
    );
    frame.render_widget(list, area);
}

fn task_list_item<'a>(app: &App, task: &'a Task, selected: bool) -> ListItem<'a> {
    let dragging = app.drag.active_task() == Some(&task.id);

    let mut spans = vec![
        Span::styled("▌ ", theme::priority_style(task.priority)),
        Span::styled(
            task.title.as_str(),
            if dragging {
                theme::dragging_item()
            } else {
                theme::normal_text()
            },
        ),
    ];
    if app.store.is_pending(&task.id) {
        spans.push(Span::styled(" *", theme::pending_marker()));
    }
    if let Some(due) = task.due_date {
        let style = if task.is_overdue(chrono::Utc::now()) {
            theme::overdue_text()
        } else {
            theme::label_text()
        };
        spans.push(Span::styled(format!(" due {}", due.format("%m-%d")), style));
    }

    ListItem::new(Line::from(spans)).style(theme::selected_item(selected))
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let line = match app.notifications.latest() {
        Some(notification) => Line::from(Span::styled(
            notification.message.clone(),
            theme::notification_style(notification.level),
        )),
        None => {
            let hints = match app.mode {
                AppMode::Normal if app.drag.is_dragging() => {
                    "h/l hover column | j/k hover slot | space drop | esc drop nowhere"
                }
                AppMode::Normal => {
                    "q quit | n new | space pick up | m move to | a archive | r retry"
                }
                AppMode::CreateTask => "enter add | tab toggle description | esc cancel",
                AppMode::MoveTo => "1-9 pick column | esc cancel",
                AppMode::Archive => "j/k scroll | esc close",
            };
            Line::from(Span::styled(hints, theme::label_text()))
        }
    };

    let footer = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", app.board.name)),
    );
    frame.render_widget(footer, area);
}

fn render_create_task_popup(app: &App, frame: &mut Frame) {
    let area = centered_rect(50, 20, frame.area());
    frame.render_widget(Clear, area);

    let generate = if app.generate_description {
        "on"
    } else {
        "off"
    };
    let lines = vec![
        Line::from(app.input.as_str().to_string()),
        Line::from(Span::styled(
            format!("generate description: {generate} (tab)"),
            theme::label_text(),
        )),
    ];
    let popup = Paragraph::new(lines).style(theme::popup_bg()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::focused_border())
            .title(" New Task "),
    );
    frame.render_widget(popup, area);
}

fn render_move_to_popup(app: &App, frame: &mut Frame) {
    let area = centered_rect(40, 30, frame.area());
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = app
        .store
        .columns()
        .iter()
        .enumerate()
        .map(|(index, column)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}. ", index + 1), theme::label_text()),
                Span::styled(column.name.clone(), theme::status_style(column.status)),
            ]))
        })
        .collect();

    let list = List::new(items).style(theme::popup_bg()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::focused_border())
            .title(" Move To "),
    );
    frame.render_widget(list, area);
}

fn render_archive_popup(app: &App, frame: &mut Frame) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();
    if app.archive.is_empty() {
        lines.push(Line::from(Span::styled(
            "No archived tasks",
            theme::label_text(),
        )));
    }
    for group in &app.archive {
        lines.push(Line::from(Span::styled(
            group.date.format("%Y-%m-%d").to_string(),
            theme::pending_marker(),
        )));
        for task in &group.tasks {
            lines.push(Line::from(vec![
                Span::styled("  ▌ ", theme::priority_style(task.priority)),
                Span::styled(task.title.clone(), theme::normal_text()),
            ]));
        }
    }

    let scroll = app.archive_scroll.min(lines.len().saturating_sub(1)) as u16;
    let total = taskboard_domain::ArchivedTaskGroup::task_count(&app.archive);
    let popup = Paragraph::new(lines)
        .style(theme::popup_bg())
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::focused_border())
                .title(format!(" Archived ({total}) ")),
        );
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
