use super::colors::*;
use ratatui::style::{Modifier, Style};
use taskboard_domain::{TaskPriority, TaskStatus};

use crate::notifications::NotificationLevel;

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    }
}

pub fn dragging_item() -> Style {
    Style::default()
        .bg(DRAGGING_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn pending_marker() -> Style {
    Style::default().fg(PENDING_TEXT)
}

pub fn overdue_text() -> Style {
    Style::default().fg(OVERDUE_TEXT).add_modifier(Modifier::BOLD)
}

pub fn priority_style(priority: TaskPriority) -> Style {
    let color = match priority {
        TaskPriority::Urgent => PRIORITY_URGENT,
        TaskPriority::High => PRIORITY_HIGH,
        TaskPriority::Medium => PRIORITY_MEDIUM,
        TaskPriority::Low => PRIORITY_LOW,
    };
    Style::default().fg(color)
}

pub fn status_style(status: TaskStatus) -> Style {
    let color = match status {
        TaskStatus::Todo => STATUS_TODO,
        TaskStatus::InProgress => STATUS_IN_PROGRESS,
        TaskStatus::InReview => STATUS_IN_REVIEW,
        TaskStatus::Done => STATUS_DONE,
    };
    Style::default().fg(color)
}

pub fn notification_style(level: NotificationLevel) -> Style {
    let color = match level {
        NotificationLevel::Info => INFO_COLOR,
        NotificationLevel::Error => ERROR_COLOR,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
