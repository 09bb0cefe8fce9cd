//! Transient, non-blocking user feedback.
//!
//! All network-originating errors end up here instead of propagating into
//! the render layer. Entries expire after a few seconds of display.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};

const MAX_ENTRIES: usize = 5;
const DISPLAY_SECONDS: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct Notifications {
    entries: VecDeque<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_info(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Info, message.into());
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Error, message.into());
    }

    fn push(&mut self, level: NotificationLevel, message: String) {
        if self.entries.len() == MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(Notification {
            level,
            message,
            created_at: Utc::now(),
        });
    }

    /// The most recent entry, shown in the footer.
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop entries older than the display window. Called on UI ticks.
    pub fn expire(&mut self, now: DateTime<Utc>) {
        let cutoff = now - Duration::seconds(DISPLAY_SECONDS);
        while matches!(self.entries.front(), Some(n) if n.created_at < cutoff) {
            self.entries.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_most_recent() {
        let mut notifications = Notifications::new();
        notifications.push_info("loaded");
        notifications.push_error("move failed");
        assert_eq!(notifications.latest().unwrap().message, "move failed");
        assert_eq!(
            notifications.latest().unwrap().level,
            NotificationLevel::Error
        );
    }

    #[test]
    fn test_bounded() {
        let mut notifications = Notifications::new();
        for i in 0..10 {
            notifications.push_info(format!("n{i}"));
        }
        assert_eq!(notifications.len(), MAX_ENTRIES);
        assert_eq!(notifications.latest().unwrap().message, "n9");
    }

    #[test]
    fn test_expire_drops_old_entries() {
        let mut notifications = Notifications::new();
        notifications.push_info("old");
        notifications.expire(Utc::now() + Duration::seconds(DISPLAY_SECONDS + 1));
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_expire_keeps_fresh_entries() {
        let mut notifications = Notifications::new();
        notifications.push_info("fresh");
        notifications.expire(Utc::now());
        assert_eq!(notifications.len(), 1);
    }
}
