pub mod app;
pub mod events;
pub mod notifications;
pub mod theme;
pub mod ui;

pub use app::{App, AppEvent, AppMode};
pub use notifications::{Notification, NotificationLevel, Notifications};
