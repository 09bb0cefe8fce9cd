use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;
pub const DRAGGING_BG: Color = Color::Magenta;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const PENDING_TEXT: Color = Color::Yellow;
pub const OVERDUE_TEXT: Color = Color::Red;

pub const PRIORITY_URGENT: Color = Color::Red;
pub const PRIORITY_HIGH: Color = Color::LightRed;
pub const PRIORITY_MEDIUM: Color = Color::Yellow;
pub const PRIORITY_LOW: Color = Color::White;

pub const STATUS_TODO: Color = Color::White;
pub const STATUS_IN_PROGRESS: Color = Color::Yellow;
pub const STATUS_IN_REVIEW: Color = Color::Cyan;
pub const STATUS_DONE: Color = Color::Green;

pub const POPUP_BG: Color = Color::Black;
pub const INFO_COLOR: Color = Color::Green;
pub const ERROR_COLOR: Color = Color::Red;
