use ratatui::style::Color;

pub const ACTIVE_THREAD_COLOR: Color = Color::Yellow;
pub const COMMAND_LINE_COLOR: Color = Color::Yellow;
pub const PLACEHOLDER_COLOR: Color = Color::DarkGray;
pub const FINDER_HIGHLIGHT_COLOR: Color = Color::Yellow;

pub const DEFAULT_USER_COLOR: Color = Color::Cyan;
pub const DEFAULT_ASSISTANT_COLOR: Color = Color::White;
pub const DEFAULT_LOCAL_COLOR: Color = Color::DarkGray;

pub const COMPOSER_PLACEHOLDER: &str = "Type a message and press Enter";
