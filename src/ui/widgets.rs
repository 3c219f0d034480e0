pub mod composer_box;
pub mod help_menu;
pub mod thread_finder;
pub mod thread_list;
pub mod title_bar;
pub mod transcript;

use crossterm::event::KeyCode;

pub fn key_to_string(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(c) => format!("'{}'", c),
        KeyCode::F(n) => format!("F{}", n),
        _ => format!("{:?}", key),
    }
}
