use crossterm::event::KeyCode;

pub fn send() -> KeyCode {
    KeyCode::Enter
}

pub fn quit() -> KeyCode {
    KeyCode::Esc
}

pub fn help() -> KeyCode {
    KeyCode::F(1)
}

pub fn thread_finder() -> KeyCode {
    KeyCode::F(2)
}

pub fn next_thread() -> KeyCode {
    KeyCode::PageDown
}

pub fn previous_thread() -> KeyCode {
    KeyCode::PageUp
}

pub fn history_previous() -> KeyCode {
    KeyCode::Up
}

pub fn history_next() -> KeyCode {
    KeyCode::Down
}
