use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Default, Debug, PartialEq, Eq)]
pub struct AppLayout {
    pub title: Rect,
    pub thread_list: Rect,
    pub transcript: Rect,
    pub composer: Rect,
}

pub fn create_layout(area: Rect, thread_list_width: u16) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(thread_list_width), Constraint::Min(0)])
        .split(main_chunks[1]);

    AppLayout {
        title: main_chunks[0],
        thread_list: content_chunks[0],
        transcript: content_chunks[1],
        composer: main_chunks[2],
    }
}
