use crate::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

#[derive(Default, Copy, Clone)]
pub struct TitleBarWidget {}

impl StatefulWidget for TitleBarWidget {
    type State = AppState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let thread = state.active_thread();
        let mut title = format!("slashline | {} ({})", thread.title, thread.id);

        let thread_count = state.threads().len();
        if thread_count > 1 {
            title.push_str(&format!(" | {} threads", thread_count));
        }

        Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White))
            .render(area, buf);
    }
}
