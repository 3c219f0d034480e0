use crate::{constants::ACTIVE_THREAD_COLOR, state::AppState};
use ratatui::{
    prelude::{Buffer, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

#[derive(Default, Copy, Clone)]
pub struct ThreadListWidget {}

impl StatefulWidget for ThreadListWidget {
    type State = AppState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default().title("Threads").borders(Borders::ALL);
        let inner_area = block.inner(area);
        block.render(area, buf);

        let threads = state.threads();
        let lines: Vec<Line> = threads
            .iter()
            .map(|thread| {
                if &thread.id == threads.active_id() {
                    Line::styled(
                        format!("> {}", thread.title),
                        Style::default()
                            .fg(ACTIVE_THREAD_COLOR)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::raw(format!("  {}", thread.title))
                }
            })
            .collect();

        // Keep the active thread visible when the list is longer than the area
        let active_index = threads
            .iter()
            .position(|thread| &thread.id == threads.active_id())
            .unwrap_or(0);
        let visible = inner_area.height as usize;
        let offset = (active_index + 1).saturating_sub(visible);

        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(inner_area, buf);
    }
}
