use crate::{constants::FINDER_HIGHLIGHT_COLOR, state::AppState, thread_finder::ThreadFinderStateAccess};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, StatefulWidget, Widget},
};

#[derive(Default, Copy, Clone)]
pub struct ThreadFinderWidget {}

impl StatefulWidget for ThreadFinderWidget {
    type State = AppState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // Create a centered popup area that's smaller than the full screen
        let width = area.width.min(60);
        let height = area.height.min(20);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let popup_area = Rect::new(x, y, width, height);

        Clear.render(popup_area, buf);
        let block = Block::default()
            .title("Thread Finder")
            .borders(Borders::ALL);
        let inner_area = block.inner(popup_area);
        block.render(popup_area, buf);

        let finder = state.thread_finder_state();

        // Render search query area
        let query_span = Span::styled(
            format!("> {}", finder.query),
            Style::default().fg(FINDER_HIGHLIGHT_COLOR),
        );
        Paragraph::new(query_span).render(
            Rect::new(inner_area.x, inner_area.y, inner_area.width, 1),
            buf,
        );

        let info_span = Span::styled(
            format!(
                "Matches: {}/{}",
                finder.filtered_threads.len(),
                finder.all_threads.len()
            ),
            Style::default().fg(Color::Cyan),
        );
        Paragraph::new(info_span).render(
            Rect::new(inner_area.x, inner_area.y + 1, inner_area.width, 1),
            buf,
        );

        // Leave room for query, info and help text
        let list_area = Rect::new(
            inner_area.x,
            inner_area.y + 2,
            inner_area.width,
            inner_area.height.saturating_sub(3),
        );
        let items: Vec<ListItem> = finder
            .filtered_threads
            .iter()
            .map(|entry| ListItem::new(entry.label()))
            .collect();
        let list = List::new(items).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(FINDER_HIGHLIGHT_COLOR)
                .add_modifier(Modifier::BOLD),
        );
        StatefulWidget::render(
            list,
            list_area,
            buf,
            &mut state.thread_finder_state_mut().list_state,
        );

        let help_span = Span::styled(
            "Up/Down: Navigate | Enter: Switch | Esc: Cancel",
            Style::default().fg(Color::DarkGray),
        );
        let help_area = Rect::new(
            inner_area.x,
            inner_area.bottom().saturating_sub(1),
            inner_area.width,
            1,
        );
        Paragraph::new(help_span).render(help_area, buf);
    }
}
