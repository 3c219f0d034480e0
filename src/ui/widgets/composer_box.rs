use crate::{
    constants::{COMMAND_LINE_COLOR, COMPOSER_PLACEHOLDER, PLACEHOLDER_COLOR},
    state::AppState,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

#[derive(Copy, Clone)]
pub struct ComposerBoxWidget {
    prefix: char,
}

impl ComposerBoxWidget {
    pub fn new(prefix: char) -> Self {
        Self { prefix }
    }
}

impl StatefulWidget for ComposerBoxWidget {
    type State = AppState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let composer = state.composer();
        let title = match composer.parked() {
            Some(_) => format!("{:?} | draft kept", state.mode),
            None => format!("{:?}", state.mode),
        };
        let block = Block::default().title(title).borders(Borders::TOP);
        let inner_area = block.inner(area);
        block.render(area, buf);
        let is_command = composer.input_buffer.trim_start().starts_with(self.prefix);

        let (text, style) = if composer.input_buffer.is_empty() {
            (
                format!(" {COMPOSER_PLACEHOLDER}, {}help for commands.", self.prefix),
                Style::default().fg(PLACEHOLDER_COLOR),
            )
        } else if is_command {
            (
                format!(" {}", composer.input_buffer),
                Style::default().fg(COMMAND_LINE_COLOR),
            )
        } else {
            (format!(" {}", composer.input_buffer), Style::default())
        };

        // Keep the cursor in view on long lines
        let width = inner_area.width.saturating_sub(2) as usize;
        let scroll = composer.cursor_position.saturating_sub(width);

        Paragraph::new(text)
            .style(style)
            .scroll((0, scroll as u16))
            .render(inner_area, buf);

        // Position cursor at cursor_position, not just at the end
        let cursor_x = inner_area.x + 1 + (composer.cursor_position - scroll) as u16;
        let cursor_y = inner_area.y;

        if cursor_x < inner_area.right() && cursor_y < inner_area.bottom() {
            let cell = &mut buf[(cursor_x, cursor_y)];
            cell.set_bg(cell.fg);
            cell.set_fg(Color::Black);
        }
    }
}
