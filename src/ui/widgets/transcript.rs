use crate::{
    config::UiConfig,
    constants::{DEFAULT_ASSISTANT_COLOR, DEFAULT_LOCAL_COLOR, DEFAULT_USER_COLOR},
    state::AppState,
    types::{Role, ThreadMessage},
};
use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TranscriptWidget {
    user_color: Color,
    assistant_color: Color,
    local_color: Color,
}

impl Default for TranscriptWidget {
    fn default() -> Self {
        Self {
            user_color: DEFAULT_USER_COLOR,
            assistant_color: DEFAULT_ASSISTANT_COLOR,
            local_color: DEFAULT_LOCAL_COLOR,
        }
    }
}

impl TranscriptWidget {
    /// Colors come from the config by name; names ratatui cannot parse keep the default.
    pub fn from_config(config: &UiConfig) -> Self {
        let parse = |name: &str, fallback: Color| Color::from_str(name).unwrap_or(fallback);
        Self {
            user_color: parse(&config.user_color, DEFAULT_USER_COLOR),
            assistant_color: parse(&config.assistant_color, DEFAULT_ASSISTANT_COLOR),
            local_color: parse(&config.local_color, DEFAULT_LOCAL_COLOR),
        }
    }

    fn message_lines(&self, message: &ThreadMessage) -> Vec<Line<'static>> {
        let (label, color) = if message.is_local() {
            ("local", self.local_color)
        } else {
            match message.role {
                Role::User => ("you", self.user_color),
                Role::Assistant => ("assistant", self.assistant_color),
                Role::System => ("system", self.local_color),
            }
        };
        let style = Style::default().fg(color);

        message
            .content
            .lines()
            .enumerate()
            .map(|(idx, text)| {
                // Label the first line, indent continuation lines under it
                let lead = if idx == 0 {
                    format!("{label}: ")
                } else {
                    " ".repeat(label.len() + 2)
                };
                Line::from(vec![Span::styled(lead, style), Span::styled(text.to_string(), style)])
            })
            .collect()
    }
}

impl StatefulWidget for TranscriptWidget {
    type State = AppState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let thread = state.active_thread();
        let block = Block::default()
            .title(thread.title.as_str())
            .borders(Borders::ALL);
        let inner_area = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = thread
            .messages
            .iter()
            .flat_map(|message| self.message_lines(message))
            .collect();

        // Stick to the newest lines
        let offset = lines.len().saturating_sub(inner_area.height as usize);
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(inner_area, buf);
    }
}
