use super::key_to_string;
use crate::{
    config::{CommandsConfig, KeybindingsConfig},
    state::AppState,
};
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, StatefulWidget, Widget},
};

#[derive(Copy, Clone)]
pub struct HelpMenuWidget<'a> {
    keybindings: &'a KeybindingsConfig,
    commands: &'a CommandsConfig,
}

impl<'a> HelpMenuWidget<'a> {
    pub fn new(keybindings: &'a KeybindingsConfig, commands: &'a CommandsConfig) -> Self {
        Self {
            keybindings,
            commands,
        }
    }

    fn help_text(&self) -> String {
        let keys = self.keybindings;
        let prefix = self.commands.prefix;
        format!(
            "slashline Keyboard Controls\n\n\
            {} - Send the pending line\n\
            {} - Toggle help menu\n\
            {} - Quit application\n\
            {} - Find a thread\n\
            {}/{} - Previous/next thread\n\
            {}/{} - Walk input history\n\n\
            Lines starting with '{prefix}' run commands instead of being sent.\n\
            Type {prefix}{} and press {} to list them.",
            key_to_string(&keys.send),
            key_to_string(&keys.help),
            key_to_string(&keys.quit),
            key_to_string(&keys.thread_finder),
            key_to_string(&keys.previous_thread),
            key_to_string(&keys.next_thread),
            key_to_string(&keys.history_previous),
            key_to_string(&keys.history_next),
            self.commands.help_command,
            key_to_string(&keys.send),
        )
    }
}

impl StatefulWidget for HelpMenuWidget<'_> {
    type State = AppState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if !state.show_help {
            return;
        }

        // Clear the entire screen first so only the help menu is visible
        Clear.render(area, buf);

        Paragraph::new(self.help_text())
            .block(Block::default().title("Help").borders(Borders::ALL))
            .style(Style::default())
            .render(area, buf);
    }
}
