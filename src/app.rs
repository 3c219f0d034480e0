use crate::{
    config::AppConfig,
    slash_command::{DispatchOutcome, Dispatcher},
    state::AppState,
    thread_finder::ThreadFinderStateAccess,
    types::AppMode,
    ui,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::io;
use tracing::{debug, info};

pub struct App {
    pub state: AppState,
    dispatcher: Dispatcher,
    config: AppConfig,
}

impl App {
    pub fn new(dispatcher: Dispatcher, config: AppConfig) -> Self {
        Self {
            state: AppState::new(),
            dispatcher,
            config,
        }
    }

    /// Draw and handle one key event at a time until the user quits.
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        info!(prefix = %self.dispatcher.prefix(), "session started");
        while !self.state.exit {
            terminal.draw(|frame| ui::draw(frame, &mut self.state, &self.config))?;
            self.handle_events()?;
        }
        info!("session ended");
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if let Event::Key(key) = event::read()? {
            // Ignore release/repeat events reported by some terminals
            if key.kind == KeyEventKind::Press {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.state.show_help {
            self.handle_help_key(key.code);
        } else {
            match self.state.mode {
                AppMode::Compose => self.handle_compose_key(key),
                AppMode::ThreadFinder => self.handle_thread_finder_key(key.code),
            }
        }
        self.flush_outbox();
    }

    fn handle_help_key(&mut self, key: KeyCode) {
        let keybindings = &self.config.keybindings;
        if key == keybindings.help || key == keybindings.quit {
            self.state.show_help = false;
        }
    }

    fn handle_compose_key(&mut self, key: KeyEvent) {
        let keybindings = self.config.keybindings.clone();
        match key.code {
            k if k == keybindings.quit => self.state.exit = true,
            k if k == keybindings.help => self.state.show_help = true,
            k if k == keybindings.thread_finder => self.state.open_thread_finder(),
            k if k == keybindings.next_thread => self.state.cycle_thread(1),
            k if k == keybindings.previous_thread => self.state.cycle_thread(-1),
            k if k == keybindings.history_previous => self.state.composer_mut().previous_history(),
            k if k == keybindings.history_next => self.state.composer_mut().next_history(),
            k if k == keybindings.send => self.submit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let prefix = self.dispatcher.prefix();
                let composer = self.state.composer_mut();
                // A command typed over a command-placed draft must not be appended to it
                if c == prefix && composer.park_placed_text() {
                    debug!("parked draft while a command line is typed");
                }
                composer.insert(c)
            }
            KeyCode::Backspace => self.state.composer_mut().backspace(),
            KeyCode::Delete => self.state.composer_mut().delete(),
            KeyCode::Left => self.state.composer_mut().move_cursor_left(),
            KeyCode::Right => self.state.composer_mut().move_cursor_right(),
            KeyCode::Home => self.state.composer_mut().move_cursor_start(),
            KeyCode::End => self.state.composer_mut().move_cursor_end(),
            _ => {}
        }
    }

    fn handle_thread_finder_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.state.close_thread_finder(),
            KeyCode::Enter => self.state.confirm_thread_finder(),
            KeyCode::Up => self.state.thread_finder_state_mut().select_previous(),
            KeyCode::Down => self.state.thread_finder_state_mut().select_next(),
            KeyCode::Backspace => self.state.thread_finder_state_mut().handle_backspace(),
            KeyCode::Char(c) => self.state.thread_finder_state_mut().handle_input(c),
            _ => {}
        }
    }

    /// Take the composer line and either run it as a command or send it as chat. A draft parked
    /// while the line was typed is restored first, so commands see it as the pending input.
    pub fn submit(&mut self) {
        let composer = self.state.composer_mut();
        let line = composer.take();
        composer.unpark();
        if line.trim().is_empty() {
            return;
        }
        composer.add_to_history(&line);

        match self.dispatcher.dispatch(&line, &mut self.state) {
            DispatchOutcome::Chat => self.state.send_chat(&line),
            outcome => debug!(?outcome, "handled command line"),
        }
    }

    // Hand queued sends to the model boundary. No model runs in this process, so the hand-off is
    // a log record per entry.
    fn flush_outbox(&mut self) {
        for entry in self.state.drain_outbox() {
            info!(
                thread = %entry.thread_id,
                chars = entry.content.chars().count(),
                "message handed to model"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{commands, slash_command::context::ComposerContext, types::ThreadId};

    fn app() -> App {
        let dispatcher = Dispatcher::new(commands::registry('/', "help").unwrap(), '/', "help");
        App::new(dispatcher, AppConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_line(app: &mut App, line: &str) {
        for c in line.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_chat_line_is_sent_and_drained() {
        let mut app = app();
        type_line(&mut app, "hello there");

        let messages = &app.state.active_thread().messages;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "hello there");
        assert!(!messages[0].is_local());
        // Drained after the key event
        assert!(app.state.outbox().is_empty());
        assert_eq!(app.state.composer_text(), "");
    }

    #[test]
    fn test_command_line_is_not_sent() {
        let mut app = app();
        type_line(&mut app, "/rename Planning");

        let thread = app.state.active_thread();
        assert_eq!(thread.title, "Planning");
        assert_eq!(thread.outbound_messages().count(), 0);
    }

    #[test]
    fn test_submitted_lines_enter_history() {
        let mut app = app();
        type_line(&mut app, "/note remember this");
        type_line(&mut app, "a question");

        press(&mut app, KeyCode::Up);
        assert_eq!(app.state.composer_text(), "a question");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.state.composer_text(), "/note remember this");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state.composer_text(), "");
    }

    #[test]
    fn test_blank_submit_does_nothing() {
        let mut app = app();
        type_line(&mut app, "   ");

        assert!(app.state.active_thread().messages.is_empty());
        assert!(app.state.composer().history.is_empty());
    }

    #[test]
    fn test_send_command_routes_draft_to_new_thread() {
        let mut app = app();
        type_line(&mut app, "/new");
        type_line(&mut app, "/edit draft for thread two");
        assert_eq!(app.state.composer_text(), "draft for thread two");
        type_line(&mut app, "/send");

        let thread = app.state.active_thread();
        assert_eq!(thread.id, ThreadId::new("thread-2"));
        let sent: Vec<&str> = thread
            .outbound_messages()
            .map(|message| message.content.as_str())
            .collect();
        assert_eq!(sent, vec!["draft for thread two"]);
        assert_eq!(app.state.composer_text(), "");
    }

    #[test]
    fn test_other_commands_keep_placed_draft() {
        let mut app = app();
        type_line(&mut app, "/edit keep this");
        type_line(&mut app, "/note aside");

        assert_eq!(app.state.composer_text(), "keep this");
        assert_eq!(app.state.composer().parked(), None);
        let messages = &app.state.active_thread().messages;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "aside");

        // Enter on the restored draft sends it as chat
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.active_thread().outbound_messages().count(), 1);
    }

    #[test]
    fn test_send_without_draft_reports_nothing_to_send() {
        let mut app = app();
        type_line(&mut app, "/send");

        let messages = &app.state.active_thread().messages;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "Nothing to send.");
        assert!(messages[0].is_local());
    }

    #[test]
    fn test_hand_typed_text_is_not_parked() {
        let mut app = app();
        type_line(&mut app, "and/or");

        let sent: Vec<&str> = app
            .state
            .active_thread()
            .outbound_messages()
            .map(|message| message.content.as_str())
            .collect();
        assert_eq!(sent, vec!["and/or"]);
    }

    #[test]
    fn test_overlays_and_quit() {
        let mut app = app();

        press(&mut app, KeyCode::F(1));
        assert!(app.state.show_help);
        // Quit key closes the overlay instead of exiting
        press(&mut app, KeyCode::Esc);
        assert!(!app.state.show_help);
        assert!(!app.state.exit);

        press(&mut app, KeyCode::F(2));
        assert_eq!(app.state.mode, AppMode::ThreadFinder);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.mode, AppMode::Compose);

        press(&mut app, KeyCode::Esc);
        assert!(app.state.exit);
    }

    #[test]
    fn test_thread_finder_switches_by_query() {
        let mut app = app();
        type_line(&mut app, "/new");
        type_line(&mut app, "/rename Bug triage");
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.state.threads().active_id().as_str(), "main");

        press(&mut app, KeyCode::F(2));
        for c in "triage".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.threads().active_id().as_str(), "thread-2");
        assert_eq!(app.state.mode, AppMode::Compose);
    }
}
