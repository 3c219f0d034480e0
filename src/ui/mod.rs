pub mod layout;
mod widgets;

use crate::{config::AppConfig, state::AppState, types::AppMode};
use layout::create_layout;
use widgets::{
    composer_box::ComposerBoxWidget, help_menu::HelpMenuWidget, thread_finder::ThreadFinderWidget,
    thread_list::ThreadListWidget, title_bar::TitleBarWidget, transcript::TranscriptWidget,
};

// Main draw function that coordinates all UI components
pub fn draw(frame: &mut ratatui::Frame<'_>, state: &mut AppState, config: &AppConfig) {
    let area = frame.area();

    // If help is showing, just display that and return
    if state.show_help {
        let help = HelpMenuWidget::new(&config.keybindings, &config.commands);
        frame.render_stateful_widget(help, area, state);
        return;
    }

    let layout = create_layout(area, config.ui.thread_list_width);
    frame.render_stateful_widget(TitleBarWidget::default(), layout.title, state);
    frame.render_stateful_widget(ThreadListWidget::default(), layout.thread_list, state);
    frame.render_stateful_widget(
        TranscriptWidget::from_config(&config.ui),
        layout.transcript,
        state,
    );
    frame.render_stateful_widget(
        ComposerBoxWidget::new(config.commands.prefix),
        layout.composer,
        state,
    );

    if state.mode == AppMode::ThreadFinder {
        frame.render_stateful_widget(ThreadFinderWidget::default(), area, state);
    }
}
