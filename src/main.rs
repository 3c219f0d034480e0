mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod logging;
mod slash_command;
mod state;
mod thread_finder;
mod threads;
mod types;
mod ui;
use app::App;
use clap::Parser;
use cli::CliArgs;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use slash_command::Dispatcher;
use std::{error::Error, io};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();
    config::load_config(args.config_file)?;
    let mut config = config::read_config();
    if let Some(prefix) = args.prefix {
        config.commands.prefix = prefix;
    }

    let log_file = logging::resolve_log_file(args.log_file, &config.logging);
    // Held until exit so buffered log records are flushed
    let _log_guard = logging::init_logging(log_file.as_deref(), &config.logging.level)?;

    // Duplicate command names are a startup error, reported before the terminal is taken over
    let prefix = config.commands.prefix;
    let registry = commands::registry(prefix, &config.commands.help_command)?;
    info!(commands = registry.len(), %prefix, "registered slash commands");
    let dispatcher = Dispatcher::new(registry, prefix, config.commands.help_command.clone());

    let mut app = App::new(dispatcher, config);

    // Terminal setup
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = ratatui::init();

    let app_result = app.run(terminal);
    ratatui::restore();

    // Terminal cleanup
    disable_raw_mode()?;
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
        println!("{:?}", err)
    }

    app_result.map_err(Into::into)
}
