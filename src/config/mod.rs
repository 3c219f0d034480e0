mod defaults;
use crossterm::event::KeyCode;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("override config path does not exist: {}", .0.display())]
    MissingOverride(PathBuf),

    #[error("error reading config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub commands: CommandsConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default = "defaults::config_path")]
    pub config_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            commands: CommandsConfig::default(),
            ui: UiConfig::default(),
            keybindings: KeybindingsConfig::default(),
            logging: LoggingConfig::default(),
            config_path: defaults::config_path(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommandsConfig {
    /// Character that marks a line as a slash command.
    #[serde(default = "defaults::commands::prefix")]
    pub prefix: char,
    /// Name the help command is registered under, and the one unknown commands point to.
    #[serde(default = "defaults::commands::help_command")]
    pub help_command: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        CommandsConfig {
            prefix: defaults::commands::prefix(),
            help_command: defaults::commands::help_command(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UiConfig {
    #[serde(default = "defaults::ui::thread_list_width")]
    pub thread_list_width: u16,
    #[serde(default = "defaults::ui::user_color")]
    pub user_color: String,
    #[serde(default = "defaults::ui::assistant_color")]
    pub assistant_color: String,
    #[serde(default = "defaults::ui::local_color")]
    pub local_color: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            thread_list_width: defaults::ui::thread_list_width(),
            user_color: defaults::ui::user_color(),
            assistant_color: defaults::ui::assistant_color(),
            local_color: defaults::ui::local_color(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct KeybindingsConfig {
    #[serde(default = "defaults::keys::send")]
    pub send: KeyCode,

    #[serde(default = "defaults::keys::quit")]
    pub quit: KeyCode,

    #[serde(default = "defaults::keys::help")]
    pub help: KeyCode,

    #[serde(default = "defaults::keys::thread_finder")]
    pub thread_finder: KeyCode,

    #[serde(default = "defaults::keys::next_thread")]
    pub next_thread: KeyCode,

    #[serde(default = "defaults::keys::previous_thread")]
    pub previous_thread: KeyCode,

    #[serde(default = "defaults::keys::history_previous")]
    pub history_previous: KeyCode,

    #[serde(default = "defaults::keys::history_next")]
    pub history_next: KeyCode,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            send: defaults::keys::send(),
            quit: defaults::keys::quit(),
            help: defaults::keys::help(),
            thread_finder: defaults::keys::thread_finder(),
            next_thread: defaults::keys::next_thread(),
            previous_thread: defaults::keys::previous_thread(),
            history_previous: defaults::keys::history_previous(),
            history_next: defaults::keys::history_next(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "slashline=debug". SLASHLINE_LOG takes precedence.
    #[serde(default = "defaults::logging::level")]
    pub level: String,
    #[serde(default = "defaults::logging::file")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::logging::level(),
            file: defaults::logging::file(),
        }
    }
}

lazy_static! {
    pub static ref CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::default());
}

/// Loads application configuration from a file.
///
/// This function handles loading application configuration with the following priorities:
/// 1. From a specified override path if provided
/// 2. From the default config location (platform-specific user config directory following XDG Base
///    Directory Specification)
/// 3. Use default configuration values if no config file exists
///
/// The loaded configuration is stored in the global `CONFIG` static for application-wide access.
///
/// # Arguments
/// * `path_override` - Optional path to a configuration file that overrides the default location
///
/// # Returns
/// * `Ok(AppConfig)` - Successfully loaded or created configuration
/// * `Err(ConfigError)` - The override is missing, or a config file could not be read or parsed
pub fn load_config(path_override: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    // Check for path override first
    if let Some(path) = path_override {
        if !path.exists() {
            return Err(ConfigError::MissingOverride(path));
        }
        return read_config_file(&path).map(store_config);
    }

    // Try to load from default config path if it exists
    if let Some(config_path) = defaults::config_path() {
        if config_path.exists() {
            return read_config_file(&config_path).map(store_config);
        }
    }

    // Use default configuration if no config file was found or provided
    Ok(load_default_config())
}

fn read_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut loaded_config =
        toml::from_str::<AppConfig>(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    // Store the path in the config
    loaded_config.config_path = Some(path.to_path_buf());
    Ok(loaded_config)
}

fn store_config(config: AppConfig) -> AppConfig {
    let mut global_config = CONFIG.write().unwrap_or_else(PoisonError::into_inner);
    *global_config = config.clone();
    config
}

// Build an AppConfig::default() and set it to the global CONFIG variable. This is public so that
// unit tests can access it.
pub fn load_default_config() -> AppConfig {
    store_config(AppConfig::default())
}

pub fn read_config() -> AppConfig {
    CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
