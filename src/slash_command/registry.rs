use super::context::SlashCommandContext;
use indexmap::IndexMap;
use std::rc::Rc;
use thiserror::Error;

pub trait SlashCommand {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn usage(&self) -> &str;
    fn execute(&self, args: &str, context: &mut dyn SlashCommandContext);
}

/// The user-facing description of a command, as listed by help.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSummary {
    pub name: String,
    pub description: String,
    pub usage: String,
}

impl CommandSummary {
    pub fn of(command: &dyn SlashCommand) -> Self {
        Self {
            name: command.name().to_string(),
            description: command.description().to_string(),
            usage: command.usage().to_string(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a slash command named '{name}' is already registered")]
    DuplicateCommand { name: String },
}

/// Commands keyed by unique name, kept in registration order.
pub struct CommandRegistry {
    commands: IndexMap<String, Rc<dyn SlashCommand>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    /// Add a command. A second command with an existing name is rejected and the first one stays.
    pub fn register(&mut self, command: Rc<dyn SlashCommand>) -> Result<(), RegistryError> {
        let name = command.name().to_string();
        if self.commands.contains_key(&name) {
            return Err(RegistryError::DuplicateCommand { name });
        }
        tracing::debug!(command = %name, "registered slash command");
        self.commands.insert(name, command);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Rc<dyn SlashCommand>> {
        self.commands.get(name)
    }

    pub fn list(&self) -> impl Iterator<Item = &Rc<dyn SlashCommand>> {
        self.commands.values()
    }

    pub fn summaries(&self) -> Vec<CommandSummary> {
        self.list()
            .map(|command| CommandSummary::of(command.as_ref()))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}
