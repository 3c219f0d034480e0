use super::{context::SlashCommandContext, registry::SlashCommand};
use std::rc::Rc;

type Handler = Box<dyn Fn(&str, &mut dyn SlashCommandContext)>;

/// A builder pattern implementation for easily creating commands
pub struct CommandBuilder {
    name: String,
    description: String,
    usage: Option<String>,
    handler: Handler,
}

impl CommandBuilder {
    /// Create a new command builder with the required name, description and handler
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&str, &mut dyn SlashCommandContext) + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            usage: None,
            handler: Box::new(handler),
        }
    }

    /// Set the argument-syntax hint shown by help. Defaults to the bare command name.
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// Build the command
    pub fn build(self) -> Rc<dyn SlashCommand> {
        let usage = self.usage.unwrap_or_else(|| self.name.clone());
        Rc::new(BuiltCommand {
            name: self.name,
            description: self.description,
            usage,
            handler: self.handler,
        })
    }
}

/// The internal command implementation created by the builder
struct BuiltCommand {
    name: String,
    description: String,
    usage: String,
    handler: Handler,
}

impl SlashCommand for BuiltCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn usage(&self) -> &str {
        &self.usage
    }

    fn execute(&self, args: &str, context: &mut dyn SlashCommandContext) {
        (self.handler)(args, context)
    }
}
