mod clear;
mod edit;
mod help;
mod new_thread;
mod note;
mod rename;
mod send;
mod switch;
mod threads;

use crate::slash_command::{
    registry::{CommandRegistry, CommandSummary},
    RegistryError,
};

/// Register every built-in command, with help under `help_name`. Help lists what was registered
/// before it plus the built-ins, in registration order, with itself first among them.
pub fn register_all_commands(
    registry: &mut CommandRegistry,
    prefix: char,
    help_name: &str,
) -> Result<(), RegistryError> {
    let builtins = vec![
        threads::create(prefix),
        new_thread::create(prefix),
        switch::create(prefix),
        rename::create(prefix),
        clear::create(prefix),
        edit::create(prefix),
        send::create(prefix),
        note::create(prefix),
    ];

    let mut listing = registry.summaries();
    listing.push(help::summary(help_name));
    listing.extend(
        builtins
            .iter()
            .map(|command| CommandSummary::of(command.as_ref())),
    );

    registry.register(help::create(prefix, help_name, listing))?;
    for command in builtins {
        registry.register(command)?;
    }
    Ok(())
}

/// A registry holding only the built-in commands.
pub fn registry(prefix: char, help_name: &str) -> Result<CommandRegistry, RegistryError> {
    let mut registry = CommandRegistry::new();
    register_all_commands(&mut registry, prefix, help_name)?;
    Ok(registry)
}
