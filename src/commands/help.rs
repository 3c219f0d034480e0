use crate::slash_command::{
    builder::CommandBuilder,
    registry::{CommandSummary, SlashCommand},
};
use std::rc::Rc;

const DESCRIPTION: &str = "List commands or show details for one";

fn usage(name: &str) -> String {
    format!("{name} [command]")
}

/// Help is registered under a configurable name, so its summary is built from that name.
pub fn summary(name: &str) -> CommandSummary {
    CommandSummary {
        name: name.to_string(),
        description: DESCRIPTION.to_string(),
        usage: usage(name),
    }
}

pub fn create(prefix: char, name: &str, listing: Vec<CommandSummary>) -> Rc<dyn SlashCommand> {
    let help_name = name.to_string();
    CommandBuilder::new(name, DESCRIPTION, move |args, ctx| {
        let wanted = args.trim();
        let wanted = wanted.strip_prefix(prefix).unwrap_or(wanted);

        if wanted.is_empty() {
            ctx.append_local(&render_listing(prefix, &listing));
            return;
        }

        match listing.iter().find(|command| command.name == wanted) {
            Some(command) => ctx.append_local(&format!(
                "{prefix}{}\n  {}",
                command.usage, command.description
            )),
            None => ctx.append_local(&format!(
                "No command named {prefix}{wanted}. Type {prefix}{help_name} to list commands."
            )),
        }
    })
    .usage(usage(name))
    .build()
}

fn render_listing(prefix: char, listing: &[CommandSummary]) -> String {
    let width = listing
        .iter()
        .map(|command| command.usage.chars().count())
        .max()
        .unwrap_or(0);

    let mut text = String::from("Commands:");
    for command in listing {
        text.push_str(&format!(
            "\n  {prefix}{:<width$}  {}",
            command.usage, command.description
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use crate::{
        commands,
        slash_command::{DispatchOutcome, Dispatcher},
        state::AppState,
    };
    use insta::assert_snapshot;

    fn run(line: &str) -> String {
        let dispatcher = Dispatcher::new(commands::registry('/', "help").unwrap(), '/', "help");
        let mut state = AppState::new();
        dispatcher.dispatch(line, &mut state);
        let messages = &state.active_thread().messages;
        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_local());
        messages[0].content.clone()
    }

    #[test]
    fn test_help_lists_all_commands() {
        assert_snapshot!(run("/help"), @r"
        Commands:
          /help [command]      List commands or show details for one
          /threads             List all threads
          /new [title]         Start a new thread and switch to it
          /switch <thread-id>  Switch to an existing thread
          /rename <title>      Rename the current thread
          /clear [note]        Clear the current thread's messages
          /edit <text>         Replace the pending input
          /send [text]         Send the pending input, or the given text
          /note <text>         Add a note visible only to you
        ");
    }

    #[test]
    fn test_help_for_single_command() {
        assert_eq!(
            run("/help rename"),
            "/rename <title>\n  Rename the current thread"
        );
        // A leading prefix on the argument is accepted
        assert_eq!(
            run("/help /switch"),
            "/switch <thread-id>\n  Switch to an existing thread"
        );
    }

    #[test]
    fn test_help_for_unknown_command() {
        assert_eq!(
            run("/help bogus"),
            "No command named /bogus. Type /help to list commands."
        );
    }

    #[test]
    fn test_renamed_help_is_reachable_from_unknown_command_hint() {
        let dispatcher =
            Dispatcher::new(commands::registry('/', "commands").unwrap(), '/', "commands");
        let mut state = AppState::new();

        dispatcher.dispatch("/bogus", &mut state);
        let hint = state.active_thread().messages[0].content.clone();
        assert_eq!(hint, "Unknown command: /bogus. Type /commands to list commands.");

        assert_eq!(
            dispatcher.dispatch("/commands", &mut state),
            DispatchOutcome::Executed {
                name: "commands".to_string()
            }
        );
        let listing = &state.active_thread().messages[1].content;
        assert!(listing.starts_with("Commands:\n  /commands [command]"));
        assert!(matches!(
            dispatcher.dispatch("/help", &mut state),
            DispatchOutcome::Unknown { .. }
        ));
    }
}
