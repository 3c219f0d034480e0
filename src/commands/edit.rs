use crate::slash_command::{builder::CommandBuilder, registry::SlashCommand};
use std::rc::Rc;

pub fn create(prefix: char) -> Rc<dyn SlashCommand> {
    CommandBuilder::new(
        "edit",
        "Replace the pending input",
        move |args, ctx| {
            if args.trim().is_empty() {
                ctx.append_local(&format!("Usage: {prefix}edit <text>"));
                return;
            }
            // Verbatim: leading spaces beyond the separator are part of the text
            ctx.set_composer_text(args);
        },
    )
    .usage("edit <text>")
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{slash_command::context::ComposerContext, state::AppState};

    #[test]
    fn test_edit_overwrites_composer() {
        let command = create('/');
        let mut state = AppState::new();
        state.set_composer_text("old draft");

        command.execute("  new draft", &mut state);

        assert_eq!(state.composer_text(), "  new draft");
        assert_eq!(state.composer().cursor_position, 11);
        assert!(state.active_thread().messages.is_empty());
        assert!(state.outbox().is_empty());
    }

    #[test]
    fn test_edit_empty_args() {
        let command = create('/');
        let mut state = AppState::new();
        state.set_composer_text("keep me");

        command.execute("", &mut state);

        assert_eq!(state.composer_text(), "keep me");
        assert_eq!(
            state.active_thread().messages[0].content,
            "Usage: /edit <text>"
        );
    }
}
