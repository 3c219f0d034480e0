use crate::slash_command::{builder::CommandBuilder, registry::SlashCommand};
use std::rc::Rc;

pub fn create(_prefix: char) -> Rc<dyn SlashCommand> {
    CommandBuilder::new(
        "send",
        "Send the pending input, or the given text",
        |args, ctx| {
            if !args.trim().is_empty() {
                ctx.set_composer_text(args);
            }
            if ctx.composer_text().trim().is_empty() {
                ctx.append_local("Nothing to send.");
                return;
            }
            ctx.send_composer();
        },
    )
    .usage("send [text]")
    .build()
}
