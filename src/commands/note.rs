use crate::slash_command::{builder::CommandBuilder, registry::SlashCommand};
use std::rc::Rc;

pub fn create(prefix: char) -> Rc<dyn SlashCommand> {
    CommandBuilder::new(
        "note",
        "Add a note visible only to you",
        move |args, ctx| {
            let text = args.trim();
            if text.is_empty() {
                ctx.append_local(&format!("Usage: {prefix}note <text>"));
            } else {
                ctx.append_local(text);
            }
        },
    )
    .usage("note <text>")
    .build()
}
