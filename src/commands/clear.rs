use crate::{
    slash_command::{builder::CommandBuilder, registry::SlashCommand},
    types::ThreadMessage,
};
use std::rc::Rc;

pub fn create(_prefix: char) -> Rc<dyn SlashCommand> {
    CommandBuilder::new(
        "clear",
        "Clear the current thread's messages",
        |args, ctx| {
            let note = args.trim();
            let seed = if note.is_empty() {
                Vec::new()
            } else {
                vec![ThreadMessage::local(note)]
            };
            ctx.reset_thread(seed);
        },
    )
    .usage("clear [note]")
    .build()
}
