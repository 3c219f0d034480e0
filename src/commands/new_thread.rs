use crate::slash_command::{builder::CommandBuilder, registry::SlashCommand};
use std::rc::Rc;

pub fn create(_prefix: char) -> Rc<dyn SlashCommand> {
    CommandBuilder::new(
        "new",
        "Start a new thread and switch to it",
        |args, ctx| {
            let title = args.trim();
            let id = ctx.switch_to_new_thread();
            if !title.is_empty() && ctx.rename_thread(&id, title).is_err() {
                ctx.append_local(&format!("Could not title thread {id}"));
            }

            let title = ctx
                .thread_state(&id)
                .map_or_else(|| id.to_string(), |thread| thread.title);
            ctx.append_local(&format!("Started {title} ({id})"));
        },
    )
    .usage("new [title]")
    .build()
}
