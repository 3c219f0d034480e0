use crate::slash_command::{builder::CommandBuilder, registry::SlashCommand};
use std::rc::Rc;

pub fn create(prefix: char) -> Rc<dyn SlashCommand> {
    CommandBuilder::new(
        "rename",
        "Rename the current thread",
        move |args, ctx| {
            let title = args.trim();
            if title.is_empty() {
                ctx.append_local(&format!("Usage: {prefix}rename <title>"));
                return;
            }

            let id = ctx.threads_state().active_thread_id;
            match ctx.rename_thread(&id, title) {
                Ok(()) => ctx.append_local(&format!("Renamed thread to \"{title}\"")),
                Err(err) => ctx.append_local(&format!("Cannot rename: {err}")),
            }
        },
    )
    .usage("rename <title>")
    .build()
}
