use crate::{
    slash_command::{builder::CommandBuilder, registry::SlashCommand},
    types::ThreadId,
};
use std::rc::Rc;

pub fn create(prefix: char) -> Rc<dyn SlashCommand> {
    CommandBuilder::new(
        "switch",
        "Switch to an existing thread",
        move |args, ctx| {
            let target = args.trim();
            if target.is_empty() {
                ctx.append_local(&format!("Usage: {prefix}switch <thread-id>"));
                return;
            }

            let id = ThreadId::new(target);
            if ctx.threads_state().active_thread_id == id {
                ctx.append_local(&format!("Already in thread {id}"));
                return;
            }

            match ctx.switch_to_thread(&id) {
                Ok(()) => {
                    let title = ctx
                        .thread_state(&id)
                        .map_or_else(|| id.to_string(), |thread| thread.title);
                    ctx.append_local(&format!("Switched to {title} ({id})"));
                }
                Err(err) => ctx.append_local(&format!(
                    "Cannot switch: {err}. Type {prefix}threads to list threads."
                )),
            }
        },
    )
    .usage("switch <thread-id>")
    .build()
}
