use crate::slash_command::{builder::CommandBuilder, registry::SlashCommand};
use std::rc::Rc;

pub fn create(_prefix: char) -> Rc<dyn SlashCommand> {
    CommandBuilder::new("threads", "List all threads", |_args, ctx| {
        let summary = ctx.threads_state();
        let width = summary
            .thread_ids
            .iter()
            .map(|id| id.as_str().chars().count())
            .max()
            .unwrap_or(0);

        let mut text = String::from("Threads:");
        for id in &summary.thread_ids {
            let Some(thread) = ctx.thread_state(id) else {
                continue;
            };
            let marker = if *id == summary.active_thread_id { '*' } else { ' ' };
            text.push_str(&format!(
                "\n{marker} {:<width$}  {}",
                id.as_str(),
                thread.title
            ));
            if *id == summary.main_thread_id {
                text.push_str(" [main]");
            }
        }
        ctx.append_local(&text);
    })
    .build()
}
