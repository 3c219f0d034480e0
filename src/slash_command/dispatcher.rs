use super::{context::SlashCommandContext, parser::parse_line, registry::CommandRegistry};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use tracing::{debug, warn};

/// What happened to a dispatched line. All visible effects have already gone through the
/// context; this only tells the host whether it still has to send the line as chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Not a command. The caller sends the line unmodified through the normal send path.
    Chat,
    Executed { name: String },
    Unknown { name: String },
}

pub struct Dispatcher {
    registry: CommandRegistry,
    prefix: char,
    help_command: String,
    matcher: SkimMatcherV2,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry, prefix: char, help_command: impl Into<String>) -> Self {
        Self {
            registry,
            prefix,
            help_command: help_command.into(),
            matcher: SkimMatcherV2::default(),
        }
    }

    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// Process one raw input line to completion.
    pub fn dispatch(&self, line: &str, context: &mut dyn SlashCommandContext) -> DispatchOutcome {
        let Some(invocation) = parse_line(line, self.prefix) else {
            return DispatchOutcome::Chat;
        };

        match self.registry.lookup(invocation.name) {
            Some(command) => {
                debug!(command = invocation.name, args = invocation.args, "dispatching slash command");
                command.execute(invocation.args, context);
                DispatchOutcome::Executed {
                    name: invocation.name.to_string(),
                }
            }
            None => {
                warn!(command = invocation.name, "unknown slash command");
                context.append_local(&self.unknown_command_message(invocation.name));
                DispatchOutcome::Unknown {
                    name: invocation.name.to_string(),
                }
            }
        }
    }

    fn unknown_command_message(&self, name: &str) -> String {
        let mut message = format!(
            "Unknown command: {prefix}{name}. Type {prefix}{help} to list commands.",
            prefix = self.prefix,
            help = self.help_command,
        );
        if let Some(suggestion) = self.suggest(name) {
            message.push_str(&format!(" Did you mean {}{}?", self.prefix, suggestion));
        }
        message
    }

    // Best fuzzy match among registered names, if any.
    fn suggest(&self, name: &str) -> Option<&str> {
        if name.is_empty() {
            return None;
        }
        self.registry
            .names()
            .filter_map(|candidate| {
                self.matcher
                    .fuzzy_match(candidate, name)
                    .map(|score| (candidate, score))
            })
            .max_by_key(|(_, score)| *score)
            .map(|(candidate, _)| candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        commands,
        slash_command::{
            builder::CommandBuilder,
            context::{
                ComposerContext, ContextError, ThreadContext, ThreadListContext, ThreadListState,
                ThreadState,
            },
        },
        state::AppState,
        types::{ThreadId, ThreadMessage},
    };
    use std::{cell::RefCell, rc::Rc};

    /// Context that records every call it receives and has no real state behind it.
    #[derive(Default)]
    struct RecordingContext {
        calls: Vec<String>,
    }

    impl ThreadContext for RecordingContext {
        fn reset_thread(&mut self, seed: Vec<ThreadMessage>) {
            self.calls.push(format!("reset_thread({})", seed.len()));
        }

        fn append_message(&mut self, message: ThreadMessage) {
            self.calls.push(format!("append_message({})", message.content));
        }
    }

    impl ComposerContext for RecordingContext {
        fn composer_text(&self) -> String {
            String::new()
        }

        fn set_composer_text(&mut self, text: &str) {
            self.calls.push(format!("set_composer_text({text})"));
        }

        fn send_composer(&mut self) {
            self.calls.push("send_composer".to_string());
        }
    }

    impl ThreadListContext for RecordingContext {
        fn threads_state(&self) -> ThreadListState {
            ThreadListState {
                main_thread_id: ThreadId::new("main"),
                active_thread_id: ThreadId::new("main"),
                thread_ids: vec![ThreadId::new("main")],
            }
        }

        fn switch_to_thread(&mut self, id: &ThreadId) -> Result<(), ContextError> {
            self.calls.push(format!("switch_to_thread({id})"));
            Ok(())
        }

        fn switch_to_new_thread(&mut self) -> ThreadId {
            self.calls.push("switch_to_new_thread".to_string());
            ThreadId::new("thread-2")
        }

        fn rename_thread(&mut self, id: &ThreadId, title: &str) -> Result<(), ContextError> {
            self.calls.push(format!("rename_thread({id}, {title})"));
            Ok(())
        }

        fn thread_state(&self, _id: &ThreadId) -> Option<ThreadState> {
            None
        }
    }

    impl SlashCommandContext for RecordingContext {
        fn append_local(&mut self, text: &str) {
            self.calls.push(format!("append_local({text})"));
        }
    }

    /// Registry whose commands record the arguments they were invoked with.
    fn recording_dispatcher(names: &[&str]) -> (Dispatcher, Rc<RefCell<Vec<(String, String)>>>) {
        let invocations = Rc::new(RefCell::new(Vec::new()));
        let mut registry = CommandRegistry::new();
        for name in names {
            let log = Rc::clone(&invocations);
            let command_name = name.to_string();
            registry
                .register(
                    CommandBuilder::new(*name, "test command", move |args, _ctx| {
                        log.borrow_mut()
                            .push((command_name.clone(), args.to_string()));
                    })
                    .build(),
                )
                .unwrap();
        }
        (Dispatcher::new(registry, '/', "help"), invocations)
    }

    #[test]
    fn test_bare_name_invokes_command_with_empty_args() {
        let names = ["help", "threads", "new", "rename", "send"];
        let (dispatcher, invocations) = recording_dispatcher(&names);
        let mut context = RecordingContext::default();

        for name in names {
            let outcome = dispatcher.dispatch(&format!("/{name}"), &mut context);
            assert_eq!(
                outcome,
                DispatchOutcome::Executed {
                    name: name.to_string()
                }
            );
        }

        let expected: Vec<(String, String)> = names
            .iter()
            .map(|name| (name.to_string(), String::new()))
            .collect();
        assert_eq!(*invocations.borrow(), expected);
        assert!(context.calls.is_empty());
    }

    #[test]
    fn test_args_keep_everything_after_one_separator() {
        let (dispatcher, invocations) = recording_dispatcher(&["name"]);
        let mut context = RecordingContext::default();

        dispatcher.dispatch("/name   arg1 arg2", &mut context);

        assert_eq!(
            *invocations.borrow(),
            vec![("name".to_string(), "  arg1 arg2".to_string())]
        );
    }

    #[test]
    fn test_chat_lines_touch_nothing() {
        let (dispatcher, invocations) = recording_dispatcher(&["rename"]);
        let mut context = RecordingContext::default();

        for line in ["hello there", "rename me", "", "  x /rename", "\\/rename"] {
            assert_eq!(dispatcher.dispatch(line, &mut context), DispatchOutcome::Chat);
        }

        assert!(invocations.borrow().is_empty());
        assert!(context.calls.is_empty());
    }

    #[test]
    fn test_chat_lines_leave_app_state_untouched() {
        let dispatcher = Dispatcher::new(commands::registry('/', "help").unwrap(), '/', "help");
        let mut state = AppState::new();
        state.set_composer_text("draft");
        let before = state.clone();

        dispatcher.dispatch("just chatting about /rename", &mut state);

        assert_eq!(state, before);
    }

    #[test]
    fn test_unknown_command_appends_exactly_one_local_message() {
        let (dispatcher, invocations) = recording_dispatcher(&["rename", "help"]);
        let mut context = RecordingContext::default();

        let outcome = dispatcher.dispatch("/unknown-xyz", &mut context);

        assert_eq!(
            outcome,
            DispatchOutcome::Unknown {
                name: "unknown-xyz".to_string()
            }
        );
        assert!(invocations.borrow().is_empty());
        assert_eq!(
            context.calls,
            vec!["append_local(Unknown command: /unknown-xyz. Type /help to list commands.)"]
        );
    }

    #[test]
    fn test_unknown_command_leaves_threads_and_composer_unchanged() {
        let dispatcher = Dispatcher::new(commands::registry('/', "help").unwrap(), '/', "help");
        let mut state = AppState::new();
        state.set_composer_text("pending");
        let before = state.clone();

        dispatcher.dispatch("/unknown-xyz", &mut state);

        assert_eq!(state.active_thread().composer, before.active_thread().composer);
        assert_eq!(state.threads().ids(), before.threads().ids());
        assert_eq!(state.threads().active_id(), before.threads().active_id());
        assert!(state.outbox().is_empty());

        let messages = &state.active_thread().messages;
        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_local());
    }

    #[test]
    fn test_unknown_command_suggests_close_name() {
        let (dispatcher, _) = recording_dispatcher(&["rename", "threads"]);
        let mut context = RecordingContext::default();

        dispatcher.dispatch("/ren", &mut context);

        assert_eq!(
            context.calls,
            vec!["append_local(Unknown command: /ren. Type /help to list commands. Did you mean /rename?)"]
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let (dispatcher, invocations) = recording_dispatcher(&["rename"]);
        let mut context = RecordingContext::default();

        let outcome = dispatcher.dispatch("/RENAME x", &mut context);

        assert!(matches!(outcome, DispatchOutcome::Unknown { .. }));
        assert!(invocations.borrow().is_empty());
    }

    #[test]
    fn test_bare_prefix_is_an_unknown_command() {
        let (dispatcher, _) = recording_dispatcher(&["help"]);
        let mut context = RecordingContext::default();

        let outcome = dispatcher.dispatch("/", &mut context);

        assert_eq!(
            outcome,
            DispatchOutcome::Unknown {
                name: String::new()
            }
        );
        assert_eq!(context.calls.len(), 1);
    }

    #[test]
    fn test_custom_prefix() {
        let invocations = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&invocations);
        let mut registry = CommandRegistry::new();
        registry
            .register(
                CommandBuilder::new("note", "test", move |args, _| {
                    log.borrow_mut().push(args.to_string());
                })
                .build(),
            )
            .unwrap();
        let dispatcher = Dispatcher::new(registry, ':', "help");
        let mut context = RecordingContext::default();

        assert_eq!(dispatcher.dispatch("/note hi", &mut context), DispatchOutcome::Chat);
        assert!(matches!(
            dispatcher.dispatch("  :note hi", &mut context),
            DispatchOutcome::Executed { .. }
        ));
        assert_eq!(*invocations.borrow(), vec!["hi".to_string()]);
    }

    #[test]
    fn test_rename_via_dispatch_only_touches_active_thread() {
        let dispatcher = Dispatcher::new(commands::registry('/', "help").unwrap(), '/', "help");
        let mut state = AppState::new();
        let other = state.switch_to_new_thread();
        state.switch_to_thread(&ThreadId::new("main")).unwrap();
        let active = state.threads_state().active_thread_id;

        dispatcher.dispatch("/rename My Title", &mut state);

        assert_eq!(state.thread_state(&active).unwrap().title, "My Title");
        assert_eq!(state.thread_state(&other).unwrap().title, "Thread 2");
    }
}
