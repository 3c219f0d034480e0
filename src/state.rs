use crate::{
    slash_command::context::{
        ComposerContext, ContextError, SlashCommandContext, ThreadContext, ThreadListContext,
        ThreadListState, ThreadState,
    },
    thread_finder::{state::ThreadFinderState, ThreadFinderStateAccess},
    threads::{composer::ComposerState, Thread, ThreadStore},
    types::{AppMode, OutboxEntry, ThreadId, ThreadMessage},
};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Flag indicating whether the application should exit.
    pub exit: bool,

    /// The mode the application is currently in.
    pub mode: AppMode,

    /// Flag indicating that the help overlay is currently being displayed
    pub show_help: bool,

    /// All conversation threads and which one is active. Only mutated through the methods below
    /// and the slash command context, so it is not public.
    threads: ThreadStore,

    /// Messages sent but not yet handed to the model boundary, oldest first.
    outbox: Vec<OutboxEntry>,

    /// State of the thread finder overlay. Accessed via ThreadFinderStateAccess.
    thread_finder_state: ThreadFinderState,
}

impl ThreadFinderStateAccess for AppState {
    fn thread_finder_state(&self) -> &ThreadFinderState {
        &self.thread_finder_state
    }

    fn thread_finder_state_mut(&mut self) -> &mut ThreadFinderState {
        &mut self.thread_finder_state
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threads(&self) -> &ThreadStore {
        &self.threads
    }

    pub fn active_thread(&self) -> &Thread {
        self.threads.active()
    }

    pub fn composer(&self) -> &ComposerState {
        &self.threads.active().composer
    }

    pub fn composer_mut(&mut self) -> &mut ComposerState {
        &mut self.threads.active_mut().composer
    }

    pub fn outbox(&self) -> &[OutboxEntry] {
        &self.outbox
    }

    pub fn drain_outbox(&mut self) -> Vec<OutboxEntry> {
        std::mem::take(&mut self.outbox)
    }

    /// Normal send path for chat content: the text lands in the active transcript and is queued
    /// for the model under the active thread's id.
    pub fn send_chat(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        let thread = self.threads.active_mut();
        thread.messages.push(ThreadMessage::user(text));
        self.outbox.push(OutboxEntry {
            thread_id: thread.id.clone(),
            content: text.to_string(),
        });
    }

    /// Switch to the thread `offset` places away in creation order, wrapping around.
    pub fn cycle_thread(&mut self, offset: isize) {
        let target = self.threads.neighbour_id(offset);
        if let Err(err) = self.switch_to_thread(&target) {
            warn!(%err, offset, "could not cycle to neighbouring thread");
        }
    }

    /// Populate the finder with the current threads and show it.
    pub fn open_thread_finder(&mut self) {
        let entries = self
            .threads
            .iter()
            .map(|thread| (thread.id.clone(), thread.title.clone()))
            .collect();
        self.thread_finder_state.set_threads(entries);
        self.mode = AppMode::ThreadFinder;
    }

    pub fn close_thread_finder(&mut self) {
        self.thread_finder_state.reset();
        self.mode = AppMode::Compose;
    }

    /// Switch to the highlighted finder entry, if any, and close the finder.
    pub fn confirm_thread_finder(&mut self) {
        if let Some(id) = self.thread_finder_state.highlighted_id() {
            if let Err(err) = self.switch_to_thread(&id) {
                warn!(%err, "thread finder entry no longer matches a thread");
            }
        }
        self.close_thread_finder();
    }
}

impl ThreadContext for AppState {
    fn reset_thread(&mut self, seed: Vec<ThreadMessage>) {
        self.threads.active_mut().messages = seed;
    }

    fn append_message(&mut self, message: ThreadMessage) {
        self.threads.active_mut().messages.push(message);
    }
}

impl ComposerContext for AppState {
    fn composer_text(&self) -> String {
        self.composer().input_buffer.clone()
    }

    fn set_composer_text(&mut self, text: &str) {
        self.composer_mut().set_text(text);
    }

    fn send_composer(&mut self) {
        if self.composer().input_buffer.trim().is_empty() {
            return;
        }
        let text = self.composer_mut().take();
        self.send_chat(&text);
    }
}

impl ThreadListContext for AppState {
    fn threads_state(&self) -> ThreadListState {
        ThreadListState {
            main_thread_id: self.threads.main_id().clone(),
            active_thread_id: self.threads.active_id().clone(),
            thread_ids: self.threads.ids(),
        }
    }

    fn switch_to_thread(&mut self, id: &ThreadId) -> Result<(), ContextError> {
        if self.threads.activate(id) {
            info!(thread = %id, "switched thread");
            Ok(())
        } else {
            Err(ContextError::UnknownThread(id.clone()))
        }
    }

    fn switch_to_new_thread(&mut self) -> ThreadId {
        let id = self.threads.create_and_activate();
        info!(thread = %id, "created thread");
        id
    }

    fn rename_thread(&mut self, id: &ThreadId, title: &str) -> Result<(), ContextError> {
        match self.threads.get_mut(id) {
            Some(thread) => {
                thread.title = title.to_string();
                Ok(())
            }
            None => Err(ContextError::UnknownThread(id.clone())),
        }
    }

    fn thread_state(&self, id: &ThreadId) -> Option<ThreadState> {
        self.threads.get(id).map(|thread| ThreadState {
            id: thread.id.clone(),
            title: thread.title.clone(),
            message_count: thread.messages.len(),
        })
    }
}

impl SlashCommandContext for AppState {
    fn append_local(&mut self, text: &str) {
        self.append_message(ThreadMessage::local(text));
    }
}
