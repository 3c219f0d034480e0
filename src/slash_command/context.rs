//! The capability set a command handler is given to reach the host UI.
//!
//! Handlers only ever see `&mut dyn SlashCommandContext`. The host implements the traits over
//! its own state and hands a fresh borrow to every dispatch, so neither the registry nor the
//! dispatcher holds on to it between calls.

use crate::types::{ThreadId, ThreadMessage};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("no thread with id '{0}'")]
    UnknownThread(ThreadId),
}

/// Snapshot of a single thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadState {
    pub id: ThreadId,
    pub title: String,
    pub message_count: usize,
}

/// Snapshot of the thread collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadListState {
    pub main_thread_id: ThreadId,
    pub active_thread_id: ThreadId,
    /// All thread ids in creation order.
    pub thread_ids: Vec<ThreadId>,
}

/// Operations on the currently active thread's transcript.
pub trait ThreadContext {
    /// Replace the visible message list with `seed` (empty to clear).
    fn reset_thread(&mut self, seed: Vec<ThreadMessage>);
    fn append_message(&mut self, message: ThreadMessage);
}

/// Operations on the active thread's pending input.
pub trait ComposerContext {
    fn composer_text(&self) -> String;
    fn set_composer_text(&mut self, text: &str);
    /// Send the pending text through the normal send path. Does nothing when it is blank.
    fn send_composer(&mut self);
}

/// Operations on the collection of threads.
pub trait ThreadListContext {
    fn threads_state(&self) -> ThreadListState;

    /// Make `id` the active thread for all subsequent thread-scoped operations.
    fn switch_to_thread(&mut self, id: &ThreadId) -> Result<(), ContextError>;

    /// Create a brand-new thread, make it active, and return its id.
    fn switch_to_new_thread(&mut self) -> ThreadId;

    /// Change a thread's display title. Its id and messages are untouched.
    fn rename_thread(&mut self, id: &ThreadId, title: &str) -> Result<(), ContextError>;

    fn thread_state(&self, id: &ThreadId) -> Option<ThreadState>;
}

/// Everything a slash command handler may touch.
pub trait SlashCommandContext: ThreadContext + ComposerContext + ThreadListContext {
    /// Show a message in the active transcript that is never transmitted to the model.
    fn append_local(&mut self, text: &str);
}
