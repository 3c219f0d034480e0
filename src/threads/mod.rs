pub mod composer;

use crate::types::{ThreadId, ThreadMessage};
use composer::ComposerState;
use indexmap::IndexMap;

pub const MAIN_THREAD_ID: &str = "main";
pub const MAIN_THREAD_TITLE: &str = "Main";

/// A single conversation transcript with its own pending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id: ThreadId,
    pub title: String,
    pub messages: Vec<ThreadMessage>,
    pub composer: ComposerState,
}

impl Thread {
    pub fn new(id: ThreadId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            messages: Vec::new(),
            composer: ComposerState::new(),
        }
    }

    /// The part of the transcript a model would receive. Local-only entries are never included.
    pub fn outbound_messages(&self) -> impl Iterator<Item = &ThreadMessage> {
        self.messages.iter().filter(|message| !message.is_local())
    }
}

/// All threads known to the UI, in creation order, plus which one is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadStore {
    threads: IndexMap<ThreadId, Thread>,
    main_id: ThreadId,
    active_id: ThreadId,
    next_number: u64,
}

impl Default for ThreadStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadStore {
    /// Create a store holding only the main thread, which is active.
    pub fn new() -> Self {
        let main_id = ThreadId::new(MAIN_THREAD_ID);
        let mut threads = IndexMap::new();
        threads.insert(
            main_id.clone(),
            Thread::new(main_id.clone(), MAIN_THREAD_TITLE),
        );
        Self {
            threads,
            active_id: main_id.clone(),
            main_id,
            next_number: 2,
        }
    }

    pub fn main_id(&self) -> &ThreadId {
        &self.main_id
    }

    pub fn active_id(&self) -> &ThreadId {
        &self.active_id
    }

    pub fn ids(&self) -> Vec<ThreadId> {
        self.threads.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Thread> {
        self.threads.values()
    }

    pub fn get(&self, id: &ThreadId) -> Option<&Thread> {
        self.threads.get(id)
    }

    pub fn get_mut(&mut self, id: &ThreadId) -> Option<&mut Thread> {
        self.threads.get_mut(id)
    }

    // The active id always refers to a stored thread: threads are never removed and activation
    // only accepts known ids. Both accessors still fall back to the main thread rather than panic.
    pub fn active(&self) -> &Thread {
        match self.threads.get(&self.active_id) {
            Some(thread) => thread,
            None => &self.threads[0],
        }
    }

    pub fn active_mut(&mut self) -> &mut Thread {
        let index = self.threads.get_index_of(&self.active_id).unwrap_or(0);
        &mut self.threads[index]
    }

    /// Make an existing thread active. Returns false, leaving the active thread untouched, when the
    /// id is unknown.
    pub fn activate(&mut self, id: &ThreadId) -> bool {
        if self.threads.contains_key(id) {
            self.active_id = id.clone();
            true
        } else {
            false
        }
    }

    /// Create a thread with the next free id and make it active.
    pub fn create_and_activate(&mut self) -> ThreadId {
        let mut id = ThreadId::new(format!("thread-{}", self.next_number));
        // Skip numbers already taken by threads created elsewhere with explicit ids
        while self.threads.contains_key(&id) {
            self.next_number += 1;
            id = ThreadId::new(format!("thread-{}", self.next_number));
        }
        let title = format!("Thread {}", self.next_number);
        self.next_number += 1;

        self.threads
            .insert(id.clone(), Thread::new(id.clone(), title));
        self.active_id = id.clone();
        id
    }

    /// The thread `offset` places away from the active one in creation order, wrapping around.
    pub fn neighbour_id(&self, offset: isize) -> ThreadId {
        let len = self.threads.len() as isize;
        let current = self.threads.get_index_of(&self.active_id).unwrap_or(0) as isize;
        let target = (current + offset).rem_euclid(len) as usize;
        self.threads
            .get_index(target)
            .map_or_else(|| self.main_id.clone(), |(id, _)| id.clone())
    }
}
