use std::fmt;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum AppMode {
    #[default]
    Compose,
    ThreadFinder,
}

/// Identifier of a conversation thread. Stable for the life of the thread; renaming only touches
/// the title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThreadId(String);

impl ThreadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThreadId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Role {
    User,
    // Replies arrive from the model boundary, which this crate only logs to
    #[allow(dead_code)]
    Assistant,
    System,
}

/// Whether a transcript entry would be transmitted to the model.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Visibility {
    #[default]
    Shared,
    LocalOnly,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ThreadMessage {
    pub role: Role,
    pub content: String,
    pub visibility: Visibility,
}

impl ThreadMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            visibility: Visibility::Shared,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Feedback shown in the transcript that never reaches the model.
    pub fn local(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            visibility: Visibility::LocalOnly,
        }
    }

    pub fn is_local(&self) -> bool {
        self.visibility == Visibility::LocalOnly
    }
}

/// A message handed to the model boundary, tagged with the thread that was active when it was sent.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OutboxEntry {
    pub thread_id: ThreadId,
    pub content: String,
}
