//! Slash commands: lines starting with the prefix character run a registered UI action instead
//! of being sent as chat.
//!
//! Input flows parser -> registry lookup -> handler, and handlers only reach the host through
//! the traits in [`context`].

pub mod builder;
pub mod context;
pub mod dispatcher;
pub mod parser;
pub mod registry;

pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use registry::RegistryError;
