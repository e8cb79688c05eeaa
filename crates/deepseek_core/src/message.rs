//! Message type for conversation history.

use serde::{Deserialize, Serialize};

/// A message in the chat format.
///
/// The role is an open string tag ("system", "user", "assistant"); the
/// library passes it through unvalidated and the API rejects tags it does
/// not recognize.
///
/// # Examples
///
/// ```
/// use deepseek_core::Message;
///
/// let message = Message::user("Hello!");
/// assert_eq!(message.role, "user");
/// assert_eq!(message.content, "Hello!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl Message {
    /// Creates a message with an arbitrary role tag.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}
