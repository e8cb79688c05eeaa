//! Chat completion response and error-body types.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Chat completion response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// Response identifier
    pub id: String,
    /// Object kind tag (e.g. "chat.completion")
    pub object: String,
    /// Creation timestamp (Unix seconds)
    pub created: i64,
    /// Model that produced the completion
    pub model: String,
    /// Completion choices, in order
    pub choices: Vec<Choice>,
    /// Token accounting
    #[serde(default)]
    pub usage: Usage,
}

/// A completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Position of this choice in the response
    pub index: u32,
    /// The generated message
    pub message: Message,
    /// Reason generation stopped; empty when the API omits it
    #[serde(default)]
    pub finish_reason: String,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: u32,
    /// Total tokens
    #[serde(default)]
    pub total_tokens: u32,
}

/// Error body returned by the API on failing requests.
///
/// The HTTP status code is not part of this shape; the transport layer
/// captures it separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Nested API-supplied error object
    #[serde(default)]
    pub error: ErrorDetail,
}

/// API-supplied error details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
    /// Machine-readable error code
    #[serde(default)]
    pub code: String,
}
