//! Chat completion request type.

use crate::Message;
use derive_getters::Getters;
use serde::Serialize;

/// Chat completion request.
///
/// Sampling parameters are optional: a field left at `None` is omitted
/// from the JSON payload entirely, while `Some(0.0)` serializes an
/// explicit zero. The full conversation history goes in `messages` on
/// every call; the library keeps no session state.
///
/// # Examples
///
/// ```
/// use deepseek_core::{ChatCompletionRequest, Message};
///
/// let request = ChatCompletionRequest::builder()
///     .model("deepseek-chat")
///     .messages(vec![Message::user("What is the capital of France?")])
///     .temperature(0.7_f64)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model(), "deepseek-chat");
/// assert_eq!(*request.temperature(), Some(0.7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct ChatCompletionRequest {
    /// Conversation messages
    messages: Vec<Message>,
    /// Model identifier
    model: String,
    /// Sampling temperature
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    /// Nucleus sampling cutoff
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
    /// Maximum tokens to generate
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Enable streaming (unsupported by this client; the API default is off)
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
    /// Presence penalty
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    presence_penalty: Option<f64>,
    /// Frequency penalty
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f64>,
}

impl ChatCompletionRequest {
    /// Creates a builder for `ChatCompletionRequest`.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}
