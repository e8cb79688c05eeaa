//! Core data types for the DeepSeek client library.
//!
//! This crate provides the wire-format request and response shapes for the
//! chat completion endpoint. Request types serialize to the JSON the API
//! expects; response types deserialize from what it returns. No validation
//! happens here: roles are open string tags and the API is the judge of
//! model identifiers.

mod message;
mod request;
mod response;

pub use message::Message;
pub use request::{ChatCompletionRequest, ChatCompletionRequestBuilder};
pub use response::{ChatCompletionResponse, Choice, ErrorDetail, ErrorResponse, Usage};
