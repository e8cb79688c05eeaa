//! Client library for the DeepSeek chat completion API.
//!
//! This facade re-exports the workspace surface: wire types from
//! `deepseek_core`, the client and chat service from `deepseek_client`,
//! and the error types from `deepseek_error`.
//!
//! # Examples
//!
//! ```no_run
//! use deepseek::{ChatCompletionRequest, Client, ClientConfig, Message};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = Client::new(ClientConfig::from_env()?)?;
//!
//! let request = ChatCompletionRequest::builder()
//!     .model("deepseek-chat")
//!     .messages(vec![
//!         Message::system("You are a helpful assistant."),
//!         Message::user("What is the capital of France?"),
//!     ])
//!     .max_tokens(256_u32)
//!     .build()?;
//!
//! let response = client.chat().create_completion(&request).await?;
//! println!("{}", response.choices[0].message.content);
//! # Ok(())
//! # }
//! ```
//!
//! Failures are values, never panics. A call yields exactly one of a
//! response or one [`ClientErrorKind`]; match on
//! [`ClientError::kind`](deepseek_error::ClientError::kind) to tell an
//! API rejection from a transport or decode problem.

pub use deepseek_client::{
    ChatService, Client, ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
    DEFAULT_USER_AGENT,
};
pub use deepseek_core::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse, Choice,
    ErrorDetail, ErrorResponse, Message, Usage,
};
pub use deepseek_error::{
    ClientError, ClientErrorKind, ClientResult, ConfigError, DeepseekError, DeepseekErrorKind,
    DeepseekResult,
};
