//! HTTP client for the DeepSeek chat completion API.
//!
//! [`Client`] owns the connection configuration and the underlying HTTP
//! stack; [`ChatService`] layers the chat completion endpoint on top of
//! it. One call, one network round trip: no retries, no caching, no
//! session state.
//!
//! # Examples
//!
//! ```no_run
//! use deepseek_client::{Client, ClientConfig};
//! use deepseek_core::{ChatCompletionRequest, Message};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ClientConfig::builder().api_key("sk-...").build()?;
//! let client = Client::new(config)?;
//!
//! let request = ChatCompletionRequest::builder()
//!     .model("deepseek-chat")
//!     .messages(vec![Message::user("Hello!")])
//!     .build()?;
//!
//! let response = client.chat().create_completion(&request).await?;
//! println!("{}", response.choices[0].message.content);
//! # Ok(())
//! # }
//! ```

mod chat;
mod client;
mod config;
mod transport;

pub use chat::ChatService;
pub use client::Client;
pub use config::{
    ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
};
