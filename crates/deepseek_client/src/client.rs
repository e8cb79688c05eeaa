//! DeepSeek HTTP client.

use crate::{ChatService, ClientConfig};
use deepseek_error::{ConfigError, DeepseekResult};
use tracing::debug;

/// DeepSeek API client.
///
/// Holds the resolved configuration and the shared HTTP stack. The client
/// is immutable after construction and holds no per-call state, so one
/// instance can serve any number of concurrent calls; cloning is cheap and
/// shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Creates a new DeepSeek API client.
    ///
    /// Uses the injected HTTP client when the configuration carries one,
    /// otherwise builds a fresh one with the configured timeout.
    #[tracing::instrument(skip(config))]
    pub fn new(config: ClientConfig) -> DeepseekResult<Self> {
        let http = match config.http_client() {
            Some(http) => http.clone(),
            None => reqwest::Client::builder()
                .timeout(*config.timeout())
                .build()
                .map_err(|e| ConfigError::new(format!("failed to build HTTP client: {e}")))?,
        };

        debug!(base_url = %config.base_url(), "created DeepSeek client");

        Ok(Self { http, config })
    }

    /// The chat completion service.
    pub fn chat(&self) -> ChatService<'_> {
        ChatService::new(self)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn config(&self) -> &ClientConfig {
        &self.config
    }
}
