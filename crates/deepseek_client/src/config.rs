//! Client configuration.

use deepseek_error::ConfigError;
use derive_getters::Getters;
use std::time::Duration;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header value.
pub const DEFAULT_USER_AGENT: &str = concat!("deepseek-rust/", env!("CARGO_PKG_VERSION"));

/// Connection configuration, resolved once at construction.
///
/// The builder applies the defaults; after [`crate::Client::new`] nothing
/// about the connection can change. An injected `http_client` takes
/// precedence over `timeout`, for callers that manage their own pool.
///
/// # Examples
///
/// ```
/// use deepseek_client::{ClientConfig, DEFAULT_BASE_URL};
///
/// let config = ClientConfig::builder().api_key("sk-test").build().unwrap();
/// assert_eq!(config.base_url(), DEFAULT_BASE_URL);
/// assert_eq!(config.timeout().as_secs(), 30);
/// ```
#[derive(Debug, Clone, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct ClientConfig {
    /// API key sent as the bearer credential
    api_key: String,
    /// Base URL the endpoint path is appended to
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// User-Agent header value
    #[builder(default = "DEFAULT_USER_AGENT.to_string()")]
    user_agent: String,
    /// Request timeout, applied when no http_client is injected
    #[builder(default = "DEFAULT_TIMEOUT")]
    timeout: Duration,
    /// Caller-managed HTTP client; overrides `timeout`
    #[builder(default, setter(strip_option))]
    http_client: Option<reqwest::Client>,
}

impl ClientConfig {
    /// Creates a builder for `ClientConfig`.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Builds a configuration from the environment.
    ///
    /// Loads `.env` if present, then reads `DEEPSEEK_API_KEY`. All other
    /// fields keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("DEEPSEEK_API_KEY")
            .map_err(|_| ConfigError::new("DEEPSEEK_API_KEY environment variable not set"))?;
        Self::builder()
            .api_key(api_key)
            .build()
            .map_err(|e| ConfigError::new(format!("failed to build client config: {e}")))
    }
}
