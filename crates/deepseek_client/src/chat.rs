//! Chat completion endpoint service.

use crate::Client;
use crate::transport::RequestOptions;
use deepseek_core::{ChatCompletionRequest, ChatCompletionResponse};
use deepseek_error::ClientResult;
use reqwest::Method;
use tracing::debug;

const COMPLETIONS_PATH: &str = "/chat/completions";

/// Chat completion service.
///
/// Borrowed from a [`Client`] via [`Client::chat`]; holds no state of its
/// own. Every call is an independent exchange, so the caller supplies the
/// full conversation history each time.
#[derive(Debug, Clone, Copy)]
pub struct ChatService<'a> {
    client: &'a Client,
}

impl<'a> ChatService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Creates a chat completion.
    ///
    /// Transport failures propagate unchanged; callers can distinguish
    /// the failure kinds through [`deepseek_error::ClientError::kind`].
    #[tracing::instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn create_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> ClientResult<ChatCompletionResponse> {
        let response: ChatCompletionResponse = self
            .client
            .send_request(RequestOptions {
                method: Method::POST,
                path: COMPLETIONS_PATH,
                body: Some(request),
            })
            .await?;

        debug!(choices = response.choices.len(), "received completion");

        Ok(response)
    }
}
