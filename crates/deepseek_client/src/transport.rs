//! Generic request/response transport.

use crate::Client;
use deepseek_core::ErrorResponse;
use deepseek_error::{ClientError, ClientErrorKind, ClientResult};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// Parameters for one outbound call. Constructed fresh per call, never
/// persisted.
pub(crate) struct RequestOptions<B> {
    pub(crate) method: reqwest::Method,
    pub(crate) path: &'static str,
    pub(crate) body: Option<B>,
}

impl Client {
    /// Sends one request and decodes the response into `T`.
    ///
    /// Exactly one network round trip per invocation, and every failure
    /// maps to exactly one [`ClientErrorKind`]. Serialization problems
    /// surface before any traffic. A status >= 400 becomes `Api`, or
    /// `DecodeErrorBody` when the error body itself is unreadable; both
    /// keep the status captured from the transport. The body is fully
    /// consumed or dropped on every path, so the connection always
    /// returns to the pool.
    #[tracing::instrument(skip(self, opts), fields(method = %opts.method, path = opts.path))]
    pub(crate) async fn send_request<B, T>(&self, opts: RequestOptions<B>) -> ClientResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let config = self.config();

        let payload = match &opts.body {
            Some(body) => Some(
                serde_json::to_vec(body)
                    .map_err(|e| ClientError::new(ClientErrorKind::Encode(e.to_string())))?,
            ),
            None => None,
        };

        let url = format!("{}{}", config.base_url(), opts.path);
        let mut builder = self
            .http()
            .request(opts.method.clone(), &url)
            .header(AUTHORIZATION, format!("Bearer {}", config.api_key()))
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, config.user_agent());
        if let Some(payload) = payload {
            builder = builder.body(payload);
        }
        let request = builder
            .build()
            .map_err(|e| ClientError::new(ClientErrorKind::BuildRequest(e.to_string())))?;

        debug!(url = %url, "dispatching request");

        let response = self.http().execute(request).await.map_err(|e| {
            error!(url = %url, error = %e, "request execution failed");
            ClientError::new(ClientErrorKind::Execute(e.to_string()))
        })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::new(ClientErrorKind::Execute(e.to_string())))?;

        if status.as_u16() >= 400 {
            return Err(match serde_json::from_slice::<ErrorResponse>(&bytes) {
                Ok(body) => {
                    error!(status = status.as_u16(), code = %body.error.code, "api error");
                    ClientError::new(ClientErrorKind::Api {
                        status: status.as_u16(),
                        code: body.error.code,
                        message: body.error.message,
                    })
                }
                Err(e) => ClientError::new(ClientErrorKind::DecodeErrorBody {
                    status: status.as_u16(),
                    message: e.to_string(),
                }),
            });
        }

        serde_json::from_slice::<T>(&bytes)
            .map_err(|e| ClientError::new(ClientErrorKind::DecodeResponse(e.to_string())))
    }
}
