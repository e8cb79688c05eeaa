//! Request-cycle error types.

/// Error conditions for one request/response cycle.
///
/// A call produces exactly one of these kinds or a decoded value, never
/// both. `Encode` and `BuildRequest` occur before any network traffic;
/// `Execute` covers everything between dispatch and receipt of a complete
/// body; the remaining kinds classify the received response.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ClientErrorKind {
    /// Request body serialization failed; no network call was made
    #[display("marshal request body failed: {_0}")]
    Encode(String),
    /// Outbound request could not be constructed
    #[display("create request failed: {_0}")]
    BuildRequest(String),
    /// Transport failure: DNS, connection refused, timeout, cancellation
    #[display("execute request failed: {_0}")]
    Execute(String),
    /// The API answered with status >= 400 and a decodable error body
    #[display("api error: [{code}] {message} (status {status})")]
    Api {
        /// HTTP status code, captured from the transport layer
        status: u16,
        /// API-supplied error code
        code: String,
        /// API-supplied error message
        message: String,
    },
    /// The API answered with status >= 400 but the error body was malformed
    #[display("failed to decode error response (status {status}): {message}")]
    DecodeErrorBody {
        /// HTTP status code, preserved despite the malformed body
        status: u16,
        /// Decoder message
        message: String,
    },
    /// The success body could not be decoded into the target type
    #[display("decode response failed: {_0}")]
    DecodeResponse(String),
}

impl ClientErrorKind {
    /// HTTP status code for kinds that carry one.
    ///
    /// `Api` and `DecodeErrorBody` keep the status captured from the
    /// transport layer, so callers retain coarse classification even when
    /// the error body itself was unreadable.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientErrorKind::Api { status, .. } => Some(*status),
            ClientErrorKind::DecodeErrorBody { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Request-cycle error with source location tracking.
///
/// # Examples
///
/// ```
/// use deepseek_error::{ClientError, ClientErrorKind};
///
/// let err = ClientError::new(ClientErrorKind::Api {
///     status: 402,
///     code: "insufficient_quota".to_string(),
///     message: "quota exhausted".to_string(),
/// });
/// assert_eq!(err.kind().status(), Some(402));
/// assert!(format!("{}", err).contains("insufficient_quota"));
/// ```
#[derive(Debug, Clone, derive_more::Display)]
#[display("Client Error: {} at line {} in {}", kind, line, file)]
pub struct ClientError {
    kind: ClientErrorKind,
    line: u32,
    file: &'static str,
}

impl ClientError {
    /// Create a new request-cycle error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ClientErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ClientErrorKind {
        &self.kind
    }
}

impl std::error::Error for ClientError {}

impl<T> From<T> for ClientError
where
    T: Into<ClientErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for request-cycle operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;
