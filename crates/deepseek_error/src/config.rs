//! Configuration error types.

/// Configuration error with source location.
///
/// Raised only at construction time: a missing `DEEPSEEK_API_KEY`, an
/// incomplete config builder, or a failure to assemble the HTTP stack.
///
/// # Examples
///
/// ```
/// use deepseek_error::ConfigError;
///
/// let err = ConfigError::new("DEEPSEEK_API_KEY environment variable not set");
/// assert!(err.message.contains("DEEPSEEK_API_KEY"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ConfigError {}
