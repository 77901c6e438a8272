use thiserror::Error;

/// Client-side submission errors. The UI collapses every variant into one
/// generic retryable message; the variants exist for logging.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (connectivity, timeout).
    #[error("network error: {message}")]
    Network { message: String },

    /// The server answered with a non-2xx status.
    #[error("server rejected the message with status {status}")]
    Rejected { status: u16 },
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
