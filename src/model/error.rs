use thiserror::Error;
use tokio::task::JoinError;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// The result type returned by remote calls.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// The kind of a remote error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    Network,
    Decode,
    HttpStatus,
    Unknown,
}

/// An error raised by a remote call, mapped at the client boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Transport failure (connection, timeout, request build)
    #[error("Network error: {0}")]
    Network(String),
    /// The response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),
    /// The server answered with a non-success status
    #[error("HTTP status error {status}: {message}")]
    HttpStatus { status: u16, message: String },
    /// Anything else
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl RemoteError {
    /// Retrieves the kind of the error.
    pub fn kind(&self) -> RemoteErrorKind {
        match self {
            RemoteError::Network(_) => RemoteErrorKind::Network,
            RemoteError::Decode(_) => RemoteErrorKind::Decode,
            RemoteError::HttpStatus { .. } => RemoteErrorKind::HttpStatus,
            RemoteError::Unknown(_) => RemoteErrorKind::Unknown,
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(error: reqwest::Error) -> Self {
        let message = error.to_string();
        if let Some(status) = error.status() {
            RemoteError::HttpStatus {
                status: status.as_u16(),
                message,
            }
        } else if error.is_decode() {
            RemoteError::Decode(message)
        } else if error.is_connect()
            || error.is_timeout()
            || error.is_request()
            || error.is_body()
            || error.is_redirect()
        {
            RemoteError::Network(message)
        } else {
            RemoteError::Unknown(message)
        }
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(error: serde_json::Error) -> Self {
        RemoteError::Decode(error.to_string())
    }
}

impl From<JoinError> for RemoteError {
    fn from(error: JoinError) -> Self {
        RemoteError::Unknown(error.to_string())
    }
}
