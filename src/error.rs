use serde_json::Value;
use thiserror::Error;

/// Every failure an endpoint call can end with.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered 401. The stored token has already been cleared and
    /// the unauthorized handler has already run when the caller sees this.
    #[error("unauthorized")]
    Unauthorized { body: Value },

    #[error("server responded with {status}")]
    Status { status: u16, body: Value },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("token storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("client configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// HTTP status carried by the failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Response payload of an HTTP error, for callers that want to show the
    /// server's own message.
    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiError::Unauthorized { body } | ApiError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(err)
        }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed store contents: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("store lock poisoned")]
    Poisoned,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
