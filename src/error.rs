use std::fmt;

/// Custom error type for ZIA operations
#[derive(Debug)]
pub enum ZiaError {
    /// HTTP transport failed (connect, timeout, TLS)
    Http(reqwest::Error),
    /// API rejected the request with a non-2xx, non-429 status
    Api { status: u16, body: String },
    /// Caller-supplied data failed a precondition before any request was sent
    Validation(String),
    /// Credential material missing or unreadable
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for ZiaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZiaError::Http(e) => write!(f, "HTTP request failed: {}", e),
            ZiaError::Api { status, body } => {
                write!(f, "API error (status {}): {}", status, body)
            }
            ZiaError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ZiaError::Credentials(msg) => write!(f, "{}", msg),
            ZiaError::Json(msg) => write!(f, "JSON error: {}", msg),
            ZiaError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ZiaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ZiaError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ZiaError {
    fn from(err: reqwest::Error) -> Self {
        ZiaError::Http(err)
    }
}

impl From<serde_json::Error> for ZiaError {
    fn from(err: serde_json::Error) -> Self {
        ZiaError::Json(err.to_string())
    }
}

impl From<std::io::Error> for ZiaError {
    fn from(err: std::io::Error) -> Self {
        ZiaError::Config(err.to_string())
    }
}

/// Result type alias for ZIA operations
pub type Result<T> = std::result::Result<T, ZiaError>;
