use std::fmt;

/// Errors surfaced by the project client.
///
/// Nothing is retried or recovered internally; every failure propagates to
/// the caller, which decides how to degrade (the page-load collaborator
/// typically falls back to an empty listing).
#[derive(Debug)]
pub enum ClientError {
    /// A write operation was attempted with no API base URL configured.
    Unconfigured(String),
    /// The API answered with a non-success status code.
    Http {
        /// Short label of the failing operation ("fetch projects", "upload", "delete").
        op: &'static str,
        /// The numeric HTTP status, for caller-level handling/display.
        status: u16,
    },
    /// The request could not be sent or the connection failed.
    Transport(String),
    /// The list response body was not a recognized shape.
    Format(String),
    /// The local mock fallback could not be read or parsed.
    MockResource(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Unconfigured(msg) => write!(f, "API base URL is not set: {}", msg),
            ClientError::Http { op, status } => write!(f, "Failed to {} ({})", op, status),
            ClientError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ClientError::Format(msg) => write!(f, "Unexpected response format: {}", msg),
            ClientError::MockResource(msg) => write!(f, "Mock resource error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}
