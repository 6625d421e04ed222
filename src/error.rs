//! Error taxonomy for password validation.

use thiserror::Error;

/// Failure of a full validation run.
///
/// A `Violation` means the password is bad. A `Transport` error means the
/// breach status could not be determined, and the caller decides whether to
/// fail open, fail closed or retry.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{reason}")]
    Violation { rule: &'static str, reason: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("validation cancelled")]
    Cancelled,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ValidationError {
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Violation { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Human-readable reason of the violated rule, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Violation { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Failure of the breach range lookup.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Breach range request timed out")]
    Timeout,
    #[error("Breach range request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Breach range endpoint returned status {0}")]
    Status(u16),
    #[error("Malformed breach range response: {0}")]
    MalformedBody(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if let Some(status) = e.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Request(e)
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid breach timeout: {0}")]
    InvalidTimeout(String),
}
