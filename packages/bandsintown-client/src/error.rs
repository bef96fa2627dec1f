//! Bandsintown API error types

use bandsintown_shared_config::ConfigError;
use reqwest::StatusCode;
use thiserror::Error;

/// Bandsintown API client errors
#[derive(Error, Debug)]
pub enum BandsintownError {
    /// Client configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Base URL could not be turned into a request URL
    #[error("Invalid base URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a non-reqwest transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// Bandsintown answered with a non-2xx status
    #[error("Bandsintown API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Response body did not match the expected JSON shape
    #[error("Failed to decode Bandsintown response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Coarse classification of a [`BandsintownError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a usable 2xx response
    Transport,
    /// A 2xx response arrived but its body could not be decoded
    Decode,
    /// The client could not be constructed
    Configuration,
}

impl BandsintownError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BandsintownError::Decode(_) => ErrorKind::Decode,
            BandsintownError::Config(_) => ErrorKind::Configuration,
            BandsintownError::InvalidUrl { .. }
            | BandsintownError::Http(_)
            | BandsintownError::Transport(_)
            | BandsintownError::Status { .. } => ErrorKind::Transport,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    pub fn is_decode(&self) -> bool {
        self.kind() == ErrorKind::Decode
    }

    /// HTTP status attached to this error, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            BandsintownError::Status { status, .. } => Some(*status),
            BandsintownError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Check if this error looks transient
    ///
    /// The client never retries on its own; this is a hint for callers
    /// that implement their own policy.
    ///
    /// True for:
    /// - Timeouts and connect failures
    /// - Rate limiting (429)
    /// - Server errors (5xx)
    pub fn is_retryable(&self) -> bool {
        match self {
            BandsintownError::Http(e) if e.is_timeout() || e.is_connect() => true,
            _ => matches!(
                self.status(),
                Some(status) if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            ),
        }
    }
}

/// Result type for Bandsintown operations
pub type BandsintownResult<T> = Result<T, BandsintownError>;
