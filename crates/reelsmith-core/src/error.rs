//! Error types for Reelsmith core operations.
//!
//! Every failure a submission can hit ends up in the status area, so each
//! variant's `Display` output is written for the user, not for a log file.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown when the topic input is empty after trimming.
pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter a topic to generate a video.";

/// Errors that can occur while submitting a topic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The topic was empty or whitespace only.
    #[error("{}", EMPTY_TOPIC_MESSAGE)]
    EmptyTopic,

    /// The request never produced a response (network unreachable, DNS, CORS).
    #[error("{0}")]
    Transport(String),

    /// The response body could not be read or parsed as JSON.
    #[error("Invalid response from server: {0}")]
    Decode(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Server-provided or synthesized message.
        message: String,
    },

    /// The server answered 2xx but reported failure or omitted the video URL.
    #[error("{0}")]
    Generation(String),

    /// Client configuration is invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Failure category, independent of the message carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected before any network activity.
    Validation,
    /// The request or body read failed outright.
    Transport,
    /// Non-2xx HTTP status.
    Server,
    /// 2xx with a failed or incomplete payload.
    Logical,
    /// Bad client configuration.
    Configuration,
}

impl Error {
    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// The category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyTopic => ErrorKind::Validation,
            Self::Transport(_) | Self::Decode(_) => ErrorKind::Transport,
            Self::Server { .. } => ErrorKind::Server,
            Self::Generation(_) => ErrorKind::Logical,
            Self::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// The line shown in the status area for this error.
    ///
    /// Validation errors are shown verbatim; everything that happened after
    /// the request was attempted is prefixed with `Error: `.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self {
            Self::EmptyTopic => EMPTY_TOPIC_MESSAGE.to_string(),
            other => format!("Error: {other}"),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
