//! Wire types for the video generation endpoint and the outcome decision.
//!
//! The backend answers every request with a JSON body shaped like
//! [`GenerationResult`], whatever the HTTP status. [`decide_outcome`] folds
//! status and body into either the video URL or an [`Error`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::topic::Topic;

/// Default request path for video generation.
pub const GENERATE_VIDEO_PATH: &str = "/generate-video";

/// Fallback message when a 2xx response reports failure without an `error`.
pub const GENERATION_FAILED_MESSAGE: &str = "Video generation failed. Please try again.";

/// Request body sent to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    /// The validated topic.
    pub topic: Topic,
}

impl GenerateRequest {
    /// Build a request for a topic.
    #[must_use]
    pub const fn new(topic: Topic) -> Self {
        Self { topic }
    }

    /// Serialize to the JSON request body.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Response body returned by the generation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Whether the backend considers the generation successful.
    #[serde(default)]
    pub success: bool,
    /// Public URL of the rendered video.
    #[serde(default)]
    pub video_url: Option<String>,
    /// Failure description.
    #[serde(default)]
    pub error: Option<String>,
    /// Informational message sent along with successful results.
    #[serde(default)]
    pub message: Option<String>,
}

impl GenerationResult {
    /// Parse a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// The video URL, treating an empty string as absent.
    #[must_use]
    pub fn video_url(&self) -> Option<&str> {
        non_empty(self.video_url.as_deref())
    }

    /// The error message, treating an empty string as absent.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        non_empty(self.error.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Raw HTTP reply as seen by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl HttpReply {
    /// Create a reply.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Message synthesized for a non-2xx reply without an `error` field.
#[must_use]
pub fn status_failure_message(status: u16) -> String {
    format!("Request failed with status {status}")
}

/// Decide whether a reply carries a usable video URL.
///
/// - non-2xx: [`Error::Server`] with the body's error or a message naming the
///   status code. An unparseable body does not mask the status.
/// - 2xx with unparseable body: [`Error::Decode`].
/// - 2xx, `success` and a URL: the URL.
/// - anything else: [`Error::Generation`] with the body's error or a fallback.
pub fn decide_outcome(reply: &HttpReply) -> Result<String> {
    if !reply.is_success() {
        let server_error = GenerationResult::from_json(&reply.body)
            .ok()
            .and_then(|result| result.error_message().map(str::to_string));
        let message = server_error.unwrap_or_else(|| status_failure_message(reply.status));
        warn!(status = reply.status, "Generation request rejected: {}", message);
        return Err(Error::Server {
            status: reply.status,
            message,
        });
    }

    let result = GenerationResult::from_json(&reply.body)?;
    if let Some(message) = result.message.as_deref() {
        debug!("Server message: {}", message);
    }

    match (result.success, result.video_url()) {
        (true, Some(url)) => Ok(url.to_string()),
        _ => {
            let message = result
                .error_message()
                .unwrap_or(GENERATION_FAILED_MESSAGE)
                .to_string();
            warn!(
                success = result.success,
                "Generation reported failure: {}", message
            );
            Err(Error::Generation(message))
        }
    }
}
