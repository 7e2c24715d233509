//! UI state model for a single submission cycle.

use std::fmt;

/// Status text shown once a video URL comes back.
pub const SUCCESS_MESSAGE: &str = "Video generated successfully!";

/// Status text shown while the request is in flight.
pub const GENERATING_MESSAGE: &str = "Generating your video. This may take a few minutes...";

/// Where the form is in its submit cycle.
///
/// Transitions are `Idle -> Loading -> {Success, Error}` per submission; a new
/// submission starts again from whichever terminal state the last one left.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is outstanding.
    Loading,
    /// The last submission produced this video URL.
    Success(String),
    /// The last submission failed with this message.
    Error(String),
}

impl UiState {
    /// Whether a request is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The video URL if the last submission succeeded.
    #[must_use]
    pub fn video_url(&self) -> Option<&str> {
        match self {
            Self::Success(url) => Some(url),
            _ => None,
        }
    }

    /// The failure message if the last submission failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the result container should be visible in this state.
    #[must_use]
    pub const fn shows_result(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl fmt::Display for UiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Loading => write!(f, "loading"),
            Self::Success(_) => write!(f, "success"),
            Self::Error(_) => write!(f, "error"),
        }
    }
}

/// Severity tag controlling how a status message is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Progress or neutral information.
    #[default]
    Info,
    /// Generation succeeded.
    Success,
    /// Something went wrong.
    Error,
}

impl Severity {
    /// CSS class applied to the status area for this severity.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Info => "status-info",
            Self::Success => "status-success",
            Self::Error => "status-error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A message shown in the status area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Text shown to the user.
    pub text: String,
    /// Presentation severity.
    pub severity: Severity,
}

impl StatusMessage {
    /// Create a status message.
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    /// Create an info message.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Info)
    }

    /// Create a success message.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Success)
    }

    /// Create an error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Error)
    }

    /// Class list for the status area: the base class plus exactly one
    /// severity class.
    #[must_use]
    pub fn class_list(&self) -> String {
        format!("status {}", self.severity.css_class())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(UiState::default(), UiState::Idle);
        assert!(!UiState::default().is_loading());
    }

    #[test]
    fn test_only_success_shows_result() {
        assert!(UiState::Success("u".into()).shows_result());
        assert!(!UiState::Loading.shows_result());
        assert!(!UiState::Error("e".into()).shows_result());
        assert!(!UiState::Idle.shows_result());
    }

    #[test]
    fn test_accessors() {
        let ok = UiState::Success("https://example.com/v.mp4".into());
        assert_eq!(ok.video_url(), Some("https://example.com/v.mp4"));
        assert_eq!(ok.error_message(), None);

        let failed = UiState::Error("boom".into());
        assert_eq!(failed.error_message(), Some("boom"));
        assert_eq!(failed.video_url(), None);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(UiState::Loading.to_string(), "loading");
        assert_eq!(UiState::Error("boom".into()).to_string(), "error");
    }

    #[test]
    fn test_severity_classes_are_distinct() {
        assert_ne!(Severity::Info.css_class(), Severity::Success.css_class());
        assert_ne!(Severity::Success.css_class(), Severity::Error.css_class());
        assert_ne!(Severity::Info.css_class(), Severity::Error.css_class());
    }

    #[test]
    fn test_class_list_has_single_severity() {
        let msg = StatusMessage::error("nope");
        assert_eq!(msg.class_list(), "status status-error");
        assert_eq!(msg.severity.to_string(), "error");
    }
}
