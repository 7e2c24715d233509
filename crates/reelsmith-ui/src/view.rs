//! Signal-backed implementation of the controller's [`FormView`].
//!
//! Components read these signals to render; the controller writes them.
//! The player is the one exception: a media element does not pick up a new
//! `<source>` on its own, so the view sets the source and calls `load()` on
//! the element directly.

use leptos::html::{Source, Video};
use leptos::prelude::*;
use reelsmith_core::{FormView, StatusMessage};

/// Target of the download link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    /// URL the link points at.
    pub href: String,
    /// Suggested filename.
    pub filename: String,
}

/// Reactive handles for every element the controller touches.
#[derive(Clone, Copy)]
pub struct SignalView {
    /// Whether the submit button accepts clicks.
    pub submit_enabled: RwSignal<bool>,
    /// Submit button text.
    pub submit_label: RwSignal<String>,
    /// Whether the loading indicator is shown.
    pub loading_visible: RwSignal<bool>,
    /// Whether the result container is shown.
    pub result_visible: RwSignal<bool>,
    /// Current status line, if any.
    pub status: RwSignal<Option<StatusMessage>>,
    /// Current download link, if any.
    pub download: RwSignal<Option<DownloadLink>>,
    /// The `<video>` player.
    pub video: NodeRef<Video>,
    /// The player's `<source>` child.
    pub source: NodeRef<Source>,
}

impl SignalView {
    /// Create handles for an idle form with the given submit label.
    pub fn new(submit_label: impl Into<String>) -> Self {
        Self {
            submit_enabled: RwSignal::new(true),
            submit_label: RwSignal::new(submit_label.into()),
            loading_visible: RwSignal::new(false),
            result_visible: RwSignal::new(false),
            status: RwSignal::new(None),
            download: RwSignal::new(None),
            video: NodeRef::new(),
            source: NodeRef::new(),
        }
    }
}

/// Class list for the status area, with at most one severity class.
pub fn status_class(status: Option<&StatusMessage>) -> String {
    status.map_or_else(|| "status".to_string(), StatusMessage::class_list)
}

impl FormView for SignalView {
    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_enabled.set(enabled);
    }

    fn set_submit_label(&self, label: &str) {
        self.submit_label.set(label.to_string());
    }

    fn set_loading_visible(&self, visible: bool) {
        self.loading_visible.set(visible);
    }

    fn set_result_visible(&self, visible: bool) {
        self.result_visible.set(visible);
    }

    fn show_status(&self, status: &StatusMessage) {
        self.status.set(Some(status.clone()));
    }

    fn load_video(&self, video_url: &str) {
        match (self.source.get_untracked(), self.video.get_untracked()) {
            (Some(source), Some(video)) => {
                source.set_src(video_url);
                video.load();
            }
            _ => leptos::logging::error!("Video player not mounted; cannot load {}", video_url),
        }
    }

    fn set_download(&self, video_url: &str, filename: &str) {
        self.download.set(Some(DownloadLink {
            href: video_url.to_string(),
            filename: filename.to_string(),
        }));
    }
}

#[cfg(test)]
mod tests {
    use reelsmith_core::Severity;

    use super::*;

    #[test]
    fn test_status_class_without_status() {
        assert_eq!(status_class(None), "status");
    }

    #[test]
    fn test_status_class_replaces_severity() {
        let info = StatusMessage::info("working");
        let error = StatusMessage::error("failed");
        assert_eq!(status_class(Some(&info)), "status status-info");
        assert_eq!(status_class(Some(&error)), "status status-error");
    }

    #[test]
    fn test_view_writes_signals() {
        let owner = Owner::new();
        owner.set();

        let view = SignalView::new("Generate Video");
        view.set_submit_enabled(false);
        view.set_submit_label("Generating...");
        view.set_result_visible(true);
        view.show_status(&StatusMessage::success("done"));
        view.set_download("https://example.com/v.mp4", "generated-video-1.mp4");

        assert!(!view.submit_enabled.get_untracked());
        assert_eq!(view.submit_label.get_untracked(), "Generating...");
        assert!(view.result_visible.get_untracked());
        assert_eq!(
            view.status.get_untracked().map(|s| s.severity),
            Some(Severity::Success)
        );
        assert_eq!(
            view.download.get_untracked(),
            Some(DownloadLink {
                href: "https://example.com/v.mp4".to_string(),
                filename: "generated-video-1.mp4".to_string(),
            })
        );
    }

    #[test]
    fn test_load_video_without_player_is_harmless() {
        let owner = Owner::new();
        owner.set();

        let view = SignalView::new("Generate Video");
        view.load_video("https://example.com/v.mp4");
        assert!(view.video.get_untracked().is_none());
    }
}
