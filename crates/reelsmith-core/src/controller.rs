//! The form controller: one submit, one request, one terminal state.
//!
//! The controller never touches the DOM directly. Everything visible goes
//! through [`FormView`], and the network goes through [`GenerationClient`], so
//! the whole submit sequence runs the same way in the browser and in tests.

use std::cell::RefCell;

use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::protocol::{GenerateRequest, HttpReply, decide_outcome};
use crate::state::{GENERATING_MESSAGE, SUCCESS_MESSAGE, StatusMessage, UiState};
use crate::topic::Topic;

/// The visible surface the controller drives.
///
/// Implementations own their element handles; every method takes `&self`
/// since UI handles are shared and interior-mutable.
#[cfg_attr(test, mockall::automock)]
pub trait FormView {
    /// Enable or disable the submit control.
    fn set_submit_enabled(&self, enabled: bool);

    /// Change the submit control's label.
    fn set_submit_label(&self, label: &str);

    /// Show or hide the loading indicator.
    fn set_loading_visible(&self, visible: bool);

    /// Show or hide the result container.
    fn set_result_visible(&self, visible: bool);

    /// Replace the status text and its severity class.
    fn show_status(&self, status: &StatusMessage);

    /// Point the player at `video_url` and make it reload the source.
    fn load_video(&self, video_url: &str);

    /// Point the download link at `video_url`, suggesting `filename`.
    fn set_download(&self, video_url: &str, filename: &str);
}

/// Sends the generation request.
///
/// Implementations return the raw status and body; a transport that cannot
/// produce a response at all returns [`Error::Transport`].
#[allow(async_fn_in_trait)]
pub trait GenerationClient {
    /// POST a JSON `body` to `url`.
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply>;
}

/// Failure message for a submit cycle dropped before the reply arrived.
pub const CANCELLED_MESSAGE: &str = "Request was cancelled";

/// Millisecond wall clock used for download filenames.
pub type Clock = fn() -> u64;

/// Drives a [`FormView`] through one submit cycle per call to
/// [`FormController::submit`].
pub struct FormController<V, C> {
    view: V,
    client: C,
    config: ClientConfig,
    clock: Clock,
    state: RefCell<UiState>,
}

impl<V: FormView, C: GenerationClient> FormController<V, C> {
    /// Create a controller in the `Idle` state.
    pub fn new(view: V, client: C, config: ClientConfig, clock: Clock) -> Self {
        Self {
            view,
            client,
            config,
            clock,
            state: RefCell::new(UiState::Idle),
        }
    }

    /// Current UI state.
    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// The view this controller drives.
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// The client requests are sent through.
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// The active configuration.
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run one submit cycle for the raw topic input and return the state it
    /// ends in.
    ///
    /// A call made while a previous cycle is still loading is ignored and
    /// returns `Loading` without touching the view or the network.
    pub async fn submit(&self, raw_topic: &str) -> UiState {
        if self.state.borrow().is_loading() {
            debug!("Ignoring submit while a request is outstanding");
            return UiState::Loading;
        }

        let topic = match Topic::parse(raw_topic) {
            Ok(topic) => topic,
            Err(err) => {
                self.fail(&err);
                return self.state();
            }
        };

        {
            let _loading = LoadingGuard::acquire(self);
            match self.request(&topic).await {
                Ok(video_url) => self.succeed(&video_url),
                Err(err) => self.fail(&err),
            }
        }

        self.state()
    }

    async fn request(&self, topic: &Topic) -> Result<String> {
        let body = GenerateRequest::new(topic.clone()).to_json()?;
        let url = self.config.request_url();
        info!(topic = %topic, "Requesting video generation from {}", url);

        let reply = self.client.post_json(&url, body).await?;
        debug!(status = reply.status, "Generation endpoint replied");
        decide_outcome(&reply)
    }

    fn succeed(&self, video_url: &str) {
        info!("Video ready at {}", video_url);
        self.render_result(video_url);
        self.view.show_status(&StatusMessage::success(SUCCESS_MESSAGE));
        self.transition(UiState::Success(video_url.to_string()));
    }

    fn render_result(&self, video_url: &str) {
        let filename = self.config.download_filename((self.clock)());
        self.view.load_video(video_url);
        self.view.set_download(video_url, &filename);
        self.view.set_result_visible(true);
    }

    fn fail(&self, err: &Error) {
        warn!(kind = ?err.kind(), "Submission failed: {}", err);
        self.view.show_status(&StatusMessage::error(err.status_text()));
        self.view.set_result_visible(false);
        self.transition(UiState::Error(err.to_string()));
    }

    fn transition(&self, next: UiState) {
        let mut state = self.state.borrow_mut();
        debug!("UI state {} -> {}", *state, next);
        *state = next;
    }
}

/// Holds the form in its loading presentation until dropped.
///
/// Dropping restores the submit control and hides the indicator on every exit
/// path. A cycle abandoned before reaching a terminal state goes through the
/// failure path like any other failed request.
struct LoadingGuard<'a, V: FormView, C: GenerationClient> {
    controller: &'a FormController<V, C>,
}

impl<'a, V: FormView, C: GenerationClient> LoadingGuard<'a, V, C> {
    fn acquire(controller: &'a FormController<V, C>) -> Self {
        let view = &controller.view;
        controller.transition(UiState::Loading);
        view.set_submit_enabled(false);
        view.set_submit_label(&controller.config.loading_label);
        view.set_loading_visible(true);
        view.set_result_visible(false);
        view.show_status(&StatusMessage::info(GENERATING_MESSAGE));
        Self { controller }
    }
}

impl<V: FormView, C: GenerationClient> Drop for LoadingGuard<'_, V, C> {
    fn drop(&mut self) {
        let controller = self.controller;
        controller.view.set_submit_enabled(true);
        controller
            .view
            .set_submit_label(&controller.config.submit_label);
        controller.view.set_loading_visible(false);

        if controller.state.borrow().is_loading() {
            controller.fail(&Error::transport(CANCELLED_MESSAGE));
        }
    }
}
