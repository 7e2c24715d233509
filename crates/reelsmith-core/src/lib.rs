//! `Reelsmith` Core Library
//!
//! This crate provides the platform-independent half of the `Reelsmith`
//! client:
//! - Topic validation
//! - The generation endpoint's request/response types and outcome decision
//! - The UI state model (`Idle`, `Loading`, `Success`, `Error`)
//! - The form controller, driven through the [`FormView`] and
//!   [`GenerationClient`] traits
//! - Client configuration
//!
//! Nothing here depends on the browser, so the full submit cycle can be
//! exercised natively.
//!
//! ```rust,ignore
//! use reelsmith_core::{ClientConfig, FormController};
//!
//! let controller = FormController::new(view, client, ClientConfig::default(), now_ms);
//! let state = controller.submit("the history of tea").await;
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod protocol;
pub mod state;
pub mod topic;

pub use config::ClientConfig;
pub use controller::{CANCELLED_MESSAGE, Clock, FormController, FormView, GenerationClient};
pub use error::{EMPTY_TOPIC_MESSAGE, Error, ErrorKind, Result};
pub use protocol::{
    GENERATE_VIDEO_PATH, GENERATION_FAILED_MESSAGE, GenerateRequest, GenerationResult, HttpReply,
    decide_outcome, status_failure_message,
};
pub use state::{GENERATING_MESSAGE, SUCCESS_MESSAGE, Severity, StatusMessage, UiState};
pub use topic::Topic;
