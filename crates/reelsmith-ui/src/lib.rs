//! `Reelsmith` UI - Leptos-based user interface.
//!
//! This crate renders the topic form and wires it to the core
//! [`FormController`](reelsmith_core::FormController) through a signal-backed
//! view and a Fetch-based HTTP client.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]

pub mod app;
pub mod components;
pub mod config;
pub mod http;
pub mod view;

pub use app::App;
pub use view::{DownloadLink, SignalView};
