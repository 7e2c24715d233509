//! UI components for the generation page.

mod generate_form;
mod loading;
mod status_banner;
mod video_result;

pub use generate_form::GenerateForm;
pub use loading::{LoadingIndicator, Spinner};
pub use status_banner::StatusBanner;
pub use video_result::VideoResult;
