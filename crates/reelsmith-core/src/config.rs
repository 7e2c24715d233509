//! Client configuration.
//!
//! Every field has a default, so an empty JSON object (or no configuration
//! at all) yields a client that posts to `/generate-video` on the page's own
//! origin.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::protocol::GENERATE_VIDEO_PATH;

/// Configuration for the form controller and its HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin prefix for the endpoint. Empty means same origin.
    pub base_url: String,
    /// Request path of the generation endpoint.
    pub endpoint: String,
    /// Label of the submit control while idle.
    pub submit_label: String,
    /// Label of the submit control while a request is outstanding.
    pub loading_label: String,
    /// Prefix of the suggested download filename.
    pub download_prefix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            endpoint: GENERATE_VIDEO_PATH.to_string(),
            submit_label: "Generate Video".to_string(),
            loading_label: "Generating...".to_string(),
            download_prefix: "generated-video".to_string(),
        }
    }
}

impl ClientConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        debug!("Loaded client config: endpoint={}", config.request_url());
        Ok(config)
    }

    /// Check field invariants.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(Error::configuration("endpoint must not be empty"));
        }
        if !self.endpoint.starts_with('/') {
            return Err(Error::configuration(format!(
                "endpoint must start with '/': {}",
                self.endpoint
            )));
        }
        if self.submit_label.trim().is_empty() || self.loading_label.trim().is_empty() {
            return Err(Error::configuration("button labels must not be empty"));
        }
        if self.download_prefix.trim().is_empty() {
            return Err(Error::configuration("download prefix must not be empty"));
        }
        Ok(())
    }

    /// Full URL the generation request is posted to.
    #[must_use]
    pub fn request_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint)
    }

    /// Download filename for a result produced at `timestamp_ms`.
    #[must_use]
    pub fn download_filename(&self, timestamp_ms: u64) -> String {
        format!("{}-{timestamp_ms}.mp4", self.download_prefix)
    }
}
