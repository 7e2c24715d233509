//! Browser HTTP client for the generation endpoint.

use gloo_net::http::Request;
use reelsmith_core::{Error, GenerationClient, HttpReply, Result};

/// Sends generation requests with the Fetch API.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

impl GenerationClient for FetchClient {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply> {
        leptos::logging::log!("=== POST {} START ===", url);

        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| Error::transport(format!("Failed to build request: {e}")))?
            .send()
            .await
            .map_err(|e| {
                leptos::logging::error!("=== POST {} FAILED (send): {} ===", url, e);
                Error::transport(e.to_string())
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            leptos::logging::error!("=== POST {} FAILED (body): {} ===", url, e);
            Error::decode(e.to_string())
        })?;

        leptos::logging::log!("=== POST {} GOT STATUS {} ===", url, status);
        Ok(HttpReply::new(status, text))
    }
}
