//! Page-supplied configuration.
//!
//! A host page may set `window.__REELSMITH_CONFIG__` to an object with any of
//! the [`ClientConfig`] fields before the WASM module starts. Anything missing
//! falls back to the defaults.

use reelsmith_core::{ClientConfig, Error, Result};
use wasm_bindgen::JsValue;

/// Name of the global object read at startup.
pub const CONFIG_GLOBAL: &str = "__REELSMITH_CONFIG__";

/// Load the page configuration, falling back to defaults on any problem.
pub fn load_config() -> ClientConfig {
    match read_config_global() {
        Ok(Some(config)) => {
            leptos::logging::log!("Using page config, endpoint {}", config.request_url());
            config
        }
        Ok(None) => ClientConfig::default(),
        Err(e) => {
            leptos::logging::error!("Ignoring {}: {}", CONFIG_GLOBAL, e);
            ClientConfig::default()
        }
    }
}

fn read_config_global() -> Result<Option<ClientConfig>> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };

    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|_| Error::configuration("could not read window global"))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    let config: ClientConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| Error::configuration(format!("Failed to parse config: {e}")))?;
    config.validate()?;
    Ok(Some(config))
}

/// Current time in milliseconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}
