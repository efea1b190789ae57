use log::{info, warn};
use once_cell::unsync::OnceCell;
use shared::SharedError;
use wasm_bindgen::prelude::*;

use crate::config::EndpointConfig;

pub mod api;
pub mod config;

#[cfg(test)]
mod config_tests;

thread_local! {
    static PAGE_CONFIG: OnceCell<EndpointConfig> = OnceCell::new();
}

/// Stores the configuration for the rest of the page's lifetime. Only the
/// first call has any effect; returns whether this call stored it.
pub fn install(config: EndpointConfig) -> bool {
    PAGE_CONFIG.with(|cell| match cell.set(config) {
        Ok(()) => {
            info!("Endpoint configuration installed");
            true
        }
        Err(_) => {
            warn!("Endpoint configuration already initialized, keeping the existing one");
            false
        }
    })
}

/// Runs `f` against the page configuration installed by `start`.
pub fn with_page_config<T>(f: impl FnOnce(&EndpointConfig) -> T) -> shared::Result<T> {
    PAGE_CONFIG.with(|cell| cell.get().map(f).ok_or(SharedError::NotInitialized))
}

fn to_js(err: SharedError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub fn is_production() -> Result<bool, JsValue> {
    with_page_config(EndpointConfig::is_production).map_err(to_js)
}

#[wasm_bindgen]
pub fn get_api_url() -> Result<String, JsValue> {
    with_page_config(|config| config.resolve_base_url().to_string()).map_err(to_js)
}

#[wasm_bindgen]
pub fn get_endpoint(path: &str) -> Result<String, JsValue> {
    with_page_config(|config| config.resolve_endpoint(path)).map_err(to_js)
}

#[wasm_bindgen]
pub fn get_ask_url(question: &str) -> Result<String, JsValue> {
    with_page_config(|config| api::ask_url(config, question)).map_err(to_js)
}

/// Returns the page configuration as a JSON string.
#[wasm_bindgen]
pub fn get_config_json() -> Result<String, JsValue> {
    with_page_config(|config| serde_json::to_string(config).map_err(SharedError::from))
        .and_then(|json| json)
        .map_err(to_js)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    // Set up panic hook
    console_error_panic_hook::set_once();

    info!("Resolving API endpoint configuration...");
    let config = EndpointConfig::from_window().map_err(to_js)?;
    install(config);

    Ok(())
}
