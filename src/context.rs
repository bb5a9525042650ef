//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use mshexa_core::AppConfig;

/// Global holding optional runtime configuration
const CONFIG_GLOBAL: &str = "__MSHEXA_CONFIG__";

/// App-wide values provided via context
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Read `window.__MSHEXA_CONFIG__`, falling back to defaults
pub fn load_config() -> AppConfig {
    let raw = web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok())
        .filter(|value| !value.is_undefined() && !value.is_null());

    let Some(raw) = raw else {
        return AppConfig::default();
    };

    match serde_wasm_bindgen::from_value::<AppConfig>(raw) {
        Ok(config) => {
            log::info!("[config] loaded from {}", CONFIG_GLOBAL);
            config
        }
        Err(e) => {
            log::warn!("[config] invalid {}, using defaults: {}", CONFIG_GLOBAL, e);
            AppConfig::default()
        }
    }
}
