//! Document Store Bindings
//!
//! Frontend bindings to the hosted document store, reached through the
//! `window.__MSHEXA__.store` bridge object installed by `store-bridge.js`.

mod collection;
mod dialog;

use wasm_bindgen::prelude::*;

use mshexa_core::StoreError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__MSHEXA__", "store"], js_name = addDoc, catch)]
    async fn add_doc(collection: &str, data: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__MSHEXA__", "store"], js_name = deleteDoc, catch)]
    async fn delete_doc(collection: &str, id: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__MSHEXA__", "store"], js_name = updateDoc, catch)]
    async fn update_doc(collection: &str, id: &str, data: JsValue) -> Result<JsValue, JsValue>;

    /// Returns the unsubscribe function
    #[wasm_bindgen(js_namespace = ["window", "__MSHEXA__", "store"], js_name = subscribe, catch)]
    fn subscribe(
        collection: &str,
        limit: Option<u32>,
        on_next: &Closure<dyn FnMut(JsValue)>,
        on_error: &Closure<dyn FnMut(JsValue)>,
    ) -> Result<js_sys::Function, JsValue>;
}

pub use collection::{bridge_available, Backend, BridgeCollection};
pub use dialog::BrowserDialog;

/// Convert a rejected store promise into a `StoreError`
fn store_error(error: JsValue) -> StoreError {
    let field = |name: &str| {
        js_sys::Reflect::get(&error, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.as_string())
    };
    let code = field("code");
    let message = field("message").unwrap_or_else(|| format!("{:?}", error));
    StoreError::from_code(code.as_deref(), message)
}
