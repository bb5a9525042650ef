//! Collection Bindings
//!
//! `RemoteCollection` over the JS bridge, with an in-memory fallback when
//! the bridge is not installed (local development without store config).

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use mshexa_core::domain::StoredDocument;
use mshexa_core::live_list::{MemoryCollection, RemoteCollection, Subscription, Synchronizer};
use mshexa_core::{StoreError, StoreResult};

use super::{add_doc, delete_doc, store_error, subscribe, update_doc};

/// Whether `store-bridge.js` installed `window.__MSHEXA__.store`
pub fn bridge_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::get(&window, &JsValue::from_str("__MSHEXA__"))
        .ok()
        .filter(|bridge| bridge.is_object())
        .and_then(|bridge| js_sys::Reflect::get(&bridge, &JsValue::from_str("store")).ok())
        .map(|store| store.is_object())
        .unwrap_or(false)
}

/// A collection in the hosted store
pub struct BridgeCollection<D> {
    name: String,
    _doc: PhantomData<fn() -> D>,
}

impl<D> BridgeCollection<D> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            _doc: PhantomData,
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> StoreResult<JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| StoreError::Decode(format!("Serialization error: {}", e)))
}

#[async_trait(?Send)]
impl<D> RemoteCollection<D> for BridgeCollection<D>
where
    D: StoredDocument + DeserializeOwned,
    D::New: Serialize,
    D::Patch: Serialize,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn add(&self, doc: D::New) -> StoreResult<String> {
        let data = to_js(&doc)?;
        let id = add_doc(&self.name, data).await.map_err(store_error)?;
        id.as_string()
            .ok_or_else(|| StoreError::Decode("addDoc did not return an id".to_string()))
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        delete_doc(&self.name, id).await.map_err(store_error)?;
        Ok(())
    }

    async fn update(&self, id: &str, patch: D::Patch) -> StoreResult<()> {
        let data = to_js(&patch)?;
        update_doc(&self.name, id, data).await.map_err(store_error)?;
        Ok(())
    }

    fn subscribe(&self, limit: Option<usize>, sink: Synchronizer<D>) -> StoreResult<Subscription> {
        let next_sink = sink.clone();
        let on_next = Closure::<dyn FnMut(JsValue)>::new(move |docs: JsValue| {
            match serde_wasm_bindgen::from_value::<Vec<D>>(docs) {
                Ok(docs) => {
                    next_sink.replace(docs);
                }
                Err(e) => {
                    next_sink.fail(StoreError::Decode(e.to_string()));
                }
            }
        });
        let on_error = Closure::<dyn FnMut(JsValue)>::new(move |error: JsValue| {
            sink.fail(store_error(error));
        });

        let limit = limit.map(|l| u32::try_from(l).unwrap_or(u32::MAX));
        let unsubscribe = subscribe(&self.name, limit, &on_next, &on_error).map_err(store_error)?;

        Ok(Subscription::new(move || {
            let _ = unsubscribe.call0(&JsValue::NULL);
            // Callbacks must outlive the JS listener
            drop(on_next);
            drop(on_error);
        }))
    }
}

/// The store a list talks to: the hosted one, or memory when it is absent
pub enum Backend<D> {
    Bridge(BridgeCollection<D>),
    Memory(MemoryCollection<D>),
}

impl<D: StoredDocument> Backend<D> {
    pub fn connect(collection: &str) -> Self {
        if bridge_available() {
            Backend::Bridge(BridgeCollection::new(collection))
        } else {
            log::warn!("[{}] store bridge not found, using in-memory collection", collection);
            Backend::Memory(MemoryCollection::new(collection))
        }
    }
}

#[async_trait(?Send)]
impl<D> RemoteCollection<D> for Backend<D>
where
    D: StoredDocument + DeserializeOwned,
    D::New: Serialize,
    D::Patch: Serialize,
{
    fn name(&self) -> &str {
        match self {
            Backend::Bridge(c) => c.name(),
            Backend::Memory(c) => c.name(),
        }
    }

    async fn add(&self, doc: D::New) -> StoreResult<String> {
        match self {
            Backend::Bridge(c) => c.add(doc).await,
            Backend::Memory(c) => c.add(doc).await,
        }
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        match self {
            Backend::Bridge(c) => c.delete(id).await,
            Backend::Memory(c) => c.delete(id).await,
        }
    }

    async fn update(&self, id: &str, patch: D::Patch) -> StoreResult<()> {
        match self {
            Backend::Bridge(c) => c.update(id, patch).await,
            Backend::Memory(c) => c.update(id, patch).await,
        }
    }

    fn subscribe(&self, limit: Option<usize>, sink: Synchronizer<D>) -> StoreResult<Subscription> {
        match self {
            Backend::Bridge(c) => c.subscribe(limit, sink),
            Backend::Memory(c) => c.subscribe(limit, sink),
        }
    }
}
