//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each live list
//! is replaced wholesale by the snapshots its collection pushes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use mshexa_core::domain::StoredDocument;
use mshexa_core::live_list::{forward_events, ListEvent, LiveList, RemoteCollection, Synchronizer};
use mshexa_core::AppConfig;

use crate::models::{Record, TodoItem};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Newest records, as fetched (may exceed what the table shows)
    pub records: LiveList<Record>,
    /// All to-do items
    pub todos: LiveList<TodoItem>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            records: LiveList::new(config.history.fetch_limit),
            todos: LiveList::new(config.todos.fetch_limit),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a records snapshot event
pub fn store_apply_records(store: &AppStore, event: ListEvent<Record>) {
    store.records().write().apply(event);
}

/// Apply a todos snapshot event
pub fn store_apply_todos(store: &AppStore, event: ListEvent<TodoItem>) {
    store.todos().write().apply(event);
}

/// Subscribe to `collection` and feed its snapshots to `apply` until the
/// calling component is cleaned up
pub fn bind_collection<D, C>(collection: &C, limit: Option<usize>, apply: impl FnMut(ListEvent<D>) + 'static)
where
    D: StoredDocument,
    C: RemoteCollection<D>,
{
    let (sink, events) = Synchronizer::channel(collection.name());
    spawn_local(forward_events(events, apply));

    match collection.subscribe(limit, sink) {
        Ok(subscription) => {
            log::info!("[{}] subscribed (limit {:?})", collection.name(), limit);
            let subscription = StoredValue::new_local(Some(subscription));
            on_cleanup(move || subscription.set_value(None));
        }
        Err(e) => log::error!("[{}] subscribe failed: {}", collection.name(), e),
    }
}
