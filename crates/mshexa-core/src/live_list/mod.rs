//! Live List Synchronization
//!
//! A remote collection pushes full, ordered snapshots; the local list is
//! replaced wholesale on each one. Mutations go out to the collection and come
//! back only through the next snapshot.
//! - sync: snapshot channel and local cache
//! - controller: add / delete / toggle with confirmation and alerts
//! - memory: in-process collection

mod controller;
mod memory;
mod sync;

use async_trait::async_trait;

use crate::domain::StoredDocument;
use crate::error::StoreResult;

pub use controller::{AddOutcome, DeleteOutcome, ListController, ListMessages, Prompter};
pub use memory::MemoryCollection;
pub use sync::{forward_events, ListEvent, LiveList, Synchronizer};

/// A remote ordered collection, newest first by server timestamp
///
/// All operations are async to support network-backed stores; none of them
/// is required to be `Send` since the browser runs them on one thread.
#[async_trait(?Send)]
pub trait RemoteCollection<D: StoredDocument> {
    /// Collection name, for logging
    fn name(&self) -> &str;

    /// Add a document; the store assigns its id and timestamp
    async fn add(&self, doc: D::New) -> StoreResult<String>;

    /// Delete a document by id
    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// Patch a document in place
    async fn update(&self, id: &str, patch: D::Patch) -> StoreResult<()>;

    /// Push a snapshot of up to `limit` newest documents to `sink` now and on
    /// every change, until the returned subscription is dropped.
    fn subscribe(&self, limit: Option<usize>, sink: Synchronizer<D>) -> StoreResult<Subscription>;
}

/// Keeps a snapshot subscription alive; dropping it unsubscribes
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Unsubscribe now
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
