//! In-Memory Collection
//!
//! A [`RemoteCollection`] kept entirely in process. Behaves like the hosted
//! store: ids and timestamps are assigned on add, every mutation pushes a
//! fresh ordered snapshot to each subscriber, and each call yields once
//! before completing.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::{Rc, Weak};
use std::task::{Context, Poll};

use async_trait::async_trait;
use ulid::Ulid;

use super::{RemoteCollection, Subscription, Synchronizer};
use crate::domain::StoredDocument;
use crate::error::{StoreError, StoreResult};

struct Subscriber<D> {
    key: u64,
    limit: Option<usize>,
    sink: Synchronizer<D>,
}

struct Inner<D> {
    docs: Vec<D>,
    last_timestamp: i64,
    sequence: u64,
    next_key: u64,
    subscribers: Vec<Subscriber<D>>,
    fail_next: Option<StoreError>,
}

pub struct MemoryCollection<D> {
    name: String,
    inner: Rc<RefCell<Inner<D>>>,
}

impl<D> Clone for MemoryCollection<D> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<D: StoredDocument> MemoryCollection<D> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: Rc::new(RefCell::new(Inner {
                docs: Vec::new(),
                last_timestamp: 0,
                sequence: 0,
                next_key: 0,
                subscribers: Vec::new(),
                fail_next: None,
            })),
        }
    }

    /// Make the next add / delete / update fail with `error`
    pub fn fail_next(&self, error: StoreError) {
        self.inner.borrow_mut().fail_next = Some(error);
    }

    /// All documents, newest first
    pub fn documents(&self) -> Vec<D> {
        ordered(&self.inner.borrow().docs, None)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn take_failure(&self) -> StoreResult<()> {
        match self.inner.borrow_mut().fail_next.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Push the current state to every live subscriber
    fn broadcast(&self) {
        let mut inner = self.inner.borrow_mut();
        let Inner { docs, subscribers, .. } = &mut *inner;
        subscribers.retain(|subscriber| subscriber.sink.replace(ordered(docs, subscriber.limit)));
    }
}

#[async_trait(?Send)]
impl<D: StoredDocument> RemoteCollection<D> for MemoryCollection<D> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn add(&self, doc: D::New) -> StoreResult<String> {
        YieldOnce::default().await;
        self.take_failure()?;

        let id = {
            let mut inner = self.inner.borrow_mut();
            let timestamp = chrono::Utc::now().timestamp_millis().max(inner.last_timestamp + 1);
            inner.last_timestamp = timestamp;
            inner.sequence += 1;
            let id = Ulid::from_parts(timestamp as u64, u128::from(inner.sequence)).to_string();
            inner.docs.push(D::materialize(id.clone(), timestamp, doc));
            id
        };
        self.broadcast();
        Ok(id)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        YieldOnce::default().await;
        self.take_failure()?;

        {
            let mut inner = self.inner.borrow_mut();
            let index = inner
                .docs
                .iter()
                .position(|doc| doc.id() == id)
                .ok_or_else(|| StoreError::NotFound(format!("{}/{}", self.name, id)))?;
            inner.docs.remove(index);
        }
        self.broadcast();
        Ok(())
    }

    async fn update(&self, id: &str, patch: D::Patch) -> StoreResult<()> {
        YieldOnce::default().await;
        self.take_failure()?;

        {
            let mut inner = self.inner.borrow_mut();
            let doc = inner
                .docs
                .iter_mut()
                .find(|doc| doc.id() == id)
                .ok_or_else(|| StoreError::NotFound(format!("{}/{}", self.name, id)))?;
            doc.apply_patch(&patch);
        }
        self.broadcast();
        Ok(())
    }

    fn subscribe(&self, limit: Option<usize>, sink: Synchronizer<D>) -> StoreResult<Subscription> {
        let key = {
            let mut inner = self.inner.borrow_mut();
            let key = inner.next_key;
            inner.next_key += 1;
            sink.replace(ordered(&inner.docs, limit));
            inner.subscribers.push(Subscriber { key, limit, sink });
            key
        };

        let weak: Weak<RefCell<Inner<D>>> = Rc::downgrade(&self.inner);
        Ok(Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().subscribers.retain(|subscriber| subscriber.key != key);
            }
        }))
    }
}

/// Newest first by creation time, then by insertion order
fn ordered<D: StoredDocument>(docs: &[D], limit: Option<usize>) -> Vec<D> {
    let mut snapshot: Vec<D> = docs.iter().rev().cloned().collect();
    snapshot.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    if let Some(limit) = limit {
        snapshot.truncate(limit);
    }
    snapshot
}

/// Completes on the second poll, like a store round trip
#[derive(Default)]
struct YieldOnce {
    yielded: bool,
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
