//! Snapshot Channel
//!
//! The store side holds a [`Synchronizer`] and pushes events into it; the
//! view side drains the receiver into a [`LiveList`].

use futures_channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures_util::StreamExt;

use crate::error::StoreError;

/// What the store reports for a subscribed collection
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent<T> {
    /// Full ordered replacement of the collection
    Replaced(Vec<T>),
    /// Subscription failure; the last good snapshot stays in place
    Failed(StoreError),
}

/// Sending half of a snapshot subscription
pub struct Synchronizer<T> {
    collection: String,
    tx: UnboundedSender<ListEvent<T>>,
}

impl<T> Clone for Synchronizer<T> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            tx: self.tx.clone(),
        }
    }
}

impl<T> Synchronizer<T> {
    pub fn channel(collection: impl Into<String>) -> (Self, UnboundedReceiver<ListEvent<T>>) {
        let (tx, rx) = mpsc::unbounded();
        (
            Self {
                collection: collection.into(),
                tx,
            },
            rx,
        )
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Deliver a new snapshot. Returns false once the receiver is gone.
    pub fn replace(&self, docs: Vec<T>) -> bool {
        log::debug!("[{}] snapshot with {} documents", self.collection, docs.len());
        self.tx.unbounded_send(ListEvent::Replaced(docs)).is_ok()
    }

    /// Report a subscription failure. Returns false once the receiver is gone.
    pub fn fail(&self, error: StoreError) -> bool {
        log::error!("[{}] real-time listener error: {}", self.collection, error);
        self.tx.unbounded_send(ListEvent::Failed(error)).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Drain snapshot events into `on_event` until every sender is dropped
pub async fn forward_events<T>(
    mut events: UnboundedReceiver<ListEvent<T>>,
    mut on_event: impl FnMut(ListEvent<T>),
) {
    while let Some(event) = events.next().await {
        on_event(event);
    }
}

/// Local cache of a subscribed collection
#[derive(Debug, Clone, PartialEq)]
pub struct LiveList<T> {
    items: Vec<T>,
    limit: Option<usize>,
    generation: u64,
}

impl<T> Default for LiveList<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<T> LiveList<T> {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            items: Vec::new(),
            limit,
            generation: 0,
        }
    }

    /// Apply an event. Returns true when the list was replaced.
    pub fn apply(&mut self, event: ListEvent<T>) -> bool {
        match event {
            ListEvent::Replaced(mut docs) => {
                if let Some(limit) = self.limit {
                    docs.truncate(limit);
                }
                self.items = docs;
                self.generation += 1;
                true
            }
            ListEvent::Failed(_) => false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of snapshots applied so far
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_truncates() {
        let mut list = LiveList::new(Some(2));
        assert!(list.apply(ListEvent::Replaced(vec![3, 2, 1])));
        assert_eq!(list.items(), &[3, 2]);
        assert_eq!(list.generation(), 1);
    }

    #[test]
    fn test_failure_keeps_last_snapshot() {
        let mut list = LiveList::new(None);
        list.apply(ListEvent::Replaced(vec!["a"]));
        assert!(!list.apply(ListEvent::Failed(StoreError::Network("offline".to_string()))));
        assert_eq!(list.items(), &["a"]);
        assert_eq!(list.generation(), 1);
    }

    #[test]
    fn test_empty_snapshot_clears() {
        let mut list = LiveList::new(None);
        list.apply(ListEvent::Replaced(vec![1, 2]));
        list.apply(ListEvent::Replaced(Vec::new()));
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_forward_events() {
        let (sync, events) = Synchronizer::channel("records");
        assert!(sync.replace(vec![1, 2, 3]));
        assert!(sync.fail(StoreError::Permission("denied".to_string())));
        assert!(sync.replace(vec![4]));
        drop(sync);

        let mut list = LiveList::new(None);
        let mut seen = 0;
        forward_events(events, |event| {
            seen += 1;
            list.apply(event);
        })
        .await;

        assert_eq!(seen, 3);
        assert_eq!(list.items(), &[4]);
        assert_eq!(list.generation(), 2);
    }

    #[test]
    fn test_closed_receiver() {
        let (sync, events) = Synchronizer::<u8>::channel("todos");
        drop(events);
        assert!(sync.is_closed());
        assert!(!sync.replace(vec![1]));
    }
}
