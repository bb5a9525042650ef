//! List Controller
//!
//! User-initiated mutations on a live list. Confirmation and alerts go
//! through a [`Prompter`] so the logic never touches a rendering surface.
//! Nothing is applied locally: the view changes with the next snapshot.

use std::cell::Cell;
use std::marker::PhantomData;

use super::RemoteCollection;
use crate::domain::{StoredDocument, TodoItem, TodoPatch};

/// Blocking user dialogs
pub trait Prompter {
    /// Ask a yes/no question
    fn confirm(&self, message: &str) -> bool;

    /// Show a message the user has to dismiss
    fn alert(&self, message: &str);
}

/// User-facing texts of one list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMessages {
    pub confirm_delete: &'static str,
    /// Alert on add failure (None = log only)
    pub add_failed: Option<&'static str>,
    /// Alert on delete failure (None = log only)
    pub delete_failed: Option<&'static str>,
}

impl ListMessages {
    pub const RECORDS: Self = Self {
        confirm_delete: "確定要刪除這筆紀錄嗎？",
        add_failed: Some("儲存失敗，請檢查網路連線或 Firebase 設定"),
        delete_failed: Some("刪除失敗，請檢查網路連線"),
    };

    pub const TODOS: Self = Self {
        confirm_delete: "確定要刪除此事項嗎？",
        add_failed: Some("新增失敗"),
        delete_failed: Some("刪除失敗"),
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Stored under the contained id; inputs may be cleared
    Added(String),
    /// Another add from this list is still in flight
    Busy,
    /// Store rejected the write; inputs stay as typed
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
    Failed,
}

pub struct ListController<D, C, P> {
    collection: C,
    prompter: P,
    messages: ListMessages,
    adding: Cell<bool>,
    _doc: PhantomData<fn() -> D>,
}

impl<D, C, P> ListController<D, C, P>
where
    D: StoredDocument,
    C: RemoteCollection<D>,
    P: Prompter,
{
    pub fn new(collection: C, prompter: P, messages: ListMessages) -> Self {
        Self {
            collection,
            prompter,
            messages,
            adding: Cell::new(false),
            _doc: PhantomData,
        }
    }

    pub fn collection(&self) -> &C {
        &self.collection
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// True while an add is in flight
    pub fn is_adding(&self) -> bool {
        self.adding.get()
    }

    /// Add a document. Only one add per list runs at a time.
    pub async fn add(&self, doc: D::New) -> AddOutcome {
        if self.adding.replace(true) {
            return AddOutcome::Busy;
        }
        let result = {
            let _adding = AddingGuard(&self.adding);
            self.collection.add(doc).await
        };

        match result {
            Ok(id) => {
                log::info!("[{}] added {}", self.collection.name(), id);
                AddOutcome::Added(id)
            }
            Err(e) => {
                log::error!("[{}] error adding document: {}", self.collection.name(), e);
                if let Some(message) = self.messages.add_failed {
                    self.prompter.alert(message);
                }
                AddOutcome::Failed
            }
        }
    }

    /// Delete a document after the user confirms
    pub async fn delete(&self, id: &str) -> DeleteOutcome {
        if !self.prompter.confirm(self.messages.confirm_delete) {
            return DeleteOutcome::Cancelled;
        }
        match self.collection.delete(id).await {
            Ok(()) => {
                log::info!("[{}] deleted {}", self.collection.name(), id);
                DeleteOutcome::Deleted
            }
            Err(e) => {
                log::error!("[{}] error deleting document: {}", self.collection.name(), e);
                if let Some(message) = self.messages.delete_failed {
                    self.prompter.alert(message);
                }
                DeleteOutcome::Failed
            }
        }
    }
}

/// Clears the in-flight flag even when the add future is dropped early
struct AddingGuard<'a>(&'a Cell<bool>);

impl Drop for AddingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<C, P> ListController<TodoItem, C, P>
where
    C: RemoteCollection<TodoItem>,
    P: Prompter,
{
    /// Flip a task's completion. Failures are logged only.
    pub async fn toggle(&self, id: &str, completed: bool) -> bool {
        match self.collection.update(id, TodoPatch::toggle(completed)).await {
            Ok(()) => true,
            Err(e) => {
                log::error!("[{}] error updating todo: {}", self.collection.name(), e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewRecord, NewTodo, Record};
    use crate::error::StoreError;
    use crate::live_list::{LiveList, MemoryCollection, Synchronizer};
    use chrono::NaiveDate;
    use futures_util::StreamExt;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Answers confirms from a script and records alerts
    #[derive(Clone, Default)]
    struct ScriptedPrompter {
        answer: Rc<Cell<bool>>,
        confirms: Rc<RefCell<Vec<String>>>,
        alerts: Rc<RefCell<Vec<String>>>,
    }

    impl ScriptedPrompter {
        fn answering(answer: bool) -> Self {
            let prompter = Self::default();
            prompter.answer.set(answer);
            prompter
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm(&self, message: &str) -> bool {
            self.confirms.borrow_mut().push(message.to_string());
            self.answer.get()
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    fn new_record(soul: &str) -> NewRecord {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(8, 30, 0).unwrap();
        NewRecord::new(at, soul, "1")
    }

    #[tokio::test]
    async fn test_add_reaches_view_through_snapshot() {
        let store = MemoryCollection::<Record>::new("records");
        let (sink, mut events) = Synchronizer::channel("records");
        let _subscription = store.subscribe(Some(20), sink).unwrap();
        let controller = ListController::new(store.clone(), ScriptedPrompter::default(), ListMessages::RECORDS);

        let mut list = LiveList::new(Some(20));
        list.apply(events.next().await.unwrap());
        assert!(list.is_empty());

        let outcome = controller.add(new_record("100")).await;
        assert!(matches!(outcome, AddOutcome::Added(_)));
        // Still empty until the snapshot arrives
        assert!(list.is_empty());

        list.apply(events.next().await.unwrap());
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].soul, "100");
        assert!(!controller.is_adding());
    }

    #[tokio::test]
    async fn test_add_failure_alerts() {
        let store = MemoryCollection::<Record>::new("records");
        store.fail_next(StoreError::Network("offline".to_string()));
        let prompter = ScriptedPrompter::default();
        let controller = ListController::new(store.clone(), prompter.clone(), ListMessages::RECORDS);

        assert_eq!(controller.add(new_record("1")).await, AddOutcome::Failed);
        assert_eq!(
            prompter.alerts.borrow().as_slice(),
            ["儲存失敗，請檢查網路連線或 Firebase 設定"]
        );
        assert!(store.documents().is_empty());
        assert!(!controller.is_adding());
    }

    #[tokio::test]
    async fn test_concurrent_add_is_rejected() {
        let store = MemoryCollection::<Record>::new("records");
        let controller = ListController::new(store.clone(), ScriptedPrompter::default(), ListMessages::RECORDS);

        let (first, second) = futures_util::future::join(
            controller.add(new_record("1")),
            controller.add(new_record("2")),
        )
        .await;

        assert!(matches!(first, AddOutcome::Added(_)));
        assert_eq!(second, AddOutcome::Busy);
        assert_eq!(store.documents().len(), 1);
    }

    #[tokio::test]
    async fn test_abandoned_add_releases_busy_flag() {
        let store = MemoryCollection::<Record>::new("records");
        let controller = ListController::new(store.clone(), ScriptedPrompter::default(), ListMessages::RECORDS);

        {
            let pending = controller.add(new_record("1"));
            futures_util::pin_mut!(pending);
            assert!(futures_util::poll!(pending.as_mut()).is_pending());
            assert!(controller.is_adding());
        }

        assert!(!controller.is_adding());
        assert!(matches!(controller.add(new_record("2")).await, AddOutcome::Added(_)));
        assert_eq!(store.documents().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let store = MemoryCollection::<Record>::new("records");
        let id = store.add(new_record("5")).await.unwrap();

        let declined = ScriptedPrompter::answering(false);
        let controller = ListController::new(store.clone(), declined.clone(), ListMessages::RECORDS);
        assert_eq!(controller.delete(&id).await, DeleteOutcome::Cancelled);
        assert_eq!(declined.confirms.borrow().as_slice(), ["確定要刪除這筆紀錄嗎？"]);
        assert_eq!(store.documents().len(), 1);

        let controller = ListController::new(store.clone(), ScriptedPrompter::answering(true), ListMessages::RECORDS);
        assert_eq!(controller.delete(&id).await, DeleteOutcome::Deleted);
        assert!(store.documents().is_empty());
    }

    #[tokio::test]
    async fn test_delete_failure_alerts() {
        let records = MemoryCollection::<Record>::new("records");
        let prompter = ScriptedPrompter::answering(true);
        let controller = ListController::new(records, prompter.clone(), ListMessages::RECORDS);
        assert_eq!(controller.delete("missing").await, DeleteOutcome::Failed);
        assert_eq!(prompter.alerts.borrow().as_slice(), ["刪除失敗，請檢查網路連線"]);

        let todos = MemoryCollection::<TodoItem>::new("todos");
        let prompter = ScriptedPrompter::answering(true);
        let controller = ListController::new(todos, prompter.clone(), ListMessages::TODOS);
        assert_eq!(controller.delete("missing").await, DeleteOutcome::Failed);
        assert_eq!(prompter.alerts.borrow().as_slice(), ["刪除失敗"]);
    }

    #[tokio::test]
    async fn test_toggle() {
        let store = MemoryCollection::<TodoItem>::new("todos");
        let controller = ListController::new(store.clone(), ScriptedPrompter::default(), ListMessages::TODOS);
        let id = store.add(NewTodo::from_input("daily boss").unwrap()).await.unwrap();

        assert!(controller.toggle(&id, false).await);
        assert!(store.documents()[0].completed);

        assert!(controller.toggle(&id, true).await);
        assert!(!store.documents()[0].completed);
    }

    #[tokio::test]
    async fn test_toggle_failure_is_silent() {
        let store = MemoryCollection::<TodoItem>::new("todos");
        let prompter = ScriptedPrompter::default();
        let controller = ListController::new(store, prompter.clone(), ListMessages::TODOS);

        assert!(!controller.toggle("missing", false).await);
        assert!(prompter.alerts.borrow().is_empty());
    }
}
