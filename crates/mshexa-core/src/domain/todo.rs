//! To-do Item
//!
//! A task in the shared to-do list, plus the row model used to render it.

use serde::{Deserialize, Serialize};

use super::document::{Document, StoredDocument};

/// A to-do item (matches the `todos` collection)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl Document for TodoItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<i64> {
        self.timestamp
    }
}

impl StoredDocument for TodoItem {
    type New = NewTodo;
    type Patch = TodoPatch;

    fn materialize(id: String, created_at: i64, new: NewTodo) -> Self {
        Self {
            id,
            task: new.task,
            completed: new.completed,
            timestamp: Some(created_at),
        }
    }

    fn apply_patch(&mut self, patch: &TodoPatch) {
        self.completed = patch.completed;
    }
}

/// Payload for adding a task
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo {
    pub task: String,
    pub completed: bool,
}

impl NewTodo {
    /// Trimmed task text, or `None` when there is nothing to add
    pub fn from_input(text: &str) -> Option<Self> {
        let task = text.trim();
        if task.is_empty() {
            return None;
        }
        Some(Self {
            task: task.to_string(),
            completed: false,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TodoPatch {
    pub completed: bool,
}

impl TodoPatch {
    /// Flip the current completion state
    pub fn toggle(current: bool) -> Self {
        Self { completed: !current }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodoRow {
    pub id: String,
    pub task: String,
    pub completed: bool,
}

impl TodoRow {
    pub fn class(&self) -> &'static str {
        if self.completed {
            "todo-item completed"
        } else {
            "todo-item"
        }
    }
}

/// Render model of the whole list, rebuilt from each snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoView {
    pub rows: Vec<TodoRow>,
}

impl TodoView {
    pub fn render(items: &[TodoItem]) -> Self {
        Self {
            rows: items
                .iter()
                .map(|item| TodoRow {
                    id: item.id.clone(),
                    task: item.task.clone(),
                    completed: item.completed,
                })
                .collect(),
        }
    }

    pub fn show_placeholder(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: id.to_string(),
            task: format!("Task {}", id),
            completed,
            timestamp: Some(1),
        }
    }

    #[test]
    fn test_from_input() {
        assert_eq!(NewTodo::from_input("   "), None);
        let new = NewTodo::from_input("  boss run ").unwrap();
        assert_eq!(new.task, "boss run");
        assert!(!new.completed);
    }

    #[test]
    fn test_toggle_patch() {
        let mut item = todo("a", false);
        item.apply_patch(&TodoPatch::toggle(item.completed));
        assert!(item.completed);
        item.apply_patch(&TodoPatch::toggle(item.completed));
        assert!(!item.completed);
    }

    #[test]
    fn test_view_rows() {
        let view = TodoView::render(&[todo("a", true), todo("b", false)]);
        assert!(!view.show_placeholder());
        assert_eq!(view.rows[0].class(), "todo-item completed");
        assert_eq!(view.rows[1].class(), "todo-item");
        assert!(TodoView::render(&[]).show_placeholder());
    }

    #[test]
    fn test_deserialize_defaults() {
        let item: TodoItem = serde_json::from_str(r#"{"id":"x","task":"t"}"#).unwrap();
        assert!(!item.completed);
        assert_eq!(item.timestamp, None);
    }
}
