use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task::Task;

/// Default background for freshly created columns.
pub const DEFAULT_COLUMN_BG: &str = "bg-blue-900";

/// Color-wheel state backing a column or task background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsva {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    /// Style class name or `#rrggbb` hex color.
    pub bg: String,
    pub hsva: Hsva,
    /// Persisted documents may omit the task list entirely.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Self::fresh_id(),
            title: title.into(),
            bg: DEFAULT_COLUMN_BG.to_string(),
            hsva: crate::template::hsva_for_style(DEFAULT_COLUMN_BG)
                .unwrap_or(Hsva { h: 0.0, s: 0.0, v: 50.0, a: 1.0 }),
            tasks: Vec::new(),
        }
    }

    /// Column ids must stay hyphen-free or composite drag ids become
    /// ambiguous, so the simple (un-hyphenated) UUID form is used.
    pub fn fresh_id() -> String {
        Uuid::new_v4().simple().to_string()
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn task_position(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_contain_no_hyphen() {
        for _ in 0..16 {
            assert!(!Column::fresh_id().contains('-'));
        }
    }

    #[test]
    fn missing_task_list_normalizes_to_empty() {
        let column: Column = serde_json::from_str(
            r#"{"id":"todo","title":"To Do","bg":"bg-slate-600","hsva":{"h":30,"s":60,"v":80,"a":1}}"#,
        )
        .unwrap();
        assert!(column.tasks.is_empty());
    }

    #[test]
    fn task_position_finds_by_id() {
        let mut column = Column::new("To Do");
        column.tasks.push(Task::new("Buy milk", "bg-blue-800"));
        column.tasks.push(Task::new("Call mom", "bg-red-800"));
        let second = column.tasks[1].id.clone();
        assert_eq!(column.task_position(&second), Some(1));
        assert_eq!(column.task_position("missing"), None);
    }
}
