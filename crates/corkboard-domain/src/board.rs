use corkboard_core::{CorkboardError, CorkboardResult};
use serde::{Deserialize, Serialize};

use crate::column::{Column, Hsva};
use crate::task::Task;

/// The top-level persisted document: an ordered sequence of columns,
/// serialized as a bare JSON array for compatibility with existing
/// workspace snapshots.
///
/// Every mutation is infallible; an unresolvable column or task id leaves
/// the board unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a pasted or generated JSON document. The document must be an
    /// array of columns; columns without a task list are normalized to an
    /// empty one.
    pub fn from_json_str(raw: &str) -> CorkboardResult<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| CorkboardError::Serialization(e.to_string()))?;
        if !value.is_array() {
            return Err(CorkboardError::Validation(
                "document must be a JSON array of columns".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| CorkboardError::Serialization(e.to_string()))
    }

    pub fn to_json_string(&self) -> CorkboardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CorkboardError::Serialization(e.to_string()))
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == column_id)
    }

    pub fn column_mut(&mut self, column_id: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.id == column_id)
    }

    pub fn column_position(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.id == column_id)
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|column| column.tasks.len()).sum()
    }

    /// Append a new empty column with a fresh hyphen-free id. Returns the
    /// generated id.
    pub fn add_column(&mut self, title: impl Into<String>) -> String {
        let column = Column::new(title);
        let id = column.id.clone();
        self.columns.push(column);
        id
    }

    pub fn remove_column(&mut self, column_id: &str) {
        self.columns.retain(|column| column.id != column_id);
    }

    pub fn rename_column(&mut self, column_id: &str, title: impl Into<String>) {
        if let Some(column) = self.column_mut(column_id) {
            column.title = title.into();
        }
    }

    pub fn recolor_column(&mut self, column_id: &str, bg: impl Into<String>, hsva: Option<Hsva>) {
        if let Some(column) = self.column_mut(column_id) {
            column.bg = bg.into();
            if let Some(hsva) = hsva {
                column.hsva = hsva;
            }
        }
    }

    /// Append a new blank editable task to the named column. Returns the new
    /// task id, or `None` when the column does not exist.
    pub fn add_task(&mut self, column_id: &str) -> Option<String> {
        let column = self.column_mut(column_id)?;
        let task = Task::untitled();
        let id = task.id.clone();
        column.tasks.push(task);
        Some(id)
    }

    pub fn rename_task(&mut self, column_id: &str, task_id: &str, title: impl Into<String>) {
        if let Some(task) = self.task_mut(column_id, task_id) {
            task.title = title.into();
        }
    }

    pub fn recolor_task(&mut self, column_id: &str, task_id: &str, bg: impl Into<String>) {
        if let Some(task) = self.task_mut(column_id, task_id) {
            task.bg = bg.into();
        }
    }

    pub fn set_task_editing(&mut self, column_id: &str, task_id: &str, editing: bool) {
        if let Some(task) = self.task_mut(column_id, task_id) {
            task.editing = editing;
        }
    }

    /// Remove every task whose id appears in `task_ids` from one column.
    pub fn delete_tasks(&mut self, column_id: &str, task_ids: &[String]) {
        if let Some(column) = self.column_mut(column_id) {
            column.tasks.retain(|task| !task_ids.contains(&task.id));
        }
    }

    fn task_mut(&mut self, column_id: &str, task_id: &str) -> Option<&mut Task> {
        self.column_mut(column_id)?
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::default_board;

    #[test]
    fn add_column_generates_a_fresh_hyphen_free_id() {
        let mut board = Board::new();
        let id = board.add_column("Backlog");
        assert!(!id.contains('-'));
        assert_eq!(board.columns.len(), 1);
        assert_eq!(board.columns[0].title, "Backlog");
        assert!(board.columns[0].tasks.is_empty());
    }

    #[test]
    fn remove_column_filters_by_id() {
        let mut board = default_board();
        board.remove_column("done");
        assert!(board.column("done").is_none());
        assert_eq!(board.columns.len(), 3);
    }

    #[test]
    fn add_task_to_empty_column_yields_one_editable_task() {
        let mut board = default_board();
        let id = board.add_task("done").unwrap();
        let done = board.column("done").unwrap();
        assert_eq!(done.tasks.len(), 1);
        assert_eq!(done.tasks[0].id, id);
        assert!(done.tasks[0].editing);
    }

    #[test]
    fn add_task_to_missing_column_is_a_no_op() {
        let mut board = default_board();
        let before = board.clone();
        assert!(board.add_task("missing").is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn delete_tasks_removes_by_membership() {
        let mut board = default_board();
        board.delete_tasks("todo", &["2".to_string(), "3".to_string()]);
        let todo = board.column("todo").unwrap();
        assert_eq!(todo.tasks.len(), 1);
        assert_eq!(todo.tasks[0].id, "1");
    }

    #[test]
    fn rename_and_recolor_resolve_by_id() {
        let mut board = default_board();
        board.rename_column("todo", "Inbox");
        board.rename_task("todo", "1", "Buy oat milk");
        board.recolor_task("todo", "1", "#112233");
        board.recolor_column(
            "todo",
            "#334455",
            Some(Hsva { h: 210.0, s: 100.0, v: 56.0, a: 1.0 }),
        );
        let todo = board.column("todo").unwrap();
        assert_eq!(todo.title, "Inbox");
        assert_eq!(todo.bg, "#334455");
        assert_eq!(todo.hsva.h, 210.0);
        assert_eq!(todo.tasks[0].title, "Buy oat milk");
        assert_eq!(todo.tasks[0].bg, "#112233");

        // Unresolvable ids fall through without touching anything.
        let before = board.clone();
        board.rename_task("todo", "missing", "x");
        board.recolor_column("missing", "#000000", None);
        assert_eq!(board, before);
    }

    #[test]
    fn from_json_str_rejects_non_arrays() {
        let err = Board::from_json_str(r#"{"columns":[]}"#).unwrap_err();
        assert!(matches!(err, CorkboardError::Validation(_)));
        assert!(Board::from_json_str("not json").is_err());
    }

    #[test]
    fn from_json_str_normalizes_missing_task_lists() {
        let board = Board::from_json_str(
            r#"[{"id":"todo","title":"To Do","bg":"bg-slate-600","hsva":{"h":30,"s":60,"v":80,"a":1}}]"#,
        )
        .unwrap();
        assert!(board.columns[0].tasks.is_empty());
    }

    #[test]
    fn board_serializes_as_a_bare_array() {
        let board = default_board();
        let json = serde_json::to_value(&board).unwrap();
        assert!(json.is_array());
        let round_tripped: Board = serde_json::from_value(json).unwrap();
        assert_eq!(round_tripped, board);
    }
}
