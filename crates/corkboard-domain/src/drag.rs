use std::fmt;

/// A draggable item reference, decoded from the composite string id used on
/// the wire: either a bare column id (no `-`) or `<columnId>-<taskId>`.
///
/// Task ids may themselves contain `-`; the split always happens on the
/// FIRST separator and the remainder is the task id. Column ids therefore
/// must never contain `-` (see [`crate::Column::fresh_id`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DragId {
    Column(String),
    Task { column: String, task: String },
}

impl DragId {
    /// Decode a composite id. Infallible: no existence check is performed,
    /// and a malformed id simply yields a dangling reference that the
    /// reconciler absorbs as a no-op.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('-') {
            None => DragId::Column(raw.to_string()),
            Some((column, task)) => DragId::Task {
                column: column.to_string(),
                task: task.to_string(),
            },
        }
    }

    pub fn column(id: impl Into<String>) -> Self {
        DragId::Column(id.into())
    }

    pub fn task(column_id: impl Into<String>, task_id: impl Into<String>) -> Self {
        DragId::Task {
            column: column_id.into(),
            task: task_id.into(),
        }
    }

    pub fn is_column(&self) -> bool {
        matches!(self, DragId::Column(_))
    }

    pub fn column_id(&self) -> &str {
        match self {
            DragId::Column(id) => id,
            DragId::Task { column, .. } => column,
        }
    }

    pub fn task_id(&self) -> Option<&str> {
        match self {
            DragId::Column(_) => None,
            DragId::Task { task, .. } => Some(task),
        }
    }
}

impl fmt::Display for DragId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragId::Column(id) => write!(f, "{}", id),
            DragId::Task { column, task } => write!(f, "{}-{}", column, task),
        }
    }
}

impl From<&str> for DragId {
    fn from(raw: &str) -> Self {
        DragId::parse(raw)
    }
}
