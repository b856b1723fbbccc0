use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default card background for freshly created tasks.
pub const DEFAULT_TASK_BG: &str = "bg-blue-800";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    /// Style class name or `#rrggbb` hex color.
    pub bg: String,
    /// Transient UI flag: the card's title input has focus.
    #[serde(rename = "isEditing", default, skip_serializing_if = "std::ops::Not::not")]
    pub editing: bool,
}

impl Task {
    pub fn new(title: impl Into<String>, bg: impl Into<String>) -> Self {
        Self {
            id: Self::fresh_id(),
            title: title.into(),
            bg: bg.into(),
            editing: false,
        }
    }

    /// A new blank card, ready for the user to type into.
    pub fn untitled() -> Self {
        Self {
            id: Self::fresh_id(),
            title: "Untitled".to_string(),
            bg: DEFAULT_TASK_BG.to_string(),
            editing: true,
        }
    }

    pub fn fresh_id() -> String {
        Uuid::new_v4().simple().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untitled_task_is_editable_with_unique_id() {
        let a = Task::untitled();
        let b = Task::untitled();
        assert!(a.editing);
        assert_eq!(a.title, "Untitled");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn editing_flag_is_omitted_when_false() {
        let task = Task::new("Buy milk", "bg-blue-800");
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("isEditing").is_none());

        let editing = Task::untitled();
        let json = serde_json::to_value(&editing).unwrap();
        assert_eq!(json["isEditing"], true);
    }

    #[test]
    fn editing_flag_defaults_to_false_on_load() {
        let task: Task =
            serde_json::from_str(r#"{"id":"1","title":"Buy milk","bg":"bg-blue-800"}"#).unwrap();
        assert!(!task.editing);
    }
}
