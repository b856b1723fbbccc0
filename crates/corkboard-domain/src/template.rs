use crate::board::Board;
use crate::column::{Column, Hsva};
use crate::task::Task;

/// Color-wheel state matching each built-in column style.
pub fn hsva_for_style(style: &str) -> Option<Hsva> {
    let (h, s, v, a) = match style {
        "bg-slate-600" => (30.0, 60.0, 80.0, 1.0),
        "bg-slate-700" => (120.0, 60.0, 80.0, 1.0),
        "bg-slate-900" => (270.0, 60.0, 80.0, 1.0),
        "bg-slate-800" => (0.0, 0.0, 50.0, 1.0),
        "bg-blue-900" => (210.0, 100.0, 56.0, 1.0),
        _ => return None,
    };
    Some(Hsva { h, s, v, a })
}

fn seeded_column(id: &str, title: &str, bg: &str, tasks: Vec<Task>) -> Column {
    Column {
        id: id.to_string(),
        title: title.to_string(),
        bg: bg.to_string(),
        hsva: hsva_for_style(bg).unwrap_or(Hsva { h: 0.0, s: 0.0, v: 50.0, a: 1.0 }),
        tasks,
    }
}

fn seeded_task(id: &str, title: &str, bg: &str) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        bg: bg.to_string(),
        editing: false,
    }
}

/// The starter document every new workspace begins from.
pub fn default_board() -> Board {
    Board {
        columns: vec![
            seeded_column(
                "todo",
                "To Do",
                "bg-slate-600",
                vec![
                    seeded_task("1", "Buy milk", "bg-blue-800"),
                    seeded_task("2", "Finish project", "bg-green-800"),
                    seeded_task("3", "Call mom", "bg-red-800"),
                ],
            ),
            seeded_column(
                "inProgress",
                "In Progress",
                "bg-slate-700",
                vec![
                    seeded_task("4", "Write report", "bg-yellow-700"),
                    seeded_task("5", "Fix bug", "bg-pink-700"),
                ],
            ),
            seeded_column("done", "Done", "bg-slate-900", Vec::new()),
            seeded_column("trashed", "Trashed", "bg-slate-800", Vec::new()),
        ],
    }
}
