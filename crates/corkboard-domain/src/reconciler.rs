use crate::board::Board;
use crate::drag::DragId;

/// Snapshot of the dragged card, enough to render a drag overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct DragPreview {
    /// The composite drag id the gesture started on.
    pub id: String,
    pub title: String,
    pub bg: String,
}

/// Bounding rectangle of the hovered drop target, in the same vertical
/// coordinate space as the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropRect {
    pub top: f64,
    pub height: f64,
}

impl DropRect {
    pub fn mid_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Pointer sample taken when the drag was released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropPointer {
    pub y: f64,
    pub over_rect: DropRect,
}

impl DropPointer {
    /// True when the pointer sits in the lower half of the hovered target.
    pub fn below_midpoint(&self) -> bool {
        self.y > self.over_rect.mid_y()
    }
}

/// Translates drag gesture outcomes into board reorderings.
///
/// The board itself is owned by the caller and passed by reference; the
/// reconciler only holds the transient drag preview. Every operation is
/// total: an unresolvable reference yields the input board unchanged rather
/// than an error, since a gesture can race state updates.
#[derive(Debug, Default)]
pub struct Reconciler {
    preview: Option<DragPreview>,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preview(&self) -> Option<&DragPreview> {
        self.preview.as_ref()
    }

    /// Capture a preview of the card under `active_id`. A dangling id (or a
    /// bare column id, which gets no overlay) leaves the preview empty.
    pub fn begin_drag(&mut self, board: &Board, active_id: &str) -> Option<&DragPreview> {
        self.preview = None;
        let active = DragId::parse(active_id);
        if let Some(task_id) = active.task_id() {
            if let Some(task) = board
                .column(active.column_id())
                .and_then(|column| column.task(task_id))
            {
                self.preview = Some(DragPreview {
                    id: active_id.to_string(),
                    title: task.title.clone(),
                    bg: task.bg.clone(),
                });
            }
        }
        self.preview()
    }

    /// Complete a drag gesture and produce the next board.
    ///
    /// A release outside any droppable (`over_id` absent) and any dangling
    /// reference leave the board unchanged. The preview is cleared either
    /// way.
    pub fn end_drag(
        &mut self,
        board: &Board,
        active_id: &str,
        over_id: Option<&str>,
        pointer: Option<DropPointer>,
    ) -> Board {
        self.preview = None;
        let Some(over_id) = over_id else {
            return board.clone();
        };
        let active = DragId::parse(active_id);
        let over = DragId::parse(over_id);
        // Two bare column ids mean the columns themselves are being
        // reordered; anything else is a task gesture.
        if active.is_column() && over.is_column() {
            reorder_columns(board, active.column_id(), over.column_id())
        } else {
            move_task(board, &active, &over, pointer)
        }
    }

    /// Abandon the gesture. No board mutation, only the preview is dropped.
    pub fn cancel_drag(&mut self) {
        self.preview = None;
    }
}

/// Move-and-shift a column from its position to the target's position.
fn reorder_columns(board: &Board, active_id: &str, over_id: &str) -> Board {
    let (Some(from), Some(to)) = (
        board.column_position(active_id),
        board.column_position(over_id),
    ) else {
        return board.clone();
    };
    if from == to {
        return board.clone();
    }
    let mut next = board.clone();
    let column = next.columns.remove(from);
    next.columns.insert(to, column);
    next
}

fn move_task(board: &Board, active: &DragId, over: &DragId, pointer: Option<DropPointer>) -> Board {
    let Some(active_task) = active.task_id() else {
        return board.clone();
    };
    let from_id = active.column_id();
    let to_id = over.column_id();
    let (Some(from_pos), Some(to_pos)) = (
        board.column_position(from_id),
        board.column_position(to_id),
    ) else {
        return board.clone();
    };
    let Some(task_pos) = board.columns[from_pos].task_position(active_task) else {
        return board.clone();
    };

    if from_id == to_id {
        // Reorder within one column; dropping on the column body (no task
        // under the pointer) changes nothing.
        let Some(over_pos) = over
            .task_id()
            .and_then(|id| board.columns[to_pos].task_position(id))
        else {
            return board.clone();
        };
        let mut next = board.clone();
        let task = next.columns[from_pos].tasks.remove(task_pos);
        next.columns[from_pos].tasks.insert(over_pos, task);
        return next;
    }

    // Cross-column move.
    let mut next = board.clone();
    let task = next.columns[from_pos].tasks.remove(task_pos);
    let target = &mut next.columns[to_pos];
    let insert_at = match over.task_id().and_then(|id| target.task_position(id)) {
        Some(pos) => {
            // Hovering the LAST task is ambiguous between "insert before"
            // and "append"; the pointer's half of the task rect decides.
            let is_last = pos + 1 == target.tasks.len();
            match pointer {
                Some(p) if is_last && p.below_midpoint() => target.tasks.len(),
                _ => pos,
            }
        }
        // Dropped on the column's empty area rather than on a task.
        None => target.tasks.len(),
    };
    target.tasks.insert(insert_at, task);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::default_board;

    fn task_ids(board: &Board, column_id: &str) -> Vec<String> {
        board
            .column(column_id)
            .unwrap()
            .tasks
            .iter()
            .map(|task| task.id.clone())
            .collect()
    }

    fn column_ids(board: &Board) -> Vec<String> {
        board.columns.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn begin_drag_captures_the_task_preview() {
        let board = default_board();
        let mut reconciler = Reconciler::new();
        let preview = reconciler.begin_drag(&board, "todo-1").unwrap();
        assert_eq!(preview.title, "Buy milk");
        assert_eq!(preview.bg, "bg-blue-800");
        assert_eq!(preview.id, "todo-1");
    }

    #[test]
    fn begin_drag_on_a_dangling_id_leaves_no_preview() {
        let board = default_board();
        let mut reconciler = Reconciler::new();
        assert!(reconciler.begin_drag(&board, "todo-99").is_none());
        assert!(reconciler.begin_drag(&board, "todo").is_none());
    }

    #[test]
    fn cancel_drag_only_drops_the_preview() {
        let board = default_board();
        let mut reconciler = Reconciler::new();
        reconciler.begin_drag(&board, "todo-1");
        assert!(reconciler.preview().is_some());
        reconciler.cancel_drag();
        assert!(reconciler.preview().is_none());
    }

    #[test]
    fn release_outside_any_target_is_a_no_op() {
        let board = default_board();
        let mut reconciler = Reconciler::new();
        reconciler.begin_drag(&board, "todo-1");
        let next = reconciler.end_drag(&board, "todo-1", None, None);
        assert_eq!(next, board);
        assert!(reconciler.preview().is_none());
    }

    #[test]
    fn column_reorder_moves_and_shifts() {
        // Dragging `trashed` onto `todo` relocates it; everything else keeps
        // its relative order.
        let board = default_board();
        let mut reconciler = Reconciler::new();
        let next = reconciler.end_drag(&board, "trashed", Some("todo"), None);
        assert_eq!(column_ids(&next), ["trashed", "todo", "inProgress", "done"]);
        assert_eq!(next.task_count(), board.task_count());
    }

    #[test]
    fn column_reorder_onto_itself_is_a_no_op() {
        let board = default_board();
        let mut reconciler = Reconciler::new();
        let next = reconciler.end_drag(&board, "todo", Some("todo"), None);
        assert_eq!(next, board);
    }

    #[test]
    fn column_reorder_with_unknown_target_is_a_no_op() {
        let board = default_board();
        let mut reconciler = Reconciler::new();
        let next = reconciler.end_drag(&board, "todo", Some("archive"), None);
        assert_eq!(next, board);
    }

    #[test]
    fn same_column_move_relocates_one_task() {
        let board = default_board();
        let mut reconciler = Reconciler::new();
        let next = reconciler.end_drag(&board, "todo-1", Some("todo-3"), None);
        assert_eq!(task_ids(&next, "todo"), ["2", "3", "1"]);
        assert_eq!(next.column("todo").unwrap().tasks.len(), 3);
    }

    #[test]
    fn task_dropped_onto_itself_is_a_no_op() {
        let board = default_board();
        let mut reconciler = Reconciler::new();
        let next = reconciler.end_drag(&board, "todo-2", Some("todo-2"), None);
        assert_eq!(next, board);
    }

    #[test]
    fn same_column_drop_on_column_body_is_a_no_op() {
        let board = default_board();
        let mut reconciler = Reconciler::new();
        let next = reconciler.end_drag(&board, "todo-1", Some("todo"), None);
        assert_eq!(next, board);
    }

    #[test]
    fn cross_column_move_targets_a_task() {
        let board = default_board();
        let mut reconciler = Reconciler::new();
        let next = reconciler.end_drag(&board, "todo-1", Some("inProgress-5"), None);
        assert_eq!(task_ids(&next, "todo"), ["2", "3"]);
        assert_eq!(task_ids(&next, "inProgress"), ["4", "1", "5"]);
        assert_eq!(next.task_count(), board.task_count());
    }

    #[test]
    fn cross_column_drop_on_empty_area_appends() {
        let board = default_board();
        let mut reconciler = Reconciler::new();
        let next = reconciler.end_drag(&board, "todo-1", Some("done"), None);
        assert_eq!(task_ids(&next, "todo"), ["2", "3"]);
        assert_eq!(task_ids(&next, "done"), ["1"]);
    }

    #[test]
    fn pointer_above_last_task_midpoint_inserts_before_it() {
        // doing = [t4]; hovering t4 with the pointer in its upper half.
        let mut board = default_board();
        board.remove_column("inProgress");
        board.add_task("done");
        let t4 = board.column("done").unwrap().tasks[0].id.clone();
        let pointer = DropPointer {
            y: 110.0,
            over_rect: DropRect { top: 100.0, height: 50.0 },
        };
        let mut reconciler = Reconciler::new();
        let next = reconciler.end_drag(&board, "todo-1", Some(&format!("done-{t4}")), Some(pointer));
        assert_eq!(task_ids(&next, "done"), ["1".to_string(), t4.clone()]);
    }

    #[test]
    fn pointer_below_last_task_midpoint_appends() {
        let mut board = default_board();
        board.remove_column("inProgress");
        board.add_task("done");
        let t4 = board.column("done").unwrap().tasks[0].id.clone();
        let pointer = DropPointer {
            y: 140.0,
            over_rect: DropRect { top: 100.0, height: 50.0 },
        };
        let mut reconciler = Reconciler::new();
        let next = reconciler.end_drag(&board, "todo-1", Some(&format!("done-{t4}")), Some(pointer));
        assert_eq!(task_ids(&next, "done"), [t4.clone(), "1".to_string()]);
    }

    #[test]
    fn midpoint_tie_break_only_applies_to_the_last_task() {
        // Hovering a non-last task always inserts before it, pointer or not.
        let board = default_board();
        let pointer = DropPointer {
            y: 500.0,
            over_rect: DropRect { top: 100.0, height: 50.0 },
        };
        let mut reconciler = Reconciler::new();
        let next = reconciler.end_drag(&board, "todo-1", Some("inProgress-4"), Some(pointer));
        assert_eq!(task_ids(&next, "inProgress"), ["1", "4", "5"]);
    }

    #[test]
    fn dangling_references_leave_the_board_unchanged() {
        let board = default_board();
        let mut reconciler = Reconciler::new();
        // Unknown source task, unknown source column, unknown target column.
        assert_eq!(reconciler.end_drag(&board, "todo-99", Some("done"), None), board);
        assert_eq!(reconciler.end_drag(&board, "nowhere-1", Some("done"), None), board);
        assert_eq!(reconciler.end_drag(&board, "todo-1", Some("nowhere-1"), None), board);
        // Bare active id against a task target resolves no active task.
        assert_eq!(reconciler.end_drag(&board, "todo", Some("done-1"), None), board);
    }

    #[test]
    fn moves_preserve_total_task_count() {
        let board = default_board();
        let mut reconciler = Reconciler::new();
        let mut current = board.clone();
        for (active, over) in [
            ("todo-1", "inProgress-4"),
            ("inProgress-5", "done"),
            ("todo-2", "todo-3"),
            ("done-5", "trashed"),
        ] {
            current = reconciler.end_drag(&current, active, Some(over), None);
            assert_eq!(current.task_count(), board.task_count());
        }
        assert!(current.column("trashed").unwrap().task("5").is_some());
        assert!(current.column("done").unwrap().tasks.is_empty());
    }
}
