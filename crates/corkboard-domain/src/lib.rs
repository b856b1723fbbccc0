pub mod board;
pub mod column;
pub mod drag;
pub mod reconciler;
pub mod task;
pub mod template;

pub use board::Board;
pub use column::{Column, Hsva};
pub use drag::DragId;
pub use reconciler::{DragPreview, DropPointer, DropRect, Reconciler};
pub use task::Task;
pub use template::default_board;
