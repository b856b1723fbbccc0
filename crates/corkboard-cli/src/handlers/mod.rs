pub mod board;
pub mod column;
pub mod moves;
pub mod task;
pub mod template;
pub mod workspace;
