pub mod atomic_writer;
pub mod json_store;

pub use atomic_writer::AtomicWriter;
pub use json_store::{JsonWorkspaceStore, LocalFallbackStore};
