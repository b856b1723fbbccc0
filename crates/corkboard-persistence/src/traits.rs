use async_trait::async_trait;
use corkboard_core::{CorkboardError, CorkboardResult};
use corkboard_domain::Board;

/// Named board snapshot storage.
///
/// Implementations load and save whole documents; there is no partial
/// update. `load` distinguishes "absent" (`Ok(None)`) from failure, and
/// `delete` is idempotent.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkspaceStore: Send + Sync {
    async fn save(&self, name: &str, board: &Board) -> CorkboardResult<()>;

    async fn load(&self, name: &str) -> CorkboardResult<Option<Board>>;

    async fn list(&self) -> CorkboardResult<Vec<String>>;

    async fn delete(&self, name: &str) -> CorkboardResult<()>;
}

/// Document names become file names, so path-like names are rejected before
/// they reach any store.
pub fn validate_document_name(name: &str) -> CorkboardResult<()> {
    if name.is_empty() {
        return Err(CorkboardError::Validation(
            "document name must not be empty".to_string(),
        ));
    }
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(CorkboardError::Validation(format!(
            "document name contains path separators: {name}"
        )));
    }
    Ok(())
}
