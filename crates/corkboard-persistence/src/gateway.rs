use async_trait::async_trait;
use corkboard_core::CorkboardResult;
use corkboard_domain::Board;

use crate::traits::WorkspaceStore;

/// Routes document operations to the primary store when one is configured,
/// otherwise to the local fallback, so an unconfigured hosted store degrades
/// to local files instead of failing.
pub struct WorkspaceGateway {
    primary: Option<Box<dyn WorkspaceStore>>,
    fallback: Box<dyn WorkspaceStore>,
}

impl WorkspaceGateway {
    pub fn new(primary: Option<Box<dyn WorkspaceStore>>, fallback: Box<dyn WorkspaceStore>) -> Self {
        Self { primary, fallback }
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    fn store(&self) -> &dyn WorkspaceStore {
        match &self.primary {
            Some(primary) => primary.as_ref(),
            None => {
                tracing::warn!("primary store not configured, using local fallback");
                self.fallback.as_ref()
            }
        }
    }
}

#[async_trait]
impl WorkspaceStore for WorkspaceGateway {
    async fn save(&self, name: &str, board: &Board) -> CorkboardResult<()> {
        self.store().save(name, board).await
    }

    async fn load(&self, name: &str) -> CorkboardResult<Option<Board>> {
        self.store().load(name).await
    }

    async fn list(&self) -> CorkboardResult<Vec<String>> {
        self.store().list().await
    }

    async fn delete(&self, name: &str) -> CorkboardResult<()> {
        self.store().delete(name).await
    }
}
