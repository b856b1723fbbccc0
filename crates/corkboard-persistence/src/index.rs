use corkboard_core::{CorkboardError, CorkboardResult};
use std::path::{Path, PathBuf};

use crate::store::atomic_writer::AtomicWriter;

/// Small side file enumerating document names only, kept independent of the
/// documents themselves. A document can exist without being listed and vice
/// versa; the index is a convenience, not a source of truth.
#[derive(Debug, Clone)]
pub struct DocumentIndex {
    path: PathBuf,
}

impl DocumentIndex {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            path: root.as_ref().join("documents.json"),
        }
    }

    pub async fn load(&self) -> CorkboardResult<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = AtomicWriter::read_all(&self.path).await?;
        serde_json::from_slice(&data).map_err(|e| CorkboardError::Serialization(e.to_string()))
    }

    /// Append a name if it is not already listed.
    pub async fn add(&self, name: &str) -> CorkboardResult<()> {
        let mut names = self.load().await?;
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
            self.store(&names).await?;
        }
        Ok(())
    }

    pub async fn remove(&self, name: &str) -> CorkboardResult<()> {
        let mut names = self.load().await?;
        let before = names.len();
        names.retain(|n| n != name);
        if names.len() != before {
            self.store(&names).await?;
        }
        Ok(())
    }

    async fn store(&self, names: &[String]) -> CorkboardResult<()> {
        let data = serde_json::to_vec_pretty(names)
            .map_err(|e| CorkboardError::Serialization(e.to_string()))?;
        AtomicWriter::write_atomic(&self.path, &data).await
    }
}
