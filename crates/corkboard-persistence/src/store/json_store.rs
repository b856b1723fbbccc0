use async_trait::async_trait;
use corkboard_core::CorkboardResult;
use corkboard_domain::Board;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{validate_document_name, WorkspaceStore};

/// Primary document store: one JSON file per document under
/// `<root>/workspaces/<name>.json`, mirroring the hosted store's
/// `workspaces/<name>` key scheme.
#[derive(Debug, Clone)]
pub struct JsonWorkspaceStore {
    root: PathBuf,
}

impl JsonWorkspaceStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn workspaces_dir(&self) -> PathBuf {
        self.root.join("workspaces")
    }

    fn document_path(&self, name: &str) -> PathBuf {
        self.workspaces_dir().join(format!("{name}.json"))
    }
}

#[async_trait]
impl WorkspaceStore for JsonWorkspaceStore {
    async fn save(&self, name: &str, board: &Board) -> CorkboardResult<()> {
        validate_document_name(name)?;
        let data = board.to_json_string()?;
        AtomicWriter::write_atomic(&self.document_path(name), data.as_bytes()).await?;
        tracing::info!("workspace {name:?} saved");
        Ok(())
    }

    async fn load(&self, name: &str) -> CorkboardResult<Option<Board>> {
        validate_document_name(name)?;
        let path = self.document_path(name);
        if !path.exists() {
            tracing::info!("workspace {name:?} not found");
            return Ok(None);
        }
        let data = AtomicWriter::read_all(&path).await?;
        let raw = String::from_utf8_lossy(&data);
        let board = Board::from_json_str(&raw)?;
        tracing::info!("workspace {name:?} loaded");
        Ok(Some(board))
    }

    async fn list(&self) -> CorkboardResult<Vec<String>> {
        let dir = self.workspaces_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    async fn delete(&self, name: &str) -> CorkboardResult<()> {
        validate_document_name(name)?;
        let path = self.document_path(name);
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        tracing::info!("workspace {name:?} deleted");
        Ok(())
    }
}

/// Fallback store mirroring the browser local-storage layout: flat files
/// named `workspace_<name>.json` in a single directory.
#[derive(Debug, Clone)]
pub struct LocalFallbackStore {
    dir: PathBuf,
}

impl LocalFallbackStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn document_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("workspace_{name}.json"))
    }
}

#[async_trait]
impl WorkspaceStore for LocalFallbackStore {
    async fn save(&self, name: &str, board: &Board) -> CorkboardResult<()> {
        validate_document_name(name)?;
        let data = board.to_json_string()?;
        AtomicWriter::write_atomic(&self.document_path(name), data.as_bytes()).await?;
        tracing::info!("workspace {name:?} saved to local fallback");
        Ok(())
    }

    async fn load(&self, name: &str) -> CorkboardResult<Option<Board>> {
        validate_document_name(name)?;
        let path = self.document_path(name);
        if !path.exists() {
            return Ok(None);
        }
        let data = AtomicWriter::read_all(&path).await?;
        let raw = String::from_utf8_lossy(&data);
        Ok(Some(Board::from_json_str(&raw)?))
    }

    async fn list(&self) -> CorkboardResult<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if let Some(name) = file_name
                .strip_prefix("workspace_")
                .and_then(|rest| rest.strip_suffix(".json"))
            {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    async fn delete(&self, name: &str) -> CorkboardResult<()> {
        validate_document_name(name)?;
        let path = self.document_path(name);
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        tracing::info!("workspace {name:?} deleted from local fallback");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corkboard_domain::default_board;
    use tempfile::tempdir;

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = JsonWorkspaceStore::new(dir.path());
        let board = default_board();

        store.save("default", &board).await.unwrap();
        let loaded = store.load("default").await.unwrap().unwrap();
        assert_eq!(loaded, board);
    }

    #[tokio::test]
    async fn missing_document_loads_as_none() {
        let dir = tempdir().unwrap();
        let store = JsonWorkspaceStore::new(dir.path());
        assert!(store.load("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn load_normalizes_columns_without_task_lists() {
        let dir = tempdir().unwrap();
        let store = JsonWorkspaceStore::new(dir.path());
        let path = dir.path().join("workspaces");
        tokio::fs::create_dir_all(&path).await.unwrap();
        tokio::fs::write(
            path.join("bare.json"),
            r#"[{"id":"todo","title":"To Do","bg":"bg-slate-600","hsva":{"h":30,"s":60,"v":80,"a":1}}]"#,
        )
        .await
        .unwrap();

        let board = store.load("bare").await.unwrap().unwrap();
        assert!(board.columns[0].tasks.is_empty());
    }

    #[tokio::test]
    async fn list_returns_sorted_document_names() {
        let dir = tempdir().unwrap();
        let store = JsonWorkspaceStore::new(dir.path());
        let board = default_board();
        store.save("zeta", &board).await.unwrap();
        store.save("alpha", &board).await.unwrap();

        assert_eq!(store.list().await.unwrap(), ["alpha", "zeta"]);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = JsonWorkspaceStore::new(dir.path());
        store.save("doc", &default_board()).await.unwrap();

        store.delete("doc").await.unwrap();
        assert!(store.load("doc").await.unwrap().is_none());
        store.delete("doc").await.unwrap();
    }

    #[tokio::test]
    async fn fallback_store_uses_the_flat_key_scheme() {
        let dir = tempdir().unwrap();
        let store = LocalFallbackStore::new(dir.path());
        store.save("My Board", &default_board()).await.unwrap();

        assert!(dir.path().join("workspace_My Board.json").exists());
        assert_eq!(store.list().await.unwrap(), ["My Board"]);
        assert!(store.load("My Board").await.unwrap().is_some());

        store.delete("My Board").await.unwrap();
        assert_eq!(store.list().await.unwrap(), Vec::<String>::new());
    }

    #[tokio::test]
    async fn path_like_names_are_rejected() {
        let dir = tempdir().unwrap();
        let store = JsonWorkspaceStore::new(dir.path());
        assert!(store.save("../escape", &default_board()).await.is_err());
        assert!(store.load("a/b").await.is_err());
    }
}
