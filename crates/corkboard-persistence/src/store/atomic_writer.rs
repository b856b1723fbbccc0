use corkboard_core::CorkboardResult;
use std::path::Path;
use tokio::fs;

/// Write-to-temp-file then atomic-rename, so a crash mid-save never leaves
/// a half-written document behind.
pub struct AtomicWriter;

impl AtomicWriter {
    pub async fn write_atomic(path: &Path, data: &[u8]) -> CorkboardResult<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).await?;

        // Temp file in the same directory keeps the rename on one filesystem.
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp_file.path().to_path_buf();

        fs::write(&temp_path, data).await?;
        fs::rename(&temp_path, path).await?;

        tracing::debug!("wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    pub async fn read_all(path: &Path) -> CorkboardResult<Vec<u8>> {
        let data = fs::read(path).await?;
        tracing::debug!("read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_and_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.json");

        AtomicWriter::write_atomic(&path, b"[]").await.unwrap();
        assert_eq!(AtomicWriter::read_all(&path).await.unwrap(), b"[]");
    }

    #[tokio::test]
    async fn creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("workspaces").join("doc.json");

        AtomicWriter::write_atomic(&path, b"[]").await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn overwrites_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.json");

        AtomicWriter::write_atomic(&path, b"first").await.unwrap();
        AtomicWriter::write_atomic(&path, b"second").await.unwrap();
        assert_eq!(AtomicWriter::read_all(&path).await.unwrap(), b"second");
    }
}
