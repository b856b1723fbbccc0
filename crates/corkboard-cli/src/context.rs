use corkboard_core::CorkboardResult;
use corkboard_domain::{default_board, Board};
use corkboard_persistence::{
    AtomicWriter, DocumentIndex, JsonWorkspaceStore, LocalFallbackStore, WorkspaceGateway,
};
use std::path::{Path, PathBuf};

/// The CLI's working state: the scratch board plus the stores rooted at the
/// workspace directory. The scratch board lives at `<root>/board.json` and
/// is rewritten after every mutating command.
pub struct CliContext {
    pub board: Board,
    board_path: PathBuf,
    gateway: WorkspaceGateway,
    index: DocumentIndex,
}

impl CliContext {
    pub async fn load(root: &Path) -> CorkboardResult<Self> {
        let board_path = root.join("board.json");
        let board = if board_path.exists() {
            let data = AtomicWriter::read_all(&board_path).await?;
            Board::from_json_str(&String::from_utf8_lossy(&data))?
        } else {
            default_board()
        };

        let primary = JsonWorkspaceStore::new(root);
        let fallback = LocalFallbackStore::new(root.join("local"));
        Ok(Self {
            board,
            board_path,
            gateway: WorkspaceGateway::new(Some(Box::new(primary)), Box::new(fallback)),
            index: DocumentIndex::new(root),
        })
    }

    pub async fn save(&self) -> CorkboardResult<()> {
        let data = self.board.to_json_string()?;
        AtomicWriter::write_atomic(&self.board_path, data.as_bytes()).await
    }

    pub fn gateway(&self) -> &WorkspaceGateway {
        &self.gateway
    }

    pub fn index(&self) -> &DocumentIndex {
        &self.index
    }
}
