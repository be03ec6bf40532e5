use std::path::Path;

use footprintbase::storage::FileStorage;
use tempfile::TempDir;

/// Disposable on-disk workspace for one test. Every store in a test shares
/// the same data directory, mirroring how the CLI wires them up.
pub struct WorkspaceFixture {
    workspace: TempDir,
}

impl WorkspaceFixture {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        Self { workspace }
    }

    pub fn data_dir(&self) -> &Path {
        self.workspace.path()
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.data_dir())
    }
}
