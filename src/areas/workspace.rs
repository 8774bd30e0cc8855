use anyhow::Context;
use std::path::{Path, PathBuf};

/// File system access rooted at the invocation directory.
///
/// Input paths given on the command line resolve against this root; absolute
/// paths pass through unchanged.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn resolve(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    pub async fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.resolve(file_path);

        let content = tokio::fs::read_to_string(&file_path)
            .await
            .with_context(|| format!("Failed to read input file: {:?}", file_path))?;

        Ok(content)
    }

    pub async fn write_file(&self, file_path: &Path, content: &str) -> anyhow::Result<()> {
        let file_path = self.resolve(file_path);

        tokio::fs::write(&file_path, content)
            .await
            .with_context(|| format!("Failed to write output file: {:?}", file_path))?;

        Ok(())
    }
}
