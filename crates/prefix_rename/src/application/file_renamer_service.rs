use async_trait::async_trait;
use std::{io, path::Path};

use crate::domain::FileRenamer;

/// [`FileRenamer`] backed by `tokio::fs::rename`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileRenamer;

impl TokioFileRenamer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileRenamer for TokioFileRenamer {
    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        tokio::fs::rename(from, to).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_rename_moves_file() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("old.txt");
        let to = temp_dir.path().join("new.txt");
        tokio::fs::write(&from, "content").await.unwrap();

        TokioFileRenamer::new().rename(&from, &to).await.unwrap();

        assert!(!from.exists());
        assert_eq!(tokio::fs::read_to_string(&to).await.unwrap(), "content");
    }

    #[tokio::test]
    async fn test_rename_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("absent.txt");
        let to = temp_dir.path().join("new.txt");

        let err = TokioFileRenamer::new().rename(&from, &to).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
