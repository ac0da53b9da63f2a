use async_trait::async_trait;
use std::{io, path::Path};

/// Domain trait for the single rename system call
///
/// Keeps the walker independent from the filesystem so tests can inject
/// failing implementations.
#[async_trait]
pub trait FileRenamer: Send + Sync {
    /// Rename `from` to `to` as one filesystem operation
    ///
    /// An existing `to` is handled the way the host filesystem handles it.
    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}
