use async_recursion::async_recursion;
use std::{ffi::OsString, fs::FileType, io::Write, path::Path};

use crate::{
    application::TokioFileRenamer,
    config::Config,
    domain::FileRenamer,
    errors::{PrefixRenameError, PrefixRenameResult},
    utils::path::replace_prefix,
};

/// Counters collected over one successful walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameSummary {
    /// Directories visited, the root included
    pub directories: usize,
    /// Regular files inspected
    pub files: usize,
    /// Files renamed
    pub renamed: usize,
}

/// Walks the configured directory and renames every regular file carrying the prefix
///
/// The walk is depth-first. Siblings are handled in lexical order of their
/// names, and a directory's listing is read completely before any of its
/// entries is renamed. The first I/O failure aborts the walk; renames done
/// before it stay in place.
pub struct PrefixRenameService {
    config: Config,
    renamer: Box<dyn FileRenamer>,
}

impl PrefixRenameService {
    /// Create a service renaming through the real filesystem
    pub fn new(config: Config) -> Self {
        Self::with_renamer(config, TokioFileRenamer::new())
    }

    pub fn with_renamer(config: Config, renamer: impl FileRenamer + 'static) -> Self {
        Self {
            config,
            renamer: Box::new(renamer),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the walk, writing each new base name plus a newline to `diagnostics`
    ///
    /// # Errors
    /// * [`PrefixRenameError::Traversal`] - the root or a directory below it cannot be read
    /// * [`PrefixRenameError::Rename`] - a matching file cannot be renamed
    pub async fn run(
        &self,
        diagnostics: &mut (dyn Write + Send),
    ) -> PrefixRenameResult<RenameSummary> {
        let root = Path::new(self.config.directory());
        let metadata = tokio::fs::metadata(root)
            .await
            .map_err(|source| traversal_error(root, source))?;

        let mut summary = RenameSummary::default();
        if metadata.is_dir() {
            self.walk_directory(root, &mut summary, diagnostics).await?;
        } else if let Some(name) = root.file_name() {
            let parent = root.parent().unwrap_or_else(|| Path::new(""));
            self.visit_entry(
                parent,
                name.to_os_string(),
                metadata.file_type(),
                &mut summary,
                diagnostics,
            )
            .await?;
        }

        tracing::info!(
            directory = %root.display(),
            directories = summary.directories,
            files = summary.files,
            renamed = summary.renamed,
            "Rename walk completed"
        );
        Ok(summary)
    }

    #[async_recursion]
    async fn walk_directory(
        &self,
        dir: &Path,
        summary: &mut RenameSummary,
        diagnostics: &mut (dyn Write + Send),
    ) -> PrefixRenameResult<()> {
        summary.directories += 1;
        tracing::debug!(directory = %dir.display(), "Entering directory");

        for (name, file_type) in read_sorted_entries(dir).await? {
            if file_type.is_dir() {
                self.walk_directory(&dir.join(&name), summary, diagnostics)
                    .await?;
            } else {
                self.visit_entry(dir, name, file_type, summary, diagnostics)
                    .await?;
            }
        }

        Ok(())
    }

    async fn visit_entry(
        &self,
        dir: &Path,
        name: OsString,
        file_type: FileType,
        summary: &mut RenameSummary,
        diagnostics: &mut (dyn Write + Send),
    ) -> PrefixRenameResult<()> {
        if !file_type.is_file() {
            tracing::debug!(path = %dir.join(&name).display(), "Skipping non-regular file");
            return Ok(());
        }
        summary.files += 1;

        let Some(new_name) =
            replace_prefix(&name, self.config.search_prefix(), self.config.replace_with())
        else {
            return Ok(());
        };

        let from = dir.join(&name);
        let to = dir.join(&new_name);
        self.renamer
            .rename(&from, &to)
            .await
            .map_err(|source| PrefixRenameError::Rename {
                from: from.display().to_string(),
                to: to.display().to_string(),
                source,
            })?;
        summary.renamed += 1;
        tracing::info!(from = %from.display(), to = %to.display(), "Renamed file");

        // Only the last component is reported when the replacement holds a separator
        let base_name = to
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        // The rename already happened, a lost progress line is not worth aborting for
        if let Err(e) = writeln!(diagnostics, "{base_name}") {
            tracing::warn!("Failed to report renamed file {}: {}", base_name, e);
        }
        Ok(())
    }
}

/// List `dir` completely, sorted by file name
async fn read_sorted_entries(dir: &Path) -> PrefixRenameResult<Vec<(OsString, FileType)>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|source| traversal_error(dir, source))?;

    let mut listing = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|source| traversal_error(dir, source))?
    {
        let file_type = entry
            .file_type()
            .await
            .map_err(|source| traversal_error(&entry.path(), source))?;
        listing.push((entry.file_name(), file_type));
    }

    listing.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(listing)
}

fn traversal_error(path: &Path, source: std::io::Error) -> PrefixRenameError {
    PrefixRenameError::Traversal {
        path: path.display().to_string(),
        source,
    }
}
