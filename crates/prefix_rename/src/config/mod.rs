use std::path::Path;

use derive_getters::Getters;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{PrefixRenameError, PrefixRenameResult};

/// Rename job loaded from the JSON config file
///
/// Missing or `null` fields default to the empty string and unknown fields
/// are ignored. Keys are matched case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct Config {
    /// Root of the walk
    #[serde(deserialize_with = "null_as_empty")]
    directory: String,
    /// Literal prefix matched against file base names
    #[serde(deserialize_with = "null_as_empty")]
    search_prefix: String,
    /// Text substituted for the first occurrence of the prefix
    #[serde(deserialize_with = "null_as_empty")]
    replace_with: String,
}

impl Config {
    #[cfg(test)]
    pub fn new(
        directory: impl Into<String>,
        search_prefix: impl Into<String>,
        replace_with: impl Into<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            search_prefix: search_prefix.into(),
            replace_with: replace_with.into(),
        }
    }

    /// Read and decode the config file at `path`
    ///
    /// # Errors
    /// * [`PrefixRenameError::ConfigRead`] - the file cannot be opened or read
    /// * [`PrefixRenameError::ConfigParse`] - the contents are not a config object
    ///
    /// A `null` document loads as an all-empty config.
    pub async fn load(path: &Path) -> PrefixRenameResult<Self> {
        let data =
            tokio::fs::read(path)
                .await
                .map_err(|source| PrefixRenameError::ConfigRead {
                    path: path.display().to_string(),
                    source,
                })?;

        let config = serde_json::from_slice::<Option<Config>>(&data)
            .map_err(|source| PrefixRenameError::ConfigParse {
                path: path.display().to_string(),
                source,
            })?
            .unwrap_or_default();

        tracing::debug!(
            config = %path.display(),
            directory = %config.directory,
            search_prefix = %config.search_prefix,
            replace_with = %config.replace_with,
            "Loaded configuration"
        );
        Ok(config)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
