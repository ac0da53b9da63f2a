use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::errors::{PrefixRenameError, PrefixRenameResult};

const CONFIG_FLAG: &str = "-config";

/// Prefix Rename
///
/// Walks a directory tree and renames every regular file whose name starts
/// with a configured prefix, swapping that prefix for a replacement string.
///
/// ## Configuration
/// The job is described by a JSON file:
/// ```json
/// {
///   "directory": "./photos",
///   "search_prefix": "IMG_",
///   "replace_with": "holiday_"
/// }
/// ```
///
/// ## Output
/// Each renamed file's new name is written to stderr, one per line.
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "prefix-rename")]
#[command(about = "Recursively rename files by replacing a filename prefix")]
#[command(version)]
#[command(args_override_self = true)]
#[command(
    long_about = "Recursively rename files by replacing a filename prefix. \nThe target directory, prefix and replacement are read from a JSON configuration file."
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(
        long = "config",
        value_name = "PATH",
        default_value = "config.json",
        help = "Path to the configuration file",
        long_help = "Path to the JSON configuration file. \nAccepted as -config <PATH>, --config <PATH> or with an `=` separator. \nWhen given more than once, the last value wins."
    )]
    pub config: PathBuf,

    /// Arguments after the first non-flag argument, ignored
    #[arg(hide = true, trailing_var_arg = true)]
    pub ignored: Vec<OsString>,
}

impl Cli {
    /// Parse an explicit argument list, the first item being the program name
    ///
    /// A fresh parser is built on every call, so repeated invocations never
    /// share state.
    pub fn try_parse_args<I, T>(args: I) -> PrefixRenameResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args)).map_err(PrefixRenameError::InvalidArguments)
    }

    /// Parse the argument list and load the configuration file it points to
    pub async fn parse_config_from<I, T>(args: I) -> PrefixRenameResult<Config>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let cli = Self::try_parse_args(args)?;
        if !cli.ignored.is_empty() {
            tracing::debug!("Ignoring trailing arguments: {:?}", cli.ignored);
        }
        Config::load(&cli.config).await
    }
}

/// Rewrite the single-dash `-config` spelling into clap's `--config`
fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 {
                return arg;
            }
            match arg.to_str() {
                Some(s) if s == CONFIG_FLAG || s.starts_with("-config=") => {
                    OsString::from(format!("-{s}"))
                }
                _ => arg,
            }
        })
        .collect()
}
