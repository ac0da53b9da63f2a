use std::io;

/// Result type for every fallible operation in the tool
pub type PrefixRenameResult<T> = Result<T, PrefixRenameError>;

/// Errors raised while parsing arguments, loading the config or renaming files
///
/// Each message starts with the phase the failure happened in. The underlying
/// error is kept as the `source`.
#[derive(thiserror::Error, Debug)]
pub enum PrefixRenameError {
    #[error("error parsing flags: unable to parse arguments: {}", first_line(.0))]
    InvalidArguments(#[source] clap::Error),
    #[error("error reading config file: {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("error reading config file: {path}: invalid configuration: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("error renaming files: unable to walk {path}: {source}")]
    Traversal {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("error renaming files: rename {from} -> {to}: {source}")]
    Rename {
        from: String,
        to: String,
        #[source]
        source: io::Error,
    },
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}

impl PrefixRenameError {
    /// Whether the error is clap asking to print help or version text
    ///
    /// Those are reported through the error path but are not failures.
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            PrefixRenameError::InvalidArguments(e)
                if matches!(
                    e.kind(),
                    clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
                )
        )
    }
}

/// First line of a clap error without its `error: ` tag
fn first_line(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.trim_start_matches("error: ").to_string()
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_phase_prefixes() {
        let err = PrefixRenameError::ConfigRead {
            path: "config.json".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "error reading config file: config.json: no such file"
        );

        let err = PrefixRenameError::Rename {
            from: "dir/a.txt".to_string(),
            to: "dir/b.txt".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("error renaming files:"));
        assert!(err.to_string().contains("dir/a.txt -> dir/b.txt"));
    }

    #[test]
    fn test_clap_errors_render_on_one_line() {
        let clap_err = clap::Error::raw(
            clap::error::ErrorKind::UnknownArgument,
            "unexpected argument '--nope' found\n\nUsage: prefix-rename\n",
        );
        let err = PrefixRenameError::InvalidArguments(clap_err);
        assert_eq!(
            err.to_string(),
            "error parsing flags: unable to parse arguments: unexpected argument '--nope' found"
        );
        assert!(!err.is_informational());
    }

    #[test]
    fn test_source_is_preserved() {
        let err = PrefixRenameError::Traversal {
            path: "missing".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let source = err.source().expect("traversal error keeps its source");
        assert_eq!(source.to_string(), "gone");
    }
}
