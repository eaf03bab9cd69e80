use std::num::ParseIntError;
use std::path::PathBuf;

/// A score token that is not a valid integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid score token {token:?}: {source}")]
pub struct FormatError {
    pub token: String,
    #[source]
    pub source: ParseIntError,
}

/// Fatal errors that abort a whole read. No partial corpus is returned.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("line {line}: {source}")]
    Format {
        line: usize,
        #[source]
        source: FormatError,
    },

    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
