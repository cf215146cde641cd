use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Conditions under which no parsing cursor can be established for a file.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 text", path.display())]
    Utf8 { path: PathBuf },

    #[error("{}: metadata header never reaches a `Content` line", path.display())]
    MissingContent { path: PathBuf },

    #[error("invalid parse options in {}: {source}", path.display())]
    Options {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
