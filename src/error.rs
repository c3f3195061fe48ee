use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the normalizer and its file collaborators.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported language '{0}', use 'en' or 'zh'")]
    UnsupportedLanguage(String),
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a .txt file", .0.display())]
    NotTextFile(PathBuf),
    #[error("{}: Gutenberg {which} marker not found", .path.display())]
    MissingMarker { path: PathBuf, which: &'static str },
    #[error("{}: START marker ends after END marker begins", .0.display())]
    MarkersOutOfOrder(PathBuf),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("dictionary error: {0}")]
    Dictionary(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
