use std::path::PathBuf;

use thiserror::Error;

/// Failures around the extractor: reading cards, loading settings, writing
/// output. Extraction itself cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no card files with extensions {:?} under {}", .extensions, .path.display())]
    NoInput {
        path: PathBuf,
        extensions: Vec<String>,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
