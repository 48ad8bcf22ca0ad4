use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by a job data source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to access job store {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse job store {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize jobs: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SourceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SourceError::Io { path: path.into(), source }
    }
}
