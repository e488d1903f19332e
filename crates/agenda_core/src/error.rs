use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read program document '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid program document: {0}")]
    Document(#[from] serde_json::Error),
    #[error("invalid agenda settings: {0}")]
    Settings(#[from] config::ConfigError),
}
