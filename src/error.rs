use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("pending set is empty")]
    Empty,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ResourceError>;
