use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("You must have a workspace open to export the files")]
    NoWorkspace,

    #[error("Unable to save exported Jupyter file {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CardsError>;
