use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewDayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("IO error on {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Index file not found: {path} (create it before running newday)")]
    IndexMissing { path: PathBuf },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid date \"{input}\" (expected YYYY-MM-DD or YYYYMMDD)")]
    InvalidDate { input: String },
}

impl NewDayError {
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NewDayError::File {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, NewDayError>;
