use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("lookup file {path}: {source}")]
    LookupFile {
        path: PathBuf,
        source: csv::Error,
    },

    /// A lookup file row without the two expected columns.
    #[error("lookup file {path}: line {line} has no value column")]
    LookupShape { path: PathBuf, line: usize },
}

pub type Result<T> = std::result::Result<T, IngestError>;
