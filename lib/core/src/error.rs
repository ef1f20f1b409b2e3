use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("Invalid record in {path} at line {line}: {message}")]
    InvalidRecord {
        path: PathBuf,
        line: u64,
        message: String,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_record(path: impl Into<PathBuf>, line: u64, message: impl Into<String>) -> Self {
        Error::InvalidRecord {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}
