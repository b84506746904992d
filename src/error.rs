use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot open {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected 5 fields in sensitivity record, got {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid number {field:?}: {source}")]
    Float {
        line: usize,
        field: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}
